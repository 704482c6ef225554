use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// All application settings, loaded from INI file or defaults.
/// Analysis parameters (FFT size) are fixed and deliberately not here.
#[derive(Debug, Clone)]
pub struct Settings {
    // ── Canvas ──
    pub canvas_width: i32,
    pub canvas_height: i32,

    // ── Timing ──
    pub refresh_hz: f64,

    // ── Capture ──
    pub sample_rate: u32,

    // ── Display range ──
    pub min_db: f32,
    pub max_db: f32,

    // ── Colors (hex) ──
    pub color_background: u32,
    pub color_axis: u32,
    pub color_gridline: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 720,
            canvas_height: 480,

            refresh_hz: 60.0,

            sample_rate: 44100,

            min_db: -100.0,
            max_db: -30.0,

            color_background: 0x000000,
            color_axis: 0xffffff,
            color_gridline: 0xffffff,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = "micfall.ini";

    /// Load settings from INI file, or create it with defaults if it doesn't exist.
    pub fn load_or_create() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => {
                    let mut settings = Self::default();
                    settings.parse_ini(&content);
                    settings
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not read {}: {}. Using defaults.",
                        Self::FILE_NAME,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            let settings = Self::default();
            settings.save();
            settings
        }
    }

    /// Save current settings to INI file.
    pub fn save(&self) {
        let content = self.to_ini();
        if let Err(e) = fs::write(Self::FILE_NAME, content) {
            eprintln!("Warning: Could not save {}: {}", Self::FILE_NAME, e);
        }
    }

    fn to_ini(&self) -> String {
        let mut s = String::new();
        s.push_str("# micfall Settings\n");
        s.push_str("# Edit values below. Delete this file to reset to defaults.\n\n");

        s.push_str("[Canvas]\n");
        s.push_str(&format!("canvas_width = {}\n", self.canvas_width));
        s.push_str(&format!("canvas_height = {}\n", self.canvas_height));
        s.push('\n');

        s.push_str("[Timing]\n");
        s.push_str("# refresh_hz: display ticks per second (one plot column per tick)\n");
        s.push_str(&format!("refresh_hz = {}\n", self.refresh_hz));
        s.push('\n');

        s.push_str("[Capture]\n");
        s.push_str(&format!("sample_rate = {}\n", self.sample_rate));
        s.push('\n');

        s.push_str("[Display]\n");
        s.push_str("# dB range mapped onto the 0-255 color scale\n");
        s.push_str(&format!("min_db = {}\n", self.min_db));
        s.push_str(&format!("max_db = {}\n", self.max_db));
        s.push('\n');

        s.push_str("[Colors]\n");
        s.push_str("# Colors are in hex (0xRRGGBB)\n");
        s.push_str(&format!(
            "color_background = 0x{:06x}\n",
            self.color_background
        ));
        s.push_str(&format!("color_axis = 0x{:06x}\n", self.color_axis));
        s.push_str(&format!("color_gridline = 0x{:06x}\n", self.color_gridline));

        s
    }

    fn parse_ini(&mut self, content: &str) {
        let map = parse_ini_to_map(content);

        if let Some(v) = map.get("canvas_width") {
            if let Ok(n) = v.parse() {
                self.canvas_width = n;
            }
        }
        if let Some(v) = map.get("canvas_height") {
            if let Ok(n) = v.parse() {
                self.canvas_height = n;
            }
        }
        if let Some(v) = map.get("refresh_hz") {
            if let Ok(n) = v.parse() {
                self.refresh_hz = n;
            }
        }
        if let Some(v) = map.get("sample_rate") {
            if let Ok(n) = v.parse() {
                self.sample_rate = n;
            }
        }
        if let Some(v) = map.get("min_db") {
            if let Ok(n) = v.parse() {
                self.min_db = n;
            }
        }
        if let Some(v) = map.get("max_db") {
            if let Ok(n) = v.parse() {
                self.max_db = n;
            }
        }
        if let Some(v) = map.get("color_background") {
            if let Some(n) = parse_hex(v) {
                self.color_background = n;
            }
        }
        if let Some(v) = map.get("color_axis") {
            if let Some(n) = parse_hex(v) {
                self.color_axis = n;
            }
        }
        if let Some(v) = map.get("color_gridline") {
            if let Some(n) = parse_hex(v) {
                self.color_gridline = n;
            }
        }
    }
}

/// Parse INI content into a flat key-value map (section headers are ignored,
/// keys are globally unique in our format).
fn parse_ini_to_map(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim().to_string();
            let val = val.trim().to_string();
            map.insert(key, val);
        }
    }
    map
}

/// Parse a hex string like "0x1e1e2e" or "1e1e2e" into u32.
fn parse_hex(s: &str) -> Option<u32> {
    let s = s.trim().trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ini_text_roundtrip() {
        let mut settings = Settings::default();
        settings.canvas_width = 960;
        settings.refresh_hz = 30.0;
        settings.min_db = -90.0;
        settings.color_gridline = 0xa6e3a1;

        let mut restored = Settings::default();
        restored.parse_ini(&settings.to_ini());

        assert_eq!(restored.canvas_width, 960);
        assert_eq!(restored.refresh_hz, 30.0);
        assert_eq!(restored.min_db, -90.0);
        assert_eq!(restored.color_gridline, 0xa6e3a1);
    }

    #[test]
    fn unknown_keys_keep_defaults() {
        let mut restored = Settings::default();
        restored.parse_ini("[Canvas]\nnot_a_key = 12\n");

        assert_eq!(restored.canvas_width, 720);
        assert_eq!(restored.canvas_height, 480);
        assert_eq!(restored.sample_rate, 44100);
    }

    #[test]
    fn hex_colors_parse_with_and_without_prefix() {
        assert_eq!(parse_hex("0x1e1e2e"), Some(0x1e1e2e));
        assert_eq!(parse_hex("ffffff"), Some(0xffffff));
        assert_eq!(parse_hex("zzz"), None);
    }
}
