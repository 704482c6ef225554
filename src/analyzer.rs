use realfft::num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::{Arc, Mutex};

use crate::capture::SampleRing;

/// Analysis window length in samples. Fixed for the process lifetime.
pub const FFT_SIZE: usize = 2048;

/// Number of frequency bins exposed per frame (half the window).
pub const BIN_COUNT: usize = FFT_SIZE / 2;

/// Anything that can hand the compositor a magnitude frame for the current
/// tick. The live implementation reads the capture ring; tests drive the
/// compositor with canned frames.
pub trait SpectrumSource {
    /// Magnitude bytes (one per bin, ascending frequency) for the most
    /// recent window, or None when no data is ready this tick.
    fn magnitudes(&mut self) -> Option<&[u8]>;
}

/// Converts the latest capture window into per-bin magnitude bytes.
///
/// Per-frame pipeline: snapshot the ring, apply a Blackman window, forward
/// real FFT, normalize by the window length, convert to dB and map the
/// [min_db, max_db] range onto 0..=255. No temporal smoothing is applied.
pub struct FrequencyAnalyzer {
    ring: Arc<Mutex<SampleRing>>,
    fft: Arc<dyn RealToComplex<f32>>,
    window: Vec<f32>,
    indata: Vec<f32>,
    spectrum: Vec<Complex<f32>>,
    bytes: Vec<u8>,
    min_db: f32,
    max_db: f32,
}

impl FrequencyAnalyzer {
    pub fn new(ring: Arc<Mutex<SampleRing>>, min_db: f32, max_db: f32) -> Self {
        let mut planner = RealFftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(FFT_SIZE);
        let spectrum = fft.make_output_vec();

        Self {
            ring,
            fft,
            window: blackman_window(FFT_SIZE),
            indata: vec![0.0; FFT_SIZE],
            spectrum,
            bytes: vec![0; BIN_COUNT],
            min_db,
            max_db,
        }
    }
}

impl SpectrumSource for FrequencyAnalyzer {
    fn magnitudes(&mut self) -> Option<&[u8]> {
        {
            let ring = self.ring.lock().unwrap();
            if !ring.snapshot_latest(&mut self.indata) {
                return None;
            }
        }

        for (sample, w) in self.indata.iter_mut().zip(&self.window) {
            *sample *= w;
        }

        self.fft
            .process(&mut self.indata, &mut self.spectrum)
            .expect("FFT processing failed");

        for (byte, c) in self.bytes.iter_mut().zip(&self.spectrum) {
            let magnitude = c.norm() / FFT_SIZE as f32;
            let db = 20.0 * magnitude.max(1e-10).log10();
            *byte = db_to_byte(db, self.min_db, self.max_db);
        }

        Some(&self.bytes)
    }
}

/// Blackman window, a0 = 0.42, a1 = 0.5, a2 = 0.08.
fn blackman_window(len: usize) -> Vec<f32> {
    use std::f32::consts::PI;
    (0..len)
        .map(|n| {
            let phase = 2.0 * PI * n as f32 / len as f32;
            0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos()
        })
        .collect()
}

/// Map a dB value onto the byte scale: min_db -> 0, max_db -> 255, clamped.
fn db_to_byte(db: f32, min_db: f32, max_db: f32) -> u8 {
    let scaled = 255.0 / (max_db - min_db) * (db - min_db);
    scaled.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer_over(samples: &[f32]) -> FrequencyAnalyzer {
        let mut ring = SampleRing::new(FFT_SIZE);
        ring.push(samples);
        FrequencyAnalyzer::new(Arc::new(Mutex::new(ring)), -100.0, -30.0)
    }

    #[test]
    fn test_db_to_byte_range() {
        assert_eq!(db_to_byte(-100.0, -100.0, -30.0), 0);
        assert_eq!(db_to_byte(-30.0, -100.0, -30.0), 255);
        assert_eq!(db_to_byte(-120.0, -100.0, -30.0), 0);
        assert_eq!(db_to_byte(0.0, -100.0, -30.0), 255);
        assert_eq!(db_to_byte(-65.0, -100.0, -30.0), 127);
    }

    #[test]
    fn test_window_tapers_to_edges() {
        let window = blackman_window(FFT_SIZE);
        assert_eq!(window.len(), FFT_SIZE);
        // Edges near zero, center near unity
        assert!(window[0].abs() < 0.001);
        assert!((window[FFT_SIZE / 2] - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_no_frame_until_window_filled() {
        let mut analyzer = analyzer_over(&[0.1; FFT_SIZE / 2]);
        assert!(analyzer.magnitudes().is_none());
    }

    #[test]
    fn test_sine_peaks_at_its_bin() {
        use std::f32::consts::PI;

        // Pure tone centered on bin 100
        let bin = 100usize;
        let samples: Vec<f32> = (0..FFT_SIZE)
            .map(|n| (2.0 * PI * bin as f32 * n as f32 / FFT_SIZE as f32).sin())
            .collect();

        let mut analyzer = analyzer_over(&samples);
        let bytes = analyzer.magnitudes().expect("window is full");

        assert_eq!(bytes.len(), BIN_COUNT);
        assert_eq!(bytes[bin], 255);
        // Well away from the tone, only window sidelobes remain
        assert!(bytes[bin - 20] < 200);
        assert!(bytes[bin + 20] < 200);
    }

    #[test]
    fn test_silence_maps_to_zero() {
        let mut analyzer = analyzer_over(&[0.0; FFT_SIZE]);
        let bytes = analyzer.magnitudes().expect("window is full");
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_frames_are_deterministic() {
        let samples: Vec<f32> = (0..FFT_SIZE).map(|n| (n as f32 * 0.01).sin()).collect();

        let mut analyzer = analyzer_over(&samples);
        let first = analyzer.magnitudes().expect("window is full").to_vec();
        let second = analyzer.magnitudes().expect("window is full").to_vec();
        assert_eq!(first, second);
    }
}
