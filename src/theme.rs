use fltk::{app, enums::Color};

// Dark theme color palette
pub const BG_DARK: u32        = 0x1e1e2e;  // main background
pub const BG_PANEL: u32       = 0x2a2a3a;  // panel background
pub const BG_WIDGET: u32      = 0x363646;  // widget/button background
pub const TEXT_PRIMARY: u32   = 0xcdd6f4;  // main text
pub const TEXT_SECONDARY: u32 = 0xa6adc8;  // dimmed text
pub const ACCENT_BLUE: u32    = 0x89b4fa;  // primary accent
pub const ACCENT_RED: u32     = 0xf38ba8;  // recording indicator

pub fn apply_dark_theme() {
    app::set_background_color(
        ((BG_PANEL >> 16) & 0xFF) as u8,
        ((BG_PANEL >> 8) & 0xFF) as u8,
        (BG_PANEL & 0xFF) as u8,
    );
    app::set_background2_color(
        ((BG_WIDGET >> 16) & 0xFF) as u8,
        ((BG_WIDGET >> 8) & 0xFF) as u8,
        (BG_WIDGET & 0xFF) as u8,
    );
    app::set_foreground_color(
        ((TEXT_PRIMARY >> 16) & 0xFF) as u8,
        ((TEXT_PRIMARY >> 8) & 0xFF) as u8,
        (TEXT_PRIMARY & 0xFF) as u8,
    );
    app::set_selection_color(
        ((ACCENT_BLUE >> 16) & 0xFF) as u8,
        ((ACCENT_BLUE >> 8) & 0xFF) as u8,
        (ACCENT_BLUE & 0xFF) as u8,
    );

    app::set_scheme(app::Scheme::Gtk);
}

pub fn color(hex: u32) -> Color {
    Color::from_hex(hex)
}
