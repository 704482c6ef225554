use fltk::{
    button::Button,
    enums::{Align, FrameType},
    frame::Frame,
    prelude::*,
    widget::Widget,
    window::Window,
};

use crate::settings::Settings;
use crate::theme;

// ─── Window Layout Constants ────────────────────────────────────────────────────
const CONTROLS_H: i32 = 40;
const STATUS_H: i32 = 25;

// ─── Widgets struct ─────────────────────────────────────────────────────────────
// Holds cloneable handles to every widget that callbacks need to access.

pub struct Widgets {
    pub canvas: Widget,
    pub btn_mic: Button,
    pub status_bar: Frame,
}

// ─── Build UI ───────────────────────────────────────────────────────────────────

pub fn build_ui(settings: &Settings) -> (Window, Widgets) {
    let w = settings.canvas_width;
    let h = settings.canvas_height;

    let mut win = Window::new(100, 100, w, h + CONTROLS_H + STATUS_H, "micfall");
    win.set_color(theme::color(theme::BG_DARK));

    // ── Spectrogram canvas ──
    let mut canvas = Widget::new(0, 0, w, h, None);
    canvas.set_frame(FrameType::FlatBox);

    // ── Controls strip ──
    let mut btn_mic = Button::new(8, h + 6, 90, CONTROLS_H - 12, "@circle  Mic");
    btn_mic.set_color(theme::color(theme::BG_WIDGET));
    btn_mic.set_label_color(theme::color(theme::ACCENT_RED));
    btn_mic.set_tooltip("Start/Stop recording [R]");

    // ── Status bar ──
    let mut status_bar = Frame::new(0, h + CONTROLS_H, w, STATUS_H, "Starting...");
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_color(theme::color(theme::BG_PANEL));
    status_bar.set_label_color(theme::color(theme::TEXT_SECONDARY));
    status_bar.set_label_size(11);
    status_bar.set_align(Align::Inside | Align::Left);

    win.end();

    let widgets = Widgets {
        canvas,
        btn_mic,
        status_bar,
    };

    (win, widgets)
}
