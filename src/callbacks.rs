use fltk::{
    app, draw,
    enums::{Align, Color, ColorDepth, Event, Font, Key},
    frame::Frame,
    image::RgbImage,
    prelude::*,
    window::Window,
};

use crate::app_state::SharedState;
use crate::layout::Widgets;

// ═══════════════════════════════════════════════════════════════════════════
//  UI CALLBACKS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup_callbacks(win: &mut Window, widgets: &Widgets, state: &SharedState) {
    setup_canvas_draw(widgets, state);
    setup_mic_button(widgets, state);
    setup_hotkeys(win, widgets, state);
}

// ── Spectrogram canvas ──
fn setup_canvas_draw(widgets: &Widgets, state: &SharedState) {
    let state = state.clone();

    let mut canvas = widgets.canvas.clone();
    canvas.draw(move |w| {
        if !w.visible_r() || w.w() <= 0 || w.h() <= 0 {
            return;
        }

        let Ok(st) = state.try_borrow() else { return; };

        let buffer = st.compositor.buffer();
        match RgbImage::new(
            buffer.data(),
            buffer.width() as i32,
            buffer.height() as i32,
            ColorDepth::Rgb8,
        ) {
            Ok(mut image) => image.draw(w.x(), w.y(), w.w(), w.h()),
            Err(e) => eprintln!("Failed to create canvas image: {:?}", e),
        }

        // Frequency labels, right-aligned just left of the plot region.
        // Placements were computed once at startup; only the text rendering
        // happens per redraw.
        draw::set_draw_color(Color::from_hex(st.settings.color_axis));
        draw::set_font(Font::Helvetica, 12);
        for label in st.axis.labels() {
            draw::draw_text2(&label.text, w.x(), w.y() + label.y - 8, label.x, 16, Align::Right);
        }
    });
}

// ── Mic toggle button ──
fn setup_mic_button(widgets: &Widgets, state: &SharedState) {
    let state = state.clone();
    let mut status_bar = widgets.status_bar.clone();

    let mut btn_mic = widgets.btn_mic.clone();
    btn_mic.set_callback(move |_| {
        toggle_recording(&state, &mut status_bar);
    });
}

// ── Keyboard shortcut: R toggles recording ──
fn setup_hotkeys(win: &mut Window, widgets: &Widgets, state: &SharedState) {
    let state = state.clone();
    let mut status_bar = widgets.status_bar.clone();

    win.handle(move |_, ev| match ev {
        Event::KeyDown if app::event_key() == Key::from_char('r') => {
            toggle_recording(&state, &mut status_bar);
            true
        }
        _ => false,
    });
}

fn toggle_recording(state: &SharedState, status_bar: &mut Frame) {
    let Ok(mut st) = state.try_borrow_mut() else { return; };
    st.toggle_recording();
    status_bar.set_label(&st.status_line());
}
