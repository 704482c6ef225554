// ============================================================================
// MICFALL - Live Microphone Waterfall Spectrogram
// ============================================================================
//
// Captures mono audio from the default microphone, analyzes it into
// frequency-magnitude frames and renders them as a horizontally scrolling
// waterfall: newest column on the right edge of the plot, history drifting
// left one pixel per display tick. An L-shaped axis with 1 kHz gridlines
// and labels frames the plot.
//
// Press the mic button or [R] to pause/resume the scroll. The render loop
// keeps ticking while paused; it just skips the compositor, so the frozen
// frame stays bitwise stable.
// ============================================================================

mod analyzer;
mod app_state;
mod callbacks;
mod capture;
mod layout;
mod render;
mod scheduler;
mod settings;
mod theme;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fltk::{app, prelude::*};

use analyzer::FrequencyAnalyzer;
use app_state::AppState;
use capture::MicCapture;
use render::{AxisLayout, Geometry, WaterfallCompositor, hex_rgb};
use scheduler::FrameScheduler;
use settings::Settings;

fn main() {
    let a = app::App::default();
    theme::apply_dark_theme();

    let mut settings = Settings::load_or_create();

    let mut geom = Geometry::new(
        settings.canvas_width.max(0) as usize,
        settings.canvas_height.max(0) as usize,
    );
    if !geom.is_valid() {
        eprintln!(
            "Warning: canvas {}x{} leaves no room for the plot; using 720x480",
            settings.canvas_width, settings.canvas_height
        );
        geom = Geometry::new(720, 480);
        settings.canvas_width = geom.width as i32;
        settings.canvas_height = geom.height as i32;
    }

    let (mut win, widgets) = layout::build_ui(&settings);

    // ── Rendering pipeline ──
    let band_width = settings.sample_rate as f64 / analyzer::FFT_SIZE as f64;
    let mut compositor = WaterfallCompositor::new(
        geom,
        band_width,
        hex_rgb(settings.color_background),
        hex_rgb(settings.color_gridline),
    );
    let axis = AxisLayout::compute(geom, band_width);
    axis.draw_borders(compositor.buffer_mut(), hex_rgb(settings.color_axis));

    // ── Microphone ──
    // On failure the app still runs and shows the background and axis only.
    let (capture, frequency_analyzer) =
        match MicCapture::start(settings.sample_rate, analyzer::FFT_SIZE) {
            Ok(capture) => {
                let analyzer =
                    FrequencyAnalyzer::new(capture.ring(), settings.min_db, settings.max_db);
                (Some(capture), Some(analyzer))
            }
            Err(e) => {
                eprintln!("Warning: microphone unavailable: {:#}", e);
                (None, None)
            }
        };

    let refresh_interval = 1.0 / settings.refresh_hz.max(1.0);

    let state = Rc::new(RefCell::new(AppState {
        settings,
        scheduler: FrameScheduler::new(),
        compositor,
        axis,
        analyzer: frequency_analyzer,
        capture,
    }));

    callbacks::setup_callbacks(&mut win, &widgets, &state);

    {
        let mut status_bar = widgets.status_bar.clone();
        status_bar.set_label(&state.borrow().status_line());
    }

    // ── Frame scheduler timer ──
    // Handle-based timer that re-schedules itself every tick, running or
    // paused; pausing is handled inside the scheduler, not by stopping the
    // loop.
    let timer_handle: Rc<Cell<app::TimeoutHandle>> = Rc::new(Cell::new(std::ptr::null_mut()));
    {
        let state = state.clone();
        let mut canvas = widgets.canvas.clone();
        let handle_cell = timer_handle.clone();

        let h = app::add_timeout3(refresh_interval, move |_h| {
            if let Ok(mut st) = state.try_borrow_mut() {
                if st.advance_tick() {
                    canvas.redraw();
                }
            }
            app::repeat_timeout3(refresh_interval, handle_cell.get());
        });

        timer_handle.set(h);
    }

    win.show();
    a.run().unwrap();

    // Window closed: stop the render loop and release the audio resource,
    // each exactly once.
    app::remove_timeout3(timer_handle.get());
    state.borrow_mut().release_capture();
}
