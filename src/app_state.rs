use std::cell::RefCell;
use std::rc::Rc;

use crate::analyzer::FrequencyAnalyzer;
use crate::capture::MicCapture;
use crate::render::{AxisLayout, WaterfallCompositor};
use crate::scheduler::FrameScheduler;
use crate::settings::Settings;

/// Everything the UI callbacks and the timer loop share.
///
/// `capture` and `analyzer` are None when microphone setup failed; the view
/// then shows the background and axis only.
pub struct AppState {
    pub settings: Settings,
    pub scheduler: FrameScheduler,
    pub compositor: WaterfallCompositor,
    pub axis: AxisLayout,
    pub analyzer: Option<FrequencyAnalyzer>,
    pub capture: Option<MicCapture>,
}

pub type SharedState = Rc<RefCell<AppState>>;

impl AppState {
    /// One display tick: advance the waterfall when a live analyzer exists.
    /// Returns whether the canvas content changed.
    pub fn advance_tick(&mut self) -> bool {
        match self.analyzer.as_mut() {
            Some(analyzer) => self.scheduler.run_tick(&mut self.compositor, analyzer),
            None => false,
        }
    }

    pub fn toggle_recording(&mut self) -> bool {
        self.scheduler.toggle()
    }

    /// Status bar text for the current state.
    pub fn status_line(&self) -> String {
        let state = if self.capture.is_none() {
            "No microphone"
        } else if self.scheduler.is_recording() {
            "Recording"
        } else {
            "Paused"
        };
        format!(
            "{} | {} Hz | {:.1} Hz/bin | [R] start/stop",
            state,
            self.settings.sample_rate,
            self.compositor.band_width()
        )
    }

    /// Release the audio resource. Safe to call more than once; a no-op when
    /// capture never started.
    pub fn release_capture(&mut self) {
        if let Some(capture) = self.capture.as_mut() {
            capture.shutdown();
        }
        self.capture = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Geometry;

    fn state_without_mic() -> AppState {
        let settings = Settings::default();
        let geom = Geometry::new(720, 480);
        let band_width = settings.sample_rate as f64 / crate::analyzer::FFT_SIZE as f64;
        AppState {
            settings,
            scheduler: FrameScheduler::new(),
            compositor: WaterfallCompositor::new(geom, band_width, (0, 0, 0), (255, 255, 255)),
            axis: AxisLayout::compute(geom, band_width),
            analyzer: None,
            capture: None,
        }
    }

    #[test]
    fn test_no_analyzer_means_no_advance() {
        let mut state = state_without_mic();
        let before = state.compositor.buffer().data().to_vec();
        assert!(!state.advance_tick());
        assert_eq!(state.compositor.buffer().data(), before.as_slice());
    }

    #[test]
    fn test_status_line_reflects_state() {
        let mut state = state_without_mic();
        assert!(state.status_line().starts_with("No microphone"));

        state.toggle_recording();
        assert!(state.status_line().contains("44100 Hz"));
        assert!(state.status_line().contains("21.5 Hz/bin"));
    }

    #[test]
    fn test_release_capture_is_idempotent_without_device() {
        let mut state = state_without_mic();
        state.release_capture();
        state.release_capture();
        assert!(state.capture.is_none());
    }
}
