use crate::analyzer::SpectrumSource;
use crate::render::WaterfallCompositor;

/// Drives the compositor at display refresh cadence and owns the Recording
/// flag. The timer loop re-arms itself unconditionally every tick whether
/// running or paused; pausing only skips the compositor, so the displayed
/// frame stays bitwise stable until recording resumes. The flag is mutated
/// only through `toggle` and read once per tick, all on the render thread.
pub struct FrameScheduler {
    recording: bool,
    ticks: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            recording: true,
            ticks: 0,
        }
    }

    /// Flip the Recording flag; takes effect no later than the next tick.
    /// Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.recording = !self.recording;
        self.recording
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One scheduler tick. Runs the compositor only while recording; returns
    /// whether a column was advanced.
    pub fn run_tick(
        &mut self,
        compositor: &mut WaterfallCompositor,
        source: &mut dyn SpectrumSource,
    ) -> bool {
        self.ticks += 1;
        if !self.recording {
            return false;
        }
        compositor.tick(source);
        true
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
