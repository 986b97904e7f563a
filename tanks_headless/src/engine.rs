use tanks_core::{
    detect_overlaps, EngineAdapter, GameEvent, GameState, InputState, KeyTracker, Overlap,
};
use tanks_events::FrameReport;

use crate::script::InputScript;

/// Engine stand-in that plays back a script on a virtual clock
///
/// Overlaps come from the reference bounding box query and frames are
/// collected as [`FrameReport`]s instead of being drawn.
pub struct HeadlessEngine {
    script: InputScript,
    keys: KeyTracker,
    frame: u64,
    fps: u64,
    reports: Vec<FrameReport>,
}

impl HeadlessEngine {
    pub fn new(script: InputScript, fps: u64) -> Self {
        Self {
            script,
            keys: KeyTracker::default(),
            frame: 0,
            fps,
            reports: Vec::new(),
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Reports presented since the last call
    pub fn drain_reports(&mut self) -> Vec<FrameReport> {
        std::mem::take(&mut self.reports)
    }
}

impl EngineAdapter for HeadlessEngine {
    fn poll_input(&mut self) -> InputState {
        self.keys.sample(&self.script.keys_at(self.frame))
    }

    fn report_overlaps(&mut self, state: &GameState) -> Vec<Overlap> {
        detect_overlaps(state)
    }

    fn now(&self) -> u64 {
        self.frame * 1000 / self.fps
    }

    fn present(&mut self, state: &GameState, events: &[GameEvent]) {
        self.reports
            .push(FrameReport::new(state, events.to_vec(), self.now()));
        self.frame += 1;
    }
}
