//! Seam between the update rule and the engine hosting it

use crate::common::{
    contact::Overlap,
    gamestate::{GameEvent, GameState},
    input::InputState,
};

/// Everything the update rule needs from the outside world
///
/// The adapter owns the frame timer and calls [`drive_frame`] once per frame.
pub trait EngineAdapter {
    /// Keys for this frame, fire already edge triggered
    fn poll_input(&mut self) -> InputState;

    /// Overlaps between bodies as they stand before this frame's update
    fn report_overlaps(&mut self, state: &GameState) -> Vec<Overlap>;

    /// Monotonic session time in milliseconds
    fn now(&self) -> u64;

    /// Hands the updated state and the commands of the frame back to the engine
    fn present(&mut self, state: &GameState, events: &[GameEvent]);
}

/// Runs a single frame: sample, update, present
pub fn drive_frame<A: EngineAdapter + ?Sized>(
    adapter: &mut A,
    state: &mut GameState,
) -> Vec<GameEvent> {
    let input = adapter.poll_input();
    let overlaps = adapter.report_overlaps(state);
    let events = state.tick(&input, &overlaps, adapter.now());

    adapter.present(state, &events);

    events
}
