use serde::{Deserialize, Serialize};

/// Key flags sampled once per tick
///
/// Movement flags are level triggered, `fire` is only set on the tick the
/// fire key goes down.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Raw keys held down right now
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KeysDown {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Turns held keys into an [`InputState`], remembering whether fire was
/// already down on the previous sample
#[derive(Debug, Default)]
pub struct KeyTracker {
    fire_was_down: bool,
}

impl KeyTracker {
    pub fn sample(&mut self, keys: &KeysDown) -> InputState {
        let fire = keys.fire && !self.fire_was_down;
        self.fire_was_down = keys.fire;

        InputState {
            forward: keys.forward,
            back: keys.back,
            left: keys.left,
            right: keys.right,
            fire,
        }
    }

    /// [`sample`](Self::sample) for hosts that also latch key presses
    ///
    /// `pressed` reports a fire key press seen since the previous sample, so a
    /// tap released before the frame still fires once.
    pub fn sample_latched(&mut self, keys: &KeysDown, pressed: bool) -> InputState {
        let mut input = self.sample(keys);
        input.fire |= pressed;
        input
    }
}
