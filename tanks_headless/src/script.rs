//! Canned keyboard input for sessions that have no player at the keys
//!
//! A script is a JSON list of segments, each holding a set of keys down for a
//! number of ticks:
//!
//! ```json
//! [
//!   { "ticks": 40, "keys": { "forward": true } },
//!   { "ticks": 1, "keys": { "fire": true } }
//! ]
//! ```
//!
//! Keys not mentioned are released, and every key is released once the
//! script runs out.

use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use tanks_core::KeysDown;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Segment {
    pub ticks: u64,
    #[serde(default)]
    pub keys: KeysDown,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct InputScript {
    segments: Vec<Segment>,
}

impl InputScript {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read input script {}", path.display()))?;

        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse input script {}", path.display()))
    }

    /// Frames covered by the script
    pub fn len(&self) -> u64 {
        self.segments.iter().map(|s| s.ticks).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys held on the given frame, counting from zero
    pub fn keys_at(&self, frame: u64) -> KeysDown {
        let mut start = 0;
        for segment in &self.segments {
            if frame < start + segment.ticks {
                return segment.keys;
            }
            start += segment.ticks;
        }

        KeysDown::default()
    }
}
