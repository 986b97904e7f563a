//! Game state and per-frame update rule for a single tank arena session
//!
//! Nothing in here talks to an engine. Adapters feed in key flags, the
//! overlaps their physics detected and a clock, and get back the next state
//! along with the commands to apply.

pub mod adapter;
pub mod common;
pub mod config;
pub mod error;
pub mod map;
pub mod utils;

pub use common::{
    contact::{detect_overlaps, EntityRef, Overlap},
    gamestate::{update, GameEvent, GameState},
    input::{InputState, KeyTracker, KeysDown},
};
pub use adapter::{drive_frame, EngineAdapter};
pub use config::{FiringMode, GameConfig, GameOverPolicy};
pub use error::ConfigError;
