//! Events handed from a running session to whatever renders or records it

use serde::{Deserialize, Serialize};

use tanks_core::{
    utils::{Rect, Vector2},
    GameEvent, GameState,
};

/// Session Events
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum SessionEvent {
    /// Static layout, sent once before the first frame
    Started {
        session: String,
        arena: Rect,
        walls: Vec<Rect>,
        boxes: Vec<Rect>,
    },
    Frame(FrameReport),
    Ended {
        session: String,
        ticks: u64,
        game_over: bool,
    },
}

impl SessionEvent {
    pub fn started(session: &str, state: &GameState) -> Self {
        let environment = state.environment();

        SessionEvent::Started {
            session: session.to_string(),
            arena: state.config().arena(),
            walls: environment.walls.iter().map(|w| w.bounds).collect(),
            boxes: environment.boxes.iter().map(|b| b.bounds).collect(),
        }
    }
}

/// Where something should be drawn
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector2,
    /// Degrees
    pub angle: f64,
}

/// Renderable outcome of a single tick
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub tick: u64,
    pub time_ms: u64,
    pub tank: Pose,
    pub tank_alive: bool,
    /// Bullets in flight keyed by pool slot
    pub bullets: Vec<(usize, Pose)>,
    /// Indices of the boxes still in play
    pub boxes: Vec<usize>,
    pub events: Vec<GameEvent>,
    pub game_over: bool,
}

impl FrameReport {
    pub fn new(state: &GameState, events: Vec<GameEvent>, time_ms: u64) -> Self {
        let tank = state.tank();

        Self {
            tick: state.ticks(),
            time_ms,
            tank: Pose {
                position: tank.position,
                angle: tank.sprite_angle,
            },
            tank_alive: tank.alive,
            bullets: state
                .bullets()
                .in_flight()
                .map(|(slot, b)| {
                    (
                        slot,
                        Pose {
                            position: b.position,
                            angle: b.angle,
                        },
                    )
                })
                .collect(),
            boxes: state
                .environment()
                .active_boxes()
                .map(|(index, _)| index)
                .collect(),
            events,
            game_over: state.is_game_over(),
        }
    }
}
