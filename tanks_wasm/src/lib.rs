//! Browser host for the tank arena: keyboard in, canvas out

use std::panic;
use tanks_core::{drive_frame, GameConfig, GameState};
use utils::{fetch_or_create_canvas, start_animation_loop, Canvas};
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod app;
pub mod interface;
mod utils;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);
}

/// Initialization process for the window
///
/// sets up logging, the keyboard and the canvas, then runs one game tick per
/// animation frame
#[wasm_bindgen(start)]
pub fn start() {
    setup_logging();

    let canvas = fetch_or_create_canvas();
    let mut state = initial_state(canvas.get_attribute("data-config"));
    let arena = state.config().arena();
    canvas.fit_arena(arena.width, arena.height);

    interface::setup_window_listeners();

    let mut engine = app::BrowserEngine::new(canvas.get_2d_context());
    start_animation_loop(Box::new(move || {
        drive_frame(&mut engine, &mut state);
    }));
}

fn setup_logging() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));
}

/// Session built from the canvas' `data-config` JSON, the stock arena when it
/// is missing or unusable
fn initial_state(raw_config: Option<String>) -> GameState {
    let config = match raw_config.as_deref().map(serde_json::from_str::<GameConfig>) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            console_log!("ignoring data-config :: {}", e);
            GameConfig::default()
        }
        None => GameConfig::default(),
    };

    match GameState::initialize(config) {
        Ok(state) => state,
        Err(e) => {
            console_log!("invalid configuration, using defaults :: {}", e);
            GameState::initialize(GameConfig::default()).expect("stock configuration is valid")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_config_shapes_the_arena() {
        let state = initial_state(Some(
            r#"{ "arena_width": 500.0, "box_layout": [], "bullet_pool_size": 6 }"#.to_string(),
        ));

        assert_eq!(state.config().arena_width, 500.0);
        assert_eq!(state.bullets().capacity(), 6);
        assert!(state.environment().boxes.is_empty());
    }

    #[test]
    fn missing_data_config_uses_the_stock_arena() {
        let state = initial_state(None);
        assert_eq!(state.config(), &GameConfig::default());
    }
}
