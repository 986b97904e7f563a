use crate::{
    interface::{keys_down, take_fire_press},
    utils::js_window,
};
use std::f64::consts::PI;
use tanks_core::{
    detect_overlaps, utils::Rect, EngineAdapter, GameEvent, GameState, InputState, KeyTracker,
    Overlap,
};
use web_sys::{CanvasRenderingContext2d, Performance};

/// Engine side of the game in the browser: keyboard, page clock and canvas
pub struct BrowserEngine {
    context: CanvasRenderingContext2d,
    keys: KeyTracker,
    performance: Performance,
    /// `performance.now()` when the session started
    started_at: f64,
}

impl BrowserEngine {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        context.set_font("65px monospace");
        context.set_text_align("center");

        let performance = js_window()
            .performance()
            .expect("window should expose performance");

        Self {
            context,
            keys: KeyTracker::default(),
            started_at: performance.now(),
            performance,
        }
    }
}

impl EngineAdapter for BrowserEngine {
    fn poll_input(&mut self) -> InputState {
        self.keys.sample_latched(&keys_down(), take_fire_press())
    }

    fn report_overlaps(&mut self, state: &GameState) -> Vec<Overlap> {
        detect_overlaps(state)
    }

    fn now(&self) -> u64 {
        session_millis(self.started_at, self.performance.now())
    }

    fn present(&mut self, state: &GameState, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::BulletSpawned { slot, .. } => console_log!("pew ({})", slot),
                GameEvent::GameOver => console_log!("game over"),
                _ => {}
            }
        }

        render(&self.context, state);
    }
}

/// Whole milliseconds between two `performance.now()` readings
fn session_millis(started_at: f64, now: f64) -> u64 {
    (now - started_at).max(0.0) as u64
}

pub fn render(context: &CanvasRenderingContext2d, state: &GameState) {
    let config = state.config();
    let arena = config.arena();

    context.set_fill_style(&"#2b3a2b".into());
    context.fill_rect(0.0, 0.0, arena.width, arena.height);

    context.set_fill_style(&"#777".into());
    for wall in &state.environment().walls {
        fill_block(context, &wall.bounds);
    }

    context.set_fill_style(&"#a0703c".into());
    for (_, block) in state.environment().active_boxes() {
        fill_block(context, &block.bounds);
    }

    render_tank(context, state);

    context.set_fill_style(&"#ffd54a".into());
    for (_, bullet) in state.bullets().in_flight() {
        context.begin_path();
        context
            .arc(
                bullet.position.x,
                bullet.position.y,
                config.bullet_size / 2.0,
                0.0,
                2.0 * PI,
            )
            .expect("bullet could not be drawn");
        context.fill();
    }

    if state.is_game_over() {
        context.set_fill_style(&"#ff0044".into());
        context
            .fill_text("Game Over :-(", arena.center().x, arena.center().y)
            .expect("text could not be drawn");
    }
}

fn fill_block(context: &CanvasRenderingContext2d, bounds: &Rect) {
    context.fill_rect(bounds.origin.x, bounds.origin.y, bounds.width, bounds.height);
}

/// Body centered on the tank position and turned by the sprite angle, the
/// barrel points along the heading
fn render_tank(context: &CanvasRenderingContext2d, state: &GameState) {
    let tank = state.tank();
    if !tank.alive {
        return;
    }
    let size = state.config().tank_size;

    context.save();
    context
        .translate(tank.position.x, tank.position.y)
        .expect("failed to move to the tank");
    context
        .rotate(tank.sprite_angle.to_radians())
        .expect("failed to turn the tank");

    context.set_fill_style(&"#3f8f3f".into());
    context.fill_rect(-size / 2.0, -size / 2.0, size, size);
    context.set_fill_style(&"#1f4f1f".into());
    context.fill_rect(0.0, -size / 10.0, size * 0.75, size / 5.0);

    context.restore();
}
