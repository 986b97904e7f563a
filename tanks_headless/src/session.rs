use std::{io::Write, time::Duration};

use anyhow::Context;
use tanks_core::{drive_frame, GameConfig, GameState};
use tanks_events::SessionEvent;
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, Instrument};

use crate::engine::HeadlessEngine;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Upper bound on frames, the session stops earlier on game over
    pub ticks: u64,
    pub fps: u64,
    /// Pace frames against the wall clock instead of running flat out
    pub realtime: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub session: String,
    pub ticks: u64,
    pub game_over: bool,
}

/// Generates a String of given length using characters that are valid for Session IDs
pub(crate) fn generate_session_id() -> String {
    /// The Chosen Length of a Session ID
    const SESSION_ID_LENGTH: usize = 5;

    nanoid::nanoid!(
        SESSION_ID_LENGTH,
        &[
            'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
            'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
        ]
    )
}

/// Plays a whole session, writing one JSON line per [`SessionEvent`] to `out`
pub async fn run_session<W: Write>(
    config: GameConfig,
    engine: HeadlessEngine,
    options: &RunOptions,
    out: &mut W,
) -> anyhow::Result<Summary> {
    let session = generate_session_id();
    let span = tracing::info_span!("session", id = %session);

    play(session, config, engine, options, out)
        .instrument(span)
        .await
}

async fn play<W: Write>(
    session: String,
    config: GameConfig,
    mut engine: HeadlessEngine,
    options: &RunOptions,
    out: &mut W,
) -> anyhow::Result<Summary> {
    let mut state = GameState::initialize(config).context("invalid game configuration")?;
    write_event(out, &SessionEvent::started(&session, &state))?;

    let mut interval = time::interval(Duration::from_millis(1000 / options.fps));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(ticks = options.ticks, fps = options.fps, "session started");

    for _ in 0..options.ticks {
        if options.realtime {
            interval.tick().await;
        }

        drive_frame(&mut engine, &mut state);

        for report in engine.drain_reports() {
            write_event(out, &SessionEvent::Frame(report))?;
        }

        if state.is_game_over() {
            break;
        }
    }

    let summary = Summary {
        session: session.clone(),
        ticks: state.ticks(),
        game_over: state.is_game_over(),
    };
    write_event(
        out,
        &SessionEvent::Ended {
            session,
            ticks: summary.ticks,
            game_over: summary.game_over,
        },
    )?;
    out.flush().context("failed to flush session output")?;

    info!(
        ticks = summary.ticks,
        boxes_left = state.environment().active_boxes().count(),
        "session ended"
    );

    Ok(summary)
}

fn write_event<W: Write>(out: &mut W, event: &SessionEvent) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, event).context("failed to encode session event")?;
    writeln!(out).context("failed to write session output")?;
    Ok(())
}
