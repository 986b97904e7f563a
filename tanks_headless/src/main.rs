use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{ensure, Context};
use clap::Parser;
use tanks_core::GameConfig;
use tracing_subscriber::EnvFilter;

use crate::{
    engine::HeadlessEngine,
    script::InputScript,
    session::{run_session, RunOptions},
};

mod engine;
mod script;
mod session;

/// Frames played when neither `--ticks` nor a script says otherwise
const DEFAULT_TICKS: u64 = 600;

#[derive(Parser, Debug)]
#[command(name = "tanks_headless")]
#[command(about = "Play a tank arena session without a renderer, printing JSON lines")]
struct Args {
    /// JSON file overriding the stock game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON input script driving the tank
    #[arg(long)]
    script: Option<PathBuf>,

    /// Number of frames to play, defaults to the script length
    #[arg(long)]
    ticks: Option<u64>,

    #[arg(long, default_value_t = 60)]
    fps: u64,

    /// Pace frames against the wall clock
    #[arg(long)]
    realtime: bool,

    /// One bullet out at a time with limited ammo
    #[arg(long)]
    single_shot: bool,

    /// Write events here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the session events, logs go to stderr
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    ensure!(
        (1..=1000).contains(&args.fps),
        "fps must be between 1 and 1000, got {}",
        args.fps
    );

    let config = load_config(&args)?;

    let script = match &args.script {
        Some(path) => InputScript::load(path)?,
        None => InputScript::default(),
    };

    let ticks = match args.ticks {
        Some(ticks) => ticks,
        None if !script.is_empty() => script.len(),
        None => DEFAULT_TICKS,
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let options = RunOptions {
        ticks,
        fps: args.fps,
        realtime: args.realtime,
    };

    let summary = run_session(
        config,
        HeadlessEngine::new(script, args.fps),
        &options,
        &mut out,
    )
    .await?;

    tracing::debug!(?summary, "done");

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if args.single_shot {
        let preset = GameConfig::single_shot();
        config.bullet_pool_size = preset.bullet_pool_size;
        config.firing = preset.firing;
    }

    config.validate()?;

    Ok(config)
}
