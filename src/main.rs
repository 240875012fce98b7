//! `slider-replay`: drive a slider engine from a recorded gesture script.
//!
//! Reads a slider configuration and a JSON array of events, feeds the events
//! to a single-thumb or range engine, and prints every value delivered to the
//! callback side as one JSON line on stdout. Logs go to stderr (`RUST_LOG`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;
use slider_engine::config::SliderConfig;
use slider_engine::dispatch::{CallbackDispatcher, CommitMessage};
use slider_engine::engine::{Action, SliderCore};
use slider_engine::error::ConfigError;
use slider_engine::input::GestureEvent;
use slider_engine::range::{RangeCore, ThumbSide};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid gesture script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("callback worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

#[derive(Parser, Debug)]
#[command(name = "slider-replay", about = "Replay a gesture script through the slider engine")]
struct Cli {
    /// Slider configuration (JSON).
    #[arg(long, env = "SLIDER_CONFIG")]
    config: PathBuf,

    /// Gesture script (JSON array of steps).
    #[arg(long, env = "SLIDER_SCRIPT")]
    script: PathBuf,

    /// Drive a two-thumb range slider instead of a single thumb.
    #[arg(long)]
    range: bool,
}

/// One line of a gesture script.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum ScriptStep {
    Layout {
        width: f64,
    },
    Start {
        #[serde(default)]
        thumb: ThumbSide,
    },
    Active {
        #[serde(default)]
        thumb: ThumbSide,
        translation: f64,
    },
    End {
        #[serde(default)]
        thumb: ThumbSide,
    },
    Cancel {
        #[serde(default)]
        thumb: ThumbSide,
    },
    Press {
        point: u32,
    },
}

enum Replay {
    Single(SliderCore),
    Range(RangeCore),
}

impl Replay {
    fn new(config: SliderConfig, range: bool) -> Self {
        if range { Self::Range(RangeCore::new(config)) } else { Self::Single(SliderCore::new(config)) }
    }

    fn apply(&mut self, step: ScriptStep) -> Vec<Action> {
        let (thumb, event) = match step {
            ScriptStep::Layout { width } => {
                return match self {
                    Self::Single(core) => core.on_layout(width),
                    Self::Range(core) => core.on_layout(width),
                };
            }
            ScriptStep::Press { point } => {
                return match self {
                    Self::Single(core) => core.on_press(point),
                    Self::Range(core) => core.on_press(point),
                };
            }
            ScriptStep::Start { thumb } => (thumb, GestureEvent::Start),
            ScriptStep::Active { thumb, translation } => (thumb, GestureEvent::Active { translation }),
            ScriptStep::End { thumb } => (thumb, GestureEvent::End),
            ScriptStep::Cancel { thumb } => (thumb, GestureEvent::Cancel),
        };
        match self {
            Self::Single(core) => core.on_gesture(event),
            Self::Range(core) => core.on_gesture(thumb, event),
        }
    }

    fn config_error(&self) -> Option<&ConfigError> {
        match self {
            Self::Single(core) => core.config_error(),
            Self::Range(core) => core.config_error(),
        }
    }

    fn summary(&self) -> String {
        match self {
            Self::Single(core) => core.label_text(),
            Self::Range(core) => {
                format!("{}..{}", core.label_text(ThumbSide::Left), core.label_text(ThumbSide::Right))
            }
        }
    }
}

fn read(path: &Path) -> Result<String, ReplayError> {
    std::fs::read_to_string(path).map_err(|source| ReplayError::Read { path: path.to_path_buf(), source })
}

fn print_commit(msg: CommitMessage) {
    match serde_json::to_string(&msg.commit) {
        Ok(line) => println!("{line}"),
        Err(e) => warn!(error = %e, "failed to encode commit"),
    }
}

async fn run(cli: Cli) -> Result<(), ReplayError> {
    let config = SliderConfig::from_json(&read(&cli.config)?)?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&read(&cli.script)?)?;

    let mut replay = Replay::new(config, cli.range);
    if let Some(e) = replay.config_error() {
        warn!(error = %e, "replaying against a disabled slider");
    }

    let (dispatcher, worker) = CallbackDispatcher::spawn(print_commit);
    let sender = dispatcher.register();
    info!(slider = %sender.slider(), steps = steps.len(), range = cli.range, "replay started");

    let mut queued = 0;
    for step in steps {
        queued += sender.forward(&replay.apply(step));
    }

    drop(sender);
    drop(dispatcher);
    let delivered = worker.await?;
    info!(queued, delivered, value = %replay.summary(), "replay finished");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "replay failed");
            ExitCode::FAILURE
        }
    }
}
