//! Arena client binary.
//!
//! Composition root that loads configuration, starts the runtime and prints
//! the match as it unfolds until the tick budget runs out or Ctrl-C.
//!
//! # Examples
//!
//! ```bash
//! # Reproducible 200-tick match, as fast as possible
//! cargo run -p arena-client -- --seed 7 --ticks 200 --tick-ms 1
//!
//! # Stream events as JSON lines
//! ARENA_SEED=7 cargo run -p arena-client -- --format json
//! ```

mod cli;
mod render;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use arena_runtime::{Event, Runtime, RuntimeConfig, Topic};
use cli::{Cli, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = cli.apply(RuntimeConfig::from_env());
    if config.tick_interval.is_none() {
        tracing::warn!("Autoplay disabled by environment; ticking every millisecond instead");
        config.tick_interval = Some(Duration::from_millis(1));
    }

    tracing::info!(
        seed = ?config.seed,
        max_ticks = ?config.max_ticks,
        data_dir = ?config.data_dir,
        "Starting arena"
    );

    let runtime = Runtime::builder().config(config).build().await?;
    let handle = runtime.handle();

    let mut topics = vec![Topic::Narrative, Topic::Round];
    if cli.format == OutputFormat::Json {
        topics.push(Topic::Cue);
    }
    let receivers = handle.subscribe_multiple(&topics).into_values().collect();
    let printer = spawn_printer(receivers, cli.format);

    runtime
        .run_until(async {
            if let Err(error) = tokio::signal::ctrl_c().await {
                tracing::error!(%error, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await?;

    let snapshot = handle.snapshot().await;
    // Last sender gone: the printer drains what is buffered and exits.
    drop(handle);
    printer.await??;

    match cli.format {
        OutputFormat::Text => println!("{}", render::final_status(&snapshot)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&snapshot)?),
    }

    tracing::info!("Arena shutdown complete");
    Ok(())
}

/// Forwards every subscribed topic to stdout in arrival order per topic.
fn spawn_printer(
    receivers: Vec<broadcast::Receiver<Event>>,
    format: OutputFormat,
) -> JoinHandle<Result<()>> {
    let (merged_tx, mut merged_rx) = tokio::sync::mpsc::unbounded_channel();

    for mut rx in receivers {
        let merged_tx = merged_tx.clone();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        if merged_tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Output fell behind, events dropped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }
    drop(merged_tx);

    tokio::spawn(async move {
        while let Some(event) = merged_rx.recv().await {
            match format {
                OutputFormat::Text => {
                    if let Some(line) = render::text_line(&event) {
                        println!("{line}");
                    }
                }
                OutputFormat::Json => println!("{}", render::json_line(&event)?),
            }
        }
        Ok(())
    })
}
