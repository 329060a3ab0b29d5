//! Command-line arguments layered over `ARENA_*` environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use arena_runtime::RuntimeConfig;
use clap::Parser;

/// Watch two fighters duel until someone stops the show
#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Timer-driven duel simulation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Fixed RNG seed for a reproducible match
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(short = 'n', long, value_name = "TICKS")]
    pub ticks: Option<u64>,

    /// Milliseconds between ticks (0 runs as fast as possible)
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Directory containing roster.ron and engine.toml
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One narrative line per action, plus round results
    Text,
    /// Every event as a JSON line, then the final snapshot
    Json,
}

impl Cli {
    /// Applies explicit flags on top of `config`.
    pub fn apply(&self, mut config: RuntimeConfig) -> RuntimeConfig {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(ticks) = self.ticks {
            config.max_ticks = Some(ticks);
        }
        if let Some(ms) = self.tick_ms {
            // Zero would disable autoplay entirely; the CLI has no other driver.
            config.tick_interval = Some(Duration::from_millis(ms.max(1)));
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["arena", "--seed", "9", "-n", "40", "--tick-ms", "0"]);
        let config = cli.apply(RuntimeConfig::default());

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_ticks, Some(40));
        assert_eq!(config.tick_interval, Some(Duration::from_millis(1)));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::parse_from(["arena", "--format", "json"]);
        let base = RuntimeConfig {
            seed: Some(3),
            ..RuntimeConfig::default()
        };
        let config = cli.apply(base);

        assert_eq!(config.seed, Some(3));
        assert_eq!(config.tick_interval, Some(Duration::from_millis(1000)));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
