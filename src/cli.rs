use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use stackfall::constants::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_WORD, DROP_INTERVAL};
use stackfall::{ConfigError, GameConfig};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH)]
    pub width: usize,
    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    pub height: usize,
    /// Milliseconds between automatic drops
    #[arg(long, value_name = "MS", default_value_t = DROP_INTERVAL.as_millis() as u64)]
    pub drop_interval: u64,
    /// Seed for random pieces, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
    /// Spawn letter pieces spelling WORD before random ones
    #[arg(long, value_name = "WORD", default_value = DEFAULT_WORD)]
    pub spell: String,
    /// Skip the letter pieces and start with random ones
    #[arg(long, conflicts_with = "spell")]
    pub no_spell: bool,
    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// Maximum log level written to the log file
    #[arg(long, default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,
}

impl Args {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig {
            width: self.width,
            height: self.height,
            drop_interval: Duration::from_millis(self.drop_interval),
            seed: self.seed,
            queue: Vec::new(),
        };
        if !self.no_spell {
            config = config.spell(&self.spell)?;
        }
        config.validate()?;
        Ok(config)
    }
}
