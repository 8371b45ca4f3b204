use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use common::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUSPENSE: Duration = Duration::from_millis(2000);
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// How the placeholder move changes on each suspense tick.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleMode {
    /// Rock, paper, scissors, rock, ...
    #[default]
    Sequential,
    /// A fresh uniform draw every tick.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Time between submitting a move and the result.
    pub suspense: Duration,
    /// Period of the cosmetic placeholder update. `None` disables it.
    pub tick: Option<Duration>,
    pub cycle: CycleMode,
    /// Seeds the opponent and the random placeholder. Entropy when absent.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suspense.is_zero() {
            return Err(ConfigError::ZeroDuration { field: "suspense" });
        }
        if let Some(tick) = self.tick {
            if tick.is_zero() {
                return Err(ConfigError::ZeroDuration { field: "tick" });
            }
            if tick > self.suspense {
                return Err(ConfigError::TickExceedsSuspense {
                    tick,
                    suspense: self.suspense,
                });
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            suspense: DEFAULT_SUSPENSE,
            tick: Some(DEFAULT_TICK),
            cycle: CycleMode::default(),
            seed: None,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "rps", version, about = "Rock, Paper, Scissors against the computer")]
pub struct Args {
    /// Milliseconds the computer "thinks" before revealing its move
    #[arg(long, env = "RPS_SUSPENSE_MS", default_value_t = 2000)]
    pub suspense_ms: u64,

    /// Milliseconds between placeholder updates while thinking, 0 to disable
    #[arg(long, env = "RPS_TICK_MS", default_value_t = 100)]
    pub tick_ms: u64,

    #[arg(long, env = "RPS_CYCLE", value_enum, default_value_t = CycleMode::Sequential)]
    pub cycle: CycleMode,

    /// Seed for the computer's moves
    #[arg(long, env = "RPS_SEED")]
    pub seed: Option<u64>,

    /// Print every state change as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<&Args> for EngineConfig {
    fn from(args: &Args) -> Self {
        EngineConfig {
            suspense: Duration::from_millis(args.suspense_ms),
            tick: (args.tick_ms > 0).then(|| Duration::from_millis(args.tick_ms)),
            cycle: args.cycle,
            seed: args.seed,
        }
    }
}
