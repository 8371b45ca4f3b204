use core::error;

use common::utility::shutdown_signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Args, EngineConfig};
use crate::service::{
    console::{ConsolePresenter, OutputFormat},
    presenter::drive,
    round_engine::RoundEngine,
};

pub type Result<T> = std::result::Result<T, Box<dyn error::Error>>;

/// Log level used when `RPS_LOG` is unset.
pub fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// Logs go to stderr so they don't interleave with the game on stdout.
// Ignore the error if a subscriber is already set.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env("RPS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Plays on stdin/stdout until the player quits, stdin closes, or a shutdown
/// signal arrives.
pub async fn play(args: Args) -> Result<()> {
    let config = EngineConfig::from(&args);
    let mut engine = RoundEngine::new(config)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut presenter = ConsolePresenter::new(tokio::io::stdin(), tokio::io::stdout(), format);

    info!("Starting game with {:?}", engine.config());
    drive(&mut presenter, &mut engine, shutdown_signal()).await?;
    info!("Game over");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_saturates_at_trace() {
        assert_eq!(verbosity_to_directive(0), "warn");
        assert_eq!(verbosity_to_directive(2), "debug");
        assert_eq!(verbosity_to_directive(9), "trace");
    }
}
