mod broadcaster;
mod config;
mod game_loop;
mod input;
mod render;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::{GameMode, Validate};
use tictactoe_common::games::tictactoe::TicTacToeSession;
use tictactoe_common::logger::{self, LogLevel};
use tictactoe_common::log;
use tictactoe_common::scheduler::TokioScheduler;

use broadcaster::ConsoleBroadcaster;
use config::{CONFIG_FILE, get_config_manager};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Pvp,
    X,
    O,
    Watch,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::X => GameMode::PlayerAsX,
            ModeArg::O => GameMode::PlayerAsO,
            ModeArg::Watch => GameMode::Watch,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    /// Who controls each side; overrides the config file.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Pause before each automated move, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u32>,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(delay_ms) = args.delay_ms {
        config.automated_move_delay_ms = delay_ms;
    }
    config.verbose_logging |= args.verbose;
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    let level = if config.verbose_logging {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger(prefix, level);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", args.config);
    }

    log!(
        "Starting in {:?} mode, automated moves after {} ms",
        config.mode,
        config.automated_move_delay_ms
    );

    let (scheduler, due_moves) = TokioScheduler::new();
    let session = TicTacToeSession::new(scheduler, ConsoleBroadcaster, config.automated_move_delay());

    game_loop::run(session, due_moves, config.mode).await?;

    log!("Bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flag_maps_to_game_mode() {
        let args = Args::parse_from(["tictactoe_console", "--mode", "watch", "--delay-ms", "0"]);
        assert_eq!(args.mode.map(GameMode::from), Some(GameMode::Watch));
        assert_eq!(args.delay_ms, Some(0));
        assert_eq!(args.config, CONFIG_FILE);
    }

    #[test]
    fn test_defaults_leave_config_untouched() {
        let args = Args::parse_from(["tictactoe_console"]);
        assert!(args.mode.is_none());
        assert!(args.delay_ms.is_none());
        assert!(!args.save_config);
    }
}
