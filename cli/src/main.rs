mod commands;

use clap::{Parser, Subcommand};
use tictactoe_engine::tictactoe::Player;
use tictactoe_engine::{ConfigManager, FileContentConfigProvider, GameConfig, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against an exhaustive minimax bot")]
struct Args {
    #[arg(long, default_value = "tictactoe.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the bot, entering moves as `row col`.
    Play,
    /// Print the best move for a board such as `OO./XX./...`.
    Analyze {
        board: String,
        #[arg(long, value_parser = parse_player, default_value = "O")]
        bot: Player,
    },
    /// Let the bot play both sides from the empty board.
    SelfPlay,
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        other => Err(format!("expected X or O, got '{}'", other)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager: ConfigManager<FileContentConfigProvider, GameConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;

    let prefix = match (&config.log_prefix, args.use_log_prefix) {
        (Some(prefix), _) => Some(prefix.clone()),
        (None, true) => Some("cli".to_string()),
        (None, false) => None,
    };
    logger::init_logger(prefix);
    log!("Loaded config from {}", args.config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Play => {
            let stdin = std::io::stdin();
            let mut rng = rand::rng();
            commands::play(&config, &mut rng, stdin.lock(), &mut out)?;
        }
        Command::Analyze { board, bot } => {
            commands::analyze(&board, bot, &mut out)?;
        }
        Command::SelfPlay => {
            commands::self_play(&mut out)?;
        }
    }

    Ok(())
}
