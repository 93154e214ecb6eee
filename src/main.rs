use hangman::cli::{CliInterface, parse_cli};
use hangman::game_state::game_loop;
use hangman::logging;
use hangman::stats::{DEFAULT_PLAYER_NAME, PlayerStats};
use hangman::tui::TuiInterface;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    // The full-screen interface owns stdout, so its logs always go to a file.
    let log_path = match (&cli.log_file, cli.tui) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => logging::default_log_path(),
        (None, false) => None,
    };
    if !(cli.tui && log_path.is_none())
        && let Err(e) = logging::init(log_path.as_deref())
    {
        eprintln!("Failed to initialise logging: {e}");
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stats = PlayerStats::new(cli.name.as_deref().unwrap_or(DEFAULT_PLAYER_NAME));

    let stats = if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&mut interface, &mut rng, stats)
    } else {
        game_loop(&mut CliInterface::stdio(), &mut rng, stats)
    };

    log::info!(
        "Exiting after {} games ({} won)",
        stats.games_played,
        stats.games_won
    );
    ExitCode::SUCCESS
}
