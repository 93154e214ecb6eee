use crate::board::Board;
use crate::error::{MenuError, PromptError};
use crate::session::{GuessOutcome, GuessingSession, Letter, SecretWord};
use crate::stats::PlayerStats;
use crate::wordbank::{WordSource, select_word};
use crate::{debug_log, info_log};
use rand::Rng;
use std::str::FromStr;

/// Typed at the guess prompt to abandon the game and leave.
pub const QUIT_COMMAND: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RandomWord,
    CustomWord,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::RandomWord),
            "2" => Ok(Self::CustomWord),
            "3" => Ok(Self::Exit),
            other => Err(MenuError::InvalidChoice(other.to_string())),
        }
    }
}

/// Answer to the post-game prompt: `1` to play again, `0` to stop.
pub fn parse_play_again(input: &str) -> Result<bool, PromptError> {
    match input.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(PromptError::InvalidAnswer(other.to_string())),
    }
}

/// Boundary between the game loop and whatever the player is looking at.
///
/// `read_*` methods hand back raw text and return `None` once input is
/// closed; all validation happens in the game loop.
pub trait GameInterface {
    fn display_welcome(&mut self);
    fn display_menu(&mut self);
    fn read_menu_choice(&mut self) -> Option<String>;
    fn read_custom_word(&mut self) -> Option<String>;
    /// Called once the secret word is fixed, before the first board.
    fn display_game_started(&mut self, custom_word: bool);
    fn display_board(&mut self, board: &Board);
    fn read_guess(&mut self) -> Option<String>;
    fn display_guess_result(&mut self, letter: Letter, outcome: GuessOutcome);
    fn display_error(&mut self, message: &str);
    fn display_outcome(&mut self, session: &GuessingSession);
    fn display_stats(&mut self, stats: &PlayerStats);
    fn read_play_again(&mut self) -> Option<String>;
    fn display_exit_message(&mut self, stats: &PlayerStats);
}

enum GameState {
    Continue,
    Exit,
}

/// Runs the menu until the player exits or input runs out.
pub fn game_loop<I, R>(interface: &mut I, rng: &mut R, mut stats: PlayerStats) -> PlayerStats
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    info_log!("game_loop() - Starting for player '{}'", stats.name);
    interface.display_welcome();

    loop {
        interface.display_menu();
        let Some(input) = interface.read_menu_choice() else {
            break;
        };

        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                debug_log!("game_loop() - Rejected menu input: {:?}", input);
                interface.display_error(&e.to_string());
                continue;
            }
        };

        let secret = match choice {
            MenuChoice::Exit => break,
            MenuChoice::RandomWord => match select_word(WordSource::Random, rng) {
                Ok(secret) => secret,
                Err(e) => {
                    log::warn!("Word bank produced an invalid word: {e}");
                    continue;
                }
            },
            MenuChoice::CustomWord => match read_custom_word(interface, rng) {
                Some(secret) => secret,
                None => break,
            },
        };
        interface.display_game_started(choice == MenuChoice::CustomWord);

        let Some(session) = play_session(interface, secret) else {
            break;
        };
        interface.display_outcome(&session);
        stats.record(&session);
        interface.display_stats(&stats);

        if let GameState::Exit = ask_play_again(interface) {
            break;
        }
    }

    info_log!(
        "game_loop() - Finished: {} played, {} won",
        stats.games_played,
        stats.games_won
    );
    interface.display_exit_message(&stats);
    stats
}

fn read_custom_word<I, R>(interface: &mut I, rng: &mut R) -> Option<SecretWord>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    loop {
        let input = interface.read_custom_word()?;
        match select_word(WordSource::Custom(&input), rng) {
            Ok(secret) => return Some(secret),
            Err(e) => interface.display_error(&e.to_string()),
        }
    }
}

fn ask_play_again<I: GameInterface + ?Sized>(interface: &mut I) -> GameState {
    loop {
        let Some(input) = interface.read_play_again() else {
            return GameState::Exit;
        };
        match parse_play_again(&input) {
            Ok(true) => return GameState::Continue,
            Ok(false) => return GameState::Exit,
            Err(e) => interface.display_error(&e.to_string()),
        }
    }
}

/// Plays one session to completion.
///
/// Returns `None` if input closes, or the player types [`QUIT_COMMAND`],
/// before the session is won or lost.
pub fn play_session<I: GameInterface + ?Sized>(
    interface: &mut I,
    secret: SecretWord,
) -> Option<GuessingSession> {
    debug_log!("play_session() - Secret word has {} letters", secret.as_str().len());
    let mut session = GuessingSession::new(secret);

    while !session.is_over() {
        interface.display_board(&Board::from_session(&session));

        let input = interface.read_guess()?;
        if input.trim().eq_ignore_ascii_case(QUIT_COMMAND) {
            info_log!("play_session() - Player quit mid-game");
            return None;
        }
        let letter = match input.parse::<Letter>() {
            Ok(letter) => letter,
            Err(e) => {
                interface.display_error(&e.to_string());
                continue;
            }
        };

        match session.submit_guess(letter) {
            Ok(outcome) => {
                debug_log!("play_session() - Guess '{}' was {:?}", letter, outcome);
                interface.display_guess_result(letter, outcome);
            }
            Err(e) => interface.display_error(&e.to_string()),
        }
    }

    info_log!(
        "play_session() - {:?} after {} wrong guesses",
        session.status(),
        session.wrong_guesses()
    );
    interface.display_board(&Board::from_session(&session));
    Some(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Status;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Scripted interface that records what the loop asked it to show.
    #[derive(Default)]
    struct ScriptedInterface {
        inputs: VecDeque<&'static str>,
        errors: Vec<String>,
        results: Vec<(char, GuessOutcome)>,
        boards: Vec<Board>,
        outcomes: Vec<(Status, String)>,
        menus_shown: usize,
        started: Vec<bool>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(inputs: &[&'static str]) -> Self {
            Self {
                inputs: inputs.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn next(&mut self) -> Option<String> {
            self.inputs.pop_front().map(str::to_string)
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_welcome(&mut self) {}
        fn display_menu(&mut self) {
            self.menus_shown += 1;
        }
        fn read_menu_choice(&mut self) -> Option<String> {
            self.next()
        }
        fn read_custom_word(&mut self) -> Option<String> {
            self.next()
        }
        fn display_game_started(&mut self, custom_word: bool) {
            self.started.push(custom_word);
        }
        fn display_board(&mut self, board: &Board) {
            self.boards.push(board.clone());
        }
        fn read_guess(&mut self) -> Option<String> {
            self.next()
        }
        fn display_guess_result(&mut self, letter: Letter, outcome: GuessOutcome) {
            self.results.push((letter.as_char(), outcome));
        }
        fn display_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
        fn display_outcome(&mut self, session: &GuessingSession) {
            self.outcomes
                .push((session.status(), session.secret_word().to_string()));
        }
        fn display_stats(&mut self, _stats: &PlayerStats) {}
        fn read_play_again(&mut self) -> Option<String> {
            self.next()
        }
        fn display_exit_message(&mut self, _stats: &PlayerStats) {
            self.exited = true;
        }
    }

    fn run(inputs: &[&'static str]) -> (ScriptedInterface, PlayerStats) {
        let mut interface = ScriptedInterface::new(inputs);
        let mut rng = StdRng::seed_from_u64(3);
        let stats = game_loop(&mut interface, &mut rng, PlayerStats::default());
        (interface, stats)
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::RandomWord));
        assert_eq!(" 2\n".parse::<MenuChoice>(), Ok(MenuChoice::CustomWord));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!(
            "4".parse::<MenuChoice>(),
            Err(MenuError::InvalidChoice("4".to_string()))
        );
        assert!("one".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_play_again_parsing() {
        assert_eq!(parse_play_again("1"), Ok(true));
        assert_eq!(parse_play_again("0\n"), Ok(false));
        assert!(parse_play_again("yes").is_err());
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let (interface, stats) = run(&["3"]);
        assert!(interface.exited);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn test_game_loop_invalid_menu_choice_redisplays_menu() {
        let (interface, _) = run(&["9", "3"]);
        assert_eq!(interface.menus_shown, 2);
        assert_eq!(interface.errors.len(), 1);
        assert!(interface.errors[0].contains("'9'"));
    }

    #[test]
    fn test_game_loop_closed_input_exits() {
        let (interface, stats) = run(&[]);
        assert!(interface.exited);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn test_custom_word_win() {
        let (interface, stats) = run(&["2", "cat", "c", "a", "t", "0"]);
        assert_eq!(interface.started, vec![true]);
        assert_eq!(
            interface.results,
            vec![
                ('c', GuessOutcome::Correct),
                ('a', GuessOutcome::Correct),
                ('t', GuessOutcome::Correct),
            ]
        );
        assert_eq!(interface.outcomes, vec![(Status::Won, "cat".to_string())]);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.score, 60);
    }

    #[test]
    fn test_custom_word_loss() {
        let (interface, stats) = run(&["2", "cat", "x", "y", "z", "q", "w", "e", "0"]);
        assert_eq!(interface.outcomes, vec![(Status::Lost, "cat".to_string())]);
        let last = interface.boards.last().unwrap();
        assert_eq!(last.wrong_guesses, 6);
        assert_eq!(last.masked_word, "_ _ _");
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn test_invalid_custom_word_reprompts() {
        let (interface, _) = run(&["2", "two words", "", "Cat", "c", "a", "t", "0"]);
        assert_eq!(interface.errors.len(), 2);
        assert_eq!(interface.outcomes, vec![(Status::Won, "cat".to_string())]);
    }

    #[test]
    fn test_duplicate_and_invalid_guesses_reprompt() {
        let (interface, _) = run(&["2", "cat", "c", "c", "7", "ab", "A", "t", "0"]);
        assert_eq!(interface.errors.len(), 3);
        assert!(interface.errors[0].contains("already guessed 'c'"));
        assert_eq!(interface.results.len(), 3);
        assert_eq!(interface.outcomes[0].0, Status::Won);
    }

    #[test]
    fn test_play_again_starts_another_game() {
        let (interface, stats) = run(&["2", "a", "a", "5", "1", "2", "b", "b", "0"]);
        assert_eq!(interface.errors.len(), 1);
        assert_eq!(interface.outcomes.len(), 2);
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
    }

    #[test]
    fn test_input_closed_mid_game_is_not_recorded() {
        let (interface, stats) = run(&["2", "cat", "c"]);
        assert!(interface.outcomes.is_empty());
        assert!(interface.exited);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn test_quit_mid_game_is_not_recorded() {
        let (interface, stats) = run(&["2", "cat", "c", " QUIT "]);
        assert!(interface.outcomes.is_empty());
        assert!(interface.exited);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn test_random_word_game_uses_word_bank() {
        let mut rng = StdRng::seed_from_u64(11);
        let expected = crate::wordbank::random_word(&mut rng);

        let mut interface = ScriptedInterface::new(&[
            "1", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p",
            "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "0",
        ]);
        let mut rng = StdRng::seed_from_u64(11);
        let stats = game_loop(&mut interface, &mut rng, PlayerStats::default());

        assert_eq!(interface.started, vec![false]);
        assert_eq!(interface.outcomes.len(), 1);
        assert_eq!(interface.outcomes[0].1, expected);
        assert_eq!(stats.games_played, 1);
    }

    #[test]
    fn test_play_session_final_board_is_shown() {
        let mut interface = ScriptedInterface::new(&["o", "k"]);
        let session = play_session(&mut interface, SecretWord::new("ok").unwrap()).unwrap();
        assert_eq!(session.status(), Status::Won);
        assert_eq!(interface.boards.last().unwrap().masked_word, "o k");
        assert_eq!(interface.boards.len(), 3);
    }
}
