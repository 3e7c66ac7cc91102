use crate::game_state::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_WIDTH, GameConfig, GameInterface,
    MAX_BOARD_SIDE, Round, UserAction,
};
use crate::grid::{Grid, GridError};
use crate::search::score_word;
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

/// Boggle Solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<PathBuf>,

    /// Board width in cells (1-64)
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH, value_parser = board_side())]
    pub width: usize,

    /// Board height in cells (1-64)
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, value_parser = board_side())]
    pub height: usize,

    /// Solve this board instead of generating one, rows separated by '/' (e.g. "CATS/DOGE")
    #[arg(short = 'b', long)]
    pub board: Option<String>,

    /// Seed for board generation
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Boards to generate before giving up when none yields a word
    #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Stop starting new cells after this many milliseconds
    #[arg(short = 't', long = "time-limit-ms")]
    pub time_limit_ms: Option<u64>,

    /// Use the terminal UI
    #[arg(long)]
    pub tui: bool,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    pub debug: bool,
}

fn board_side() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..=MAX_BOARD_SIDE)
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig, GridError> {
        let fixed_board = self.board.as_deref().map(str::parse::<Grid>).transpose()?;
        Ok(GameConfig {
            width: self.width,
            height: self.height,
            max_attempts: self.max_attempts,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
            fixed_board,
        })
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const MAX_WORDS_PER_LINE: usize = 8;

fn parse_action(input: &str) -> Option<UserAction> {
    match input.trim().to_uppercase().as_str() {
        "" | "N" | "NEXT" => Some(UserAction::NewBoard),
        "Q" | "EXIT" | "QUIT" => Some(UserAction::Exit),
        _ => None,
    }
}

pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nPress ENTER or type 'next' for a new board, 'exit' to quit:");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // end of input ends the session
        Ok(0) | Err(_) => Some(UserAction::Exit),
        Ok(_) => {
            let action = parse_action(&input);
            if action.is_none() {
                println!("Unknown command '{}'.", input.trim());
            }
            action
        }
    }
}

pub fn display_round(round: &Round) {
    println!();
    print!("{}", round.grid);
    if round.attempts > 1 {
        println!("(board {} of this round)", round.attempts);
    }
    if !round.complete {
        println!("Time limit reached; some start cells were not searched.");
    }
    if round.words.is_empty() {
        return;
    }
    println!(
        "Found {} words worth {} points:",
        round.words.len(),
        round.score()
    );
    for chunk in round.words.chunks(MAX_WORDS_PER_LINE) {
        let line: Vec<String> = chunk
            .iter()
            .map(|w| format!("{w}({})", score_word(w)))
            .collect();
        println!("  {}", line.join(" "));
    }
}

pub fn display_no_words_message(attempts: usize) {
    println!("No words found after {attempts} board(s).");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_searching_message(&mut self, attempt: usize) {
        if attempt > 1 {
            println!("No words on the last board, trying another (attempt {attempt})...");
        }
    }

    fn display_round(&mut self, round: &Round) {
        display_round(round);
    }

    fn display_no_words_message(&mut self, attempts: usize) {
        display_no_words_message(attempts);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        read_action(&mut self.reader)
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("boggle-solver").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_cli_defaults() {
        let cli = cli(&[]);
        assert_eq!(cli.dictionary_path, None);
        assert_eq!(cli.width, 4);
        assert_eq!(cli.height, 4);
        assert_eq!(cli.max_attempts, 10);
        assert!(!cli.tui);
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = cli(&[
            "-i", "words.txt", "-W", "5", "-H", "3", "-s", "42", "-r", "2", "-t", "250", "--tui",
        ]);
        assert_eq!(cli.dictionary_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.seed, Some(42));

        let config = cli.game_config().unwrap();
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 3);
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.time_limit, Some(Duration::from_millis(250)));
        assert!(config.fixed_board.is_none());
        assert!(cli.tui);
    }

    #[test]
    fn test_board_size_is_bounded() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("boggle-solver").chain(args.iter().copied()))
        };
        assert!(parse(&["-W", "0"]).is_err());
        assert!(parse(&["-H", "0"]).is_err());
        assert!(parse(&["-W", "100000", "-H", "100000"]).is_err());
        assert!(parse(&["-H", "65"]).is_err());

        let cli = cli(&["-W", "64", "-H", "1"]);
        assert_eq!((cli.width, cli.height), (64, 1));
    }

    #[test]
    fn test_board_option_parses_rows() {
        let config = cli(&["--board", "ca/ts"]).game_config().unwrap();
        let board = config.fixed_board.unwrap();
        assert_eq!(board, Grid::from_rows(&["CA", "TS"]).unwrap());
    }

    #[test]
    fn test_board_option_rejects_ragged_rows() {
        let err = cli(&["--board", "CAT/S"]).game_config().unwrap_err();
        assert!(matches!(err, GridError::RaggedRows { row: 1, .. }));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = Grid::random(4, 4, &mut cli(&["-s", "9"]).rng());
        let b = Grid::random(4, 4, &mut cli(&["-s", "9"]).rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("next"), Some(UserAction::NewBoard));
        assert_eq!(parse_action("  N "), Some(UserAction::NewBoard));
        assert_eq!(parse_action(""), Some(UserAction::NewBoard));
        assert_eq!(parse_action("EXIT"), Some(UserAction::Exit));
        assert_eq!(parse_action("q"), Some(UserAction::Exit));
        assert_eq!(parse_action("maybe"), None);
    }

    #[test]
    fn test_read_action_from_reader() {
        let mut reader = Cursor::new("next\nexit\nwhat\n");
        assert_eq!(read_action(&mut reader), Some(UserAction::NewBoard));
        assert_eq!(read_action(&mut reader), Some(UserAction::Exit));
        assert_eq!(read_action(&mut reader), None);
    }

    #[test]
    fn test_read_action_at_end_of_input_exits() {
        let mut reader = Cursor::new("");
        assert_eq!(read_action(&mut reader), Some(UserAction::Exit));
    }
}
