use crate::grid::Grid;
use crate::info_log;
use crate::lexicon::LexiconIndex;
use crate::search::{search_with_deadline, total_score};
use rand::Rng;
use std::time::{Duration, Instant};

pub const DEFAULT_WIDTH: usize = 4;
pub const DEFAULT_HEIGHT: usize = 4;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
/// Largest board side accepted from the command line.
pub const MAX_BOARD_SIDE: u64 = 64;

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Boards generated per round before giving up on finding any word. At least one is always tried.
    pub max_attempts: usize,
    pub time_limit: Option<Duration>,
    /// Solve this board every round instead of generating one.
    pub fixed_board: Option<Grid>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            time_limit: None,
            fixed_board: None,
        }
    }
}

/// One solved board.
#[derive(Clone, Debug)]
pub struct Round {
    pub grid: Grid,
    /// Longest first, then alphabetical.
    pub words: Vec<String>,
    /// Boards generated to get here.
    pub attempts: usize,
    /// False when the time limit cut the search short.
    pub complete: bool,
}

impl Round {
    #[must_use]
    pub fn score(&self) -> u32 {
        total_score(&self.words)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    NewBoard,
    Exit,
}

/// Trait for abstracting game I/O - allows both CLI and TUI implementations
pub trait GameInterface {
    fn display_searching_message(&mut self, attempt: usize);
    fn display_round(&mut self, round: &Round);
    fn display_no_words_message(&mut self, attempts: usize);
    /// `None` for input that was not understood; the caller asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_exit_message(&mut self);
}

/// Orders found words longest first, ties alphabetically.
pub fn sort_words<I: IntoIterator<Item = String>>(words: I) -> Vec<String> {
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words
}

fn solve(grid: Grid, lexicon: &LexiconIndex, config: &GameConfig, attempts: usize) -> Round {
    let deadline = config.time_limit.map(|limit| Instant::now() + limit);
    let outcome = search_with_deadline(&grid, lexicon, deadline);
    Round {
        grid,
        words: sort_words(outcome.words),
        attempts,
        complete: outcome.complete,
    }
}

/// Produces one solved board.
///
/// A fixed board is solved as is. Otherwise random boards are generated until
/// one yields a word or `max_attempts` boards have been tried; the last board
/// is returned either way.
pub fn play_round<R, I>(
    lexicon: &LexiconIndex,
    config: &GameConfig,
    rng: &mut R,
    interface: &mut I,
) -> Round
where
    R: Rng,
    I: GameInterface + ?Sized,
{
    if let Some(board) = &config.fixed_board {
        interface.display_searching_message(1);
        return solve(board.clone(), lexicon, config, 1);
    }

    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        interface.display_searching_message(attempt);
        let grid = Grid::random(config.width, config.height, rng);
        let round = solve(grid, lexicon, config, attempt);
        if !round.words.is_empty() || attempt >= max_attempts {
            return round;
        }
        info_log!("play_round() - attempt {} found no words, regenerating", attempt);
        attempt += 1;
    }
}

pub fn game_loop<R, I>(lexicon: &LexiconIndex, config: &GameConfig, rng: &mut R, interface: &mut I)
where
    R: Rng,
    I: GameInterface + ?Sized,
{
    loop {
        let round = play_round(lexicon, config, rng, interface);
        interface.display_round(&round);
        if round.words.is_empty() {
            interface.display_no_words_message(round.attempts);
        }

        loop {
            match interface.read_action() {
                Some(UserAction::NewBoard) => break,
                Some(UserAction::Exit) => {
                    interface.display_exit_message();
                    return;
                }
                None => {}
            }
        }
    }
}
