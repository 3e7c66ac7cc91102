// Library interface for boggle-solver
// This allows integration tests to access internal modules

pub mod adjacency;
pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod grid;
pub mod lexicon;
pub mod logging;
pub mod search;
pub mod tui;

// Re-export commonly used items for easier testing
pub use adjacency::AdjacencyIndex;
pub use dictionary::{
    DictionarySource, EMBEDDED_DICTIONARY, load_dictionary, load_dictionary_from_file,
    load_dictionary_from_str,
};
pub use game_state::{GameConfig, GameInterface, Round, UserAction, game_loop, play_round};
pub use grid::{Coordinate, Grid, GridError};
pub use lexicon::LexiconIndex;
pub use search::{
    Path, PathSearch, SearchOutcome, score_word, search, search_with_deadline, total_score,
};
