// Integration tests for the boggle-solver library
// These tests verify that all modules work together correctly

use boggle_solver::cli::CliInterface;
use boggle_solver::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::io::Cursor;

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[test]
fn test_two_by_two_cats_board() {
    let grid = Grid::from_cells(
        2,
        2,
        [
            (Coordinate::new(0, 0), 'C'),
            (Coordinate::new(0, 1), 'A'),
            (Coordinate::new(1, 0), 'T'),
            (Coordinate::new(1, 1), 'S'),
        ],
    )
    .unwrap();
    let lexicon = LexiconIndex::from_words(["CAT", "CATS", "AT", "A"]);
    assert_eq!(search(&grid, &lexicon), set(&["CAT", "CATS", "AT", "A"]));
}

#[test]
fn test_single_z_board_finds_nothing() {
    let grid = Grid::from_rows(&["Z"]).unwrap();
    let lexicon = LexiconIndex::from_words(["A", "B"]);
    assert!(search(&grid, &lexicon).is_empty());
}

#[test]
fn test_go_without_goat() {
    let grid = Grid::from_rows(&["GOX", "QAZ"]).unwrap();
    let lexicon = LexiconIndex::from_words(["GO", "GOAT"]);
    assert_eq!(search(&grid, &lexicon), set(&["GO"]));
}

#[test]
fn test_lowercase_dictionary_matches_uppercase_board() {
    let words = load_dictionary_from_str("  cat\nCats \n\nat\na\n");
    let lexicon = LexiconIndex::from_words(&words);
    let grid: Grid = "ca/ts".parse().unwrap();
    assert_eq!(search(&grid, &lexicon), set(&["CAT", "CATS", "AT", "A"]));
}

#[test]
fn test_embedded_dictionary_on_known_board() {
    let lexicon = LexiconIndex::from_words(load_dictionary_from_str(EMBEDDED_DICTIONARY));
    let grid: Grid = "CATS/DOGE/RIME/LANE".parse().unwrap();
    let found = search(&grid, &lexicon);
    assert!(found.contains("CAT"));
    assert!(found.contains("CATS"));
    assert!(found.contains("DOG"));
    assert!(found.iter().all(|w| lexicon.is_word(w)));
}

#[test]
fn test_search_is_idempotent() {
    let lexicon = LexiconIndex::from_words(load_dictionary_from_str(EMBEDDED_DICTIONARY));
    let mut rng = StdRng::seed_from_u64(2024);
    let grid = Grid::random(5, 5, &mut rng);
    assert_eq!(search(&grid, &lexicon), search(&grid, &lexicon));
}

#[test]
fn test_path_search_agrees_with_entry_point() {
    let lexicon = LexiconIndex::from_words(load_dictionary_from_str(EMBEDDED_DICTIONARY));
    let mut rng = StdRng::seed_from_u64(11);
    let grid = Grid::random(4, 4, &mut rng);
    let adjacency = AdjacencyIndex::new(&grid);
    let engine = PathSearch::new(&grid, &adjacency, &lexicon);

    let from_paths: HashSet<String> = engine.paths().iter().map(|p| grid.spell(p)).collect();
    assert_eq!(from_paths, engine.words());
    assert_eq!(engine.words(), search(&grid, &lexicon));
}

#[test]
fn test_end_to_end_cli_session() {
    let lexicon = LexiconIndex::from_words(["CAT", "CATS", "AT", "A"]);
    let config = GameConfig {
        fixed_board: Some("CA/TS".parse().unwrap()),
        ..GameConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    let mut interface = CliInterface::new(Cursor::new("huh\nnext\nexit\n"));

    // Should display the board twice and exit without panicking
    game_loop(&lexicon, &config, &mut rng, &mut interface);
}

#[test]
fn test_cli_session_ends_at_end_of_input() {
    let lexicon = LexiconIndex::from_words(load_dictionary_from_str(EMBEDDED_DICTIONARY));
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut interface = CliInterface::new(Cursor::new(""));

    game_loop(&lexicon, &config, &mut rng, &mut interface);
}

#[test]
fn test_play_round_with_real_dictionary_finds_words() {
    let lexicon = LexiconIndex::from_words(load_dictionary_from_str(EMBEDDED_DICTIONARY));
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(99);
    let mut interface = CliInterface::new(Cursor::new(""));

    let round = play_round(&lexicon, &config, &mut rng, &mut interface);
    // single letters "A" and "I" are words, so a miss on every board is unlikely
    assert!(round.attempts <= config.max_attempts);
    assert!(round.words.iter().all(|w| lexicon.is_word(w)));
    assert_eq!(round.score(), total_score(&round.words));
}
