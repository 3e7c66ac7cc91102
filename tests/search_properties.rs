// Property tests for grid, adjacency, lexicon and search invariants

use boggle_solver::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn board() -> impl Strategy<Value = Grid> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(width, height)| {
        proptest::collection::vec(prop::sample::select(vec!['A', 'E', 'S', 'T', 'R']), width * height)
            .prop_map(move |letters| {
                let cells = letters.into_iter().enumerate().map(|(i, letter)| {
                    (Coordinate::new((i / width) as isize, (i % width) as isize), letter)
                });
                Grid::from_cells(width, height, cells).expect("every cell supplied once")
            })
    })
}

fn dictionary() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[AERST]{1,5}", 0..30)
}

proptest! {
    #[test]
    fn coordinates_cover_exactly_the_grid(width in 0usize..8, height in 0usize..8) {
        let grid = Grid::blank(width, height);
        let coords: HashSet<Coordinate> = grid.coordinates().collect();
        prop_assert_eq!(coords.len(), width * height);
        for row in -1..=(height as isize) {
            for col in -1..=(width as isize) {
                let inside = (0..height as isize).contains(&row) && (0..width as isize).contains(&col);
                prop_assert_eq!(coords.contains(&Coordinate::new(row, col)), inside);
            }
        }
    }

    #[test]
    fn adjacency_is_local_and_symmetric(width in 1usize..7, height in 1usize..7) {
        let grid = Grid::blank(width, height);
        let adjacency = AdjacencyIndex::new(&grid);
        for cell in grid.coordinates() {
            for &n in adjacency.neighbors(cell) {
                prop_assert!(grid.contains(n));
                prop_assert!(n != cell);
                prop_assert!((n.row - cell.row).abs() <= 1 && (n.col - cell.col).abs() <= 1);
                prop_assert!(adjacency.neighbors(n).contains(&cell));
            }
        }
    }

    #[test]
    fn every_prefix_of_an_inserted_word_is_viable(words in dictionary()) {
        let lexicon = LexiconIndex::from_words(&words);
        for word in &words {
            prop_assert!(lexicon.is_word(word));
            for end in 1..=word.len() {
                prop_assert!(lexicon.is_viable_prefix(&word[..end]));
            }
        }
    }

    #[test]
    fn board_cells_hold_uppercase_letters(grid in board()) {
        prop_assert!(grid.letters().iter().all(char::is_ascii_uppercase));
    }

    #[test]
    fn found_words_are_in_the_lexicon_and_traceable(grid in board(), words in dictionary()) {
        let lexicon = LexiconIndex::from_words(&words);
        let adjacency = AdjacencyIndex::new(&grid);
        let engine = PathSearch::new(&grid, &adjacency, &lexicon);

        let mut traced = HashSet::new();
        for path in engine.paths() {
            let distinct: HashSet<&Coordinate> = path.iter().collect();
            prop_assert_eq!(distinct.len(), path.len());
            for pair in path.windows(2) {
                prop_assert!(adjacency.neighbors(pair[0]).contains(&pair[1]));
            }
            traced.insert(grid.spell(&path));
        }

        let found = search(&grid, &lexicon);
        prop_assert!(found.iter().all(|w| lexicon.is_word(w)));
        prop_assert_eq!(&found, &traced);
        prop_assert_eq!(found, engine.words());
    }
}
