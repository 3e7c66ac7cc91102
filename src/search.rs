//! Backtracking word search over a letter grid.
//!
//! Every start cell is walked depth-first through adjacent, not-yet-used cells.
//! The walk carries its position in the lexicon trie alongside the grid path,
//! so a branch stops as soon as its letters stop being the prefix of any word.
//!
//! # Preconditions
//! The grid, adjacency index and lexicon must belong together: the adjacency
//! index has to be built from a grid of the same shape. Mixing them up is a
//! programming error and panics.

use crate::adjacency::AdjacencyIndex;
use crate::debug_log;
use crate::grid::{Coordinate, Grid};
use crate::lexicon::{LexiconIndex, NodeId, ROOT};
use std::collections::HashSet;
use std::time::Instant;

/// An ordered run of distinct, pairwise-adjacent cells.
pub type Path = Vec<Coordinate>;

/// What a (possibly deadline-bounded) search produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub words: HashSet<String>,
    /// Start cells whose exploration ran to completion.
    pub starts_explored: usize,
    /// Paths visited whose letters were a viable prefix.
    pub paths_explored: usize,
    /// False when the deadline cut the search short.
    pub complete: bool,
}

pub struct PathSearch<'a> {
    grid: &'a Grid,
    adjacency: &'a AdjacencyIndex,
    lexicon: &'a LexiconIndex,
}

/// Mutable walk state, reset by backtracking and reused across start cells.
struct Walk<'a, 's> {
    search: &'s PathSearch<'a>,
    visited: Vec<bool>,
    cells: Vec<usize>,
    spelled: String,
    explored: usize,
}

impl<'a, 's> Walk<'a, 's> {
    fn new(search: &'s PathSearch<'a>) -> Self {
        Self {
            search,
            visited: vec![false; search.grid.len()],
            cells: Vec::new(),
            spelled: String::new(),
            explored: 0,
        }
    }

    fn start<F>(&mut self, cell: usize, on_word: &mut F)
    where
        F: FnMut(&[usize], &str),
    {
        let letter = self.search.grid.letters()[cell];
        if let Some(node) = self.search.lexicon.step(ROOT, letter) {
            self.enter(cell, letter);
            self.explore(node, on_word);
            self.leave(cell);
        }
    }

    fn explore<F>(&mut self, node: NodeId, on_word: &mut F)
    where
        F: FnMut(&[usize], &str),
    {
        let lexicon = self.search.lexicon;
        let adjacency = self.search.adjacency;
        let letters = self.search.grid.letters();
        self.explored += 1;
        if lexicon.is_terminal(node) {
            on_word(&self.cells, &self.spelled);
        }
        if !lexicon.has_children(node) {
            return;
        }
        let Some(&last) = self.cells.last() else {
            return;
        };
        for &next in adjacency.neighbor_indices(last) {
            if self.visited[next] {
                continue;
            }
            let letter = letters[next];
            // a missing child means the extended letters are no viable prefix
            if let Some(child) = lexicon.step(node, letter) {
                self.enter(next, letter);
                self.explore(child, on_word);
                self.leave(next);
            }
        }
    }

    fn enter(&mut self, cell: usize, letter: char) {
        self.visited[cell] = true;
        self.cells.push(cell);
        self.spelled.push(letter);
    }

    fn leave(&mut self, cell: usize) {
        self.visited[cell] = false;
        self.cells.pop();
        self.spelled.pop();
    }
}

impl<'a> PathSearch<'a> {
    /// # Panics
    /// If `adjacency` was built for a grid of a different shape.
    #[must_use]
    pub fn new(grid: &'a Grid, adjacency: &'a AdjacencyIndex, lexicon: &'a LexiconIndex) -> Self {
        assert!(
            adjacency.matches(grid),
            "adjacency index does not belong to this {}x{} grid",
            grid.width(),
            grid.height()
        );
        Self {
            grid,
            adjacency,
            lexicon,
        }
    }

    /// Every path whose letters spell a complete word.
    #[must_use]
    pub fn paths(&self) -> Vec<Path> {
        let mut paths = Vec::new();
        let mut walk = Walk::new(self);
        for start in 0..self.grid.len() {
            walk.start(start, &mut |cells: &[usize], _: &str| {
                paths.push(cells.iter().map(|&i| self.grid.coordinate_of(i)).collect());
            });
        }
        paths
    }

    /// Distinct words spelled by any path.
    #[must_use]
    pub fn words(&self) -> HashSet<String> {
        self.run(None).words
    }

    /// Like [`words`](Self::words), but stops starting new cells once `deadline` passes.
    /// A start already under way is always finished.
    #[must_use]
    pub fn words_until(&self, deadline: Instant) -> SearchOutcome {
        self.run(Some(deadline))
    }

    fn run(&self, deadline: Option<Instant>) -> SearchOutcome {
        let mut outcome = SearchOutcome {
            complete: true,
            ..SearchOutcome::default()
        };
        let mut walk = Walk::new(self);
        for start in 0..self.grid.len() {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                outcome.complete = false;
                break;
            }
            walk.start(start, &mut |_: &[usize], word: &str| {
                if !outcome.words.contains(word) {
                    outcome.words.insert(word.to_string());
                }
            });
            outcome.starts_explored += 1;
        }
        outcome.paths_explored = walk.explored;
        outcome
    }
}

/// Finds every dictionary word traceable on `grid`.
///
/// Builds the adjacency index once and walks from every cell. An empty grid
/// or a lexicon with nothing on the board gives an empty set.
#[must_use]
pub fn search(grid: &Grid, lexicon: &LexiconIndex) -> HashSet<String> {
    search_with_deadline(grid, lexicon, None).words
}

/// [`search`] with an optional deadline, reporting how far it got.
#[must_use]
pub fn search_with_deadline(
    grid: &Grid,
    lexicon: &LexiconIndex,
    deadline: Option<Instant>,
) -> SearchOutcome {
    let started = Instant::now();
    let adjacency = AdjacencyIndex::new(grid);
    let search = PathSearch::new(grid, &adjacency, lexicon);
    let outcome = search.run(deadline);
    debug_log!(
        "search() - {}x{} grid, {} starts, {} paths, {} words in {:?}{}",
        grid.width(),
        grid.height(),
        outcome.starts_explored,
        outcome.paths_explored,
        outcome.words.len(),
        started.elapsed(),
        if outcome.complete { "" } else { " (deadline hit)" }
    );
    outcome
}

/// Standard Boggle points for one word. Words under three letters score nothing.
#[must_use]
pub fn score_word(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

#[must_use]
pub fn total_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|w| score_word(w.as_ref())).sum()
}
