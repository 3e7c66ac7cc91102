//! Letter grid and coordinates.
//!
//! A [`Grid`] is a dense row-major block of letters. Every coordinate with
//! `0 <= row < height` and `0 <= col < width` holds exactly one letter; nothing
//! outside that range exists.

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between rows in the textual board form (`"CA/TS"`).
pub const ROW_SEPARATOR: char = '/';

/// A (row, column) pair. Unbounded on its own; only meaningful against a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: isize,
    pub col: isize,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn offset(self, d_row: isize, d_col: isize) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} letters, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("'{letter}' at {coordinate} is not a letter")]
    InvalidLetter { letter: char, coordinate: Coordinate },
    #[error("cell {0} supplied more than once")]
    DuplicateCell(Coordinate),
    #[error("cell {0} is missing")]
    MissingCell(Coordinate),
    #[error("cell {0} lies outside the grid")]
    CellOutOfRange(Coordinate),
}

/// Row-major index of `coordinate` in a `width` x `height` block, or `None` outside it.
pub(crate) fn row_major_index(coordinate: Coordinate, width: usize, height: usize) -> Option<usize> {
    let row = usize::try_from(coordinate.row).ok()?;
    let col = usize::try_from(coordinate.col).ok()?;
    (row < height && col < width).then_some(row * width + col)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Builds a grid by asking `letter` for the contents of every cell, row by row.
    /// ASCII letters are uppercased on the way in.
    pub(crate) fn from_fn<F>(width: usize, height: usize, mut letter: F) -> Self
    where
        F: FnMut(Coordinate) -> char,
    {
        let mut letters = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let cell = letter(Coordinate::new(row as isize, col as isize));
                letters.push(cell.to_ascii_uppercase());
            }
        }
        Self {
            width,
            height,
            letters,
        }
    }

    /// A grid of the given size with a space in every cell.
    #[must_use]
    pub fn blank(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_| ' ')
    }

    /// Fills every cell with a uniformly chosen letter `A..=Z`.
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        Self::from_fn(width, height, |_| char::from(rng.gen_range(b'A'..=b'Z')))
    }

    /// Parses one string per row. Letters are uppercased; rows must share a length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().trim().chars().count());
        let mut letters = Vec::with_capacity(width * rows.len());
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref().trim();
            let found = text.chars().count();
            if found != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, letter) in text.chars().enumerate() {
                if !letter.is_ascii_alphabetic() {
                    return Err(GridError::InvalidLetter {
                        letter,
                        coordinate: Coordinate::new(row as isize, col as isize),
                    });
                }
                letters.push(letter.to_ascii_uppercase());
            }
        }
        Ok(Self {
            width,
            height: rows.len(),
            letters,
        })
    }

    /// Builds a grid from an explicit cell mapping. Every cell in
    /// `[0, height) x [0, width)` must be supplied exactly once.
    pub fn from_cells<I>(width: usize, height: usize, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (Coordinate, char)>,
    {
        let mut slots: Vec<Option<char>> = vec![None; width * height];
        let shape = Self {
            width,
            height,
            letters: Vec::new(),
        };
        for (coordinate, letter) in cells {
            let index = shape
                .index_of(coordinate)
                .ok_or(GridError::CellOutOfRange(coordinate))?;
            if slots[index].is_some() {
                return Err(GridError::DuplicateCell(coordinate));
            }
            if !letter.is_ascii_alphabetic() {
                return Err(GridError::InvalidLetter { letter, coordinate });
            }
            slots[index] = Some(letter.to_ascii_uppercase());
        }
        let mut letters = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(letter) => letters.push(letter),
                None => return Err(GridError::MissingCell(shape.coordinate_of(index))),
            }
        }
        Ok(Self {
            width,
            height,
            letters,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index_of(coordinate).is_some()
    }

    /// Row-major cell index, or `None` outside the grid.
    #[must_use]
    pub fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        row_major_index(coordinate, self.width, self.height)
    }

    #[must_use]
    pub fn coordinate_of(&self, index: usize) -> Coordinate {
        Coordinate::new((index / self.width) as isize, (index % self.width) as isize)
    }

    /// Letters in row-major order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn get(&self, coordinate: Coordinate) -> Option<char> {
        self.index_of(coordinate).map(|i| self.letters[i])
    }

    /// Letter at `coordinate`.
    ///
    /// # Panics
    /// When the coordinate lies outside the grid.
    #[must_use]
    pub fn letter_at(&self, coordinate: Coordinate) -> char {
        match self.get(coordinate) {
            Some(letter) => letter,
            None => panic!(
                "coordinate {coordinate} out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// Every coordinate in the grid, row by row.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.letters.len()).map(|i| self.coordinate_of(i))
    }

    /// The letters along `path`, concatenated.
    #[must_use]
    pub fn spell(&self, path: &[Coordinate]) -> String {
        path.iter().map(|&c| self.letter_at(c)).collect()
    }

    /// Rows as strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.letters
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let spaced: Vec<String> = row.chars().map(String::from).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses `/`-separated rows, e.g. `"CA/TS"`. An empty string is an empty grid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::blank(0, 0));
        }
        let rows: Vec<&str> = s.split(ROW_SEPARATOR).collect();
        Self::from_rows(&rows)
    }
}
