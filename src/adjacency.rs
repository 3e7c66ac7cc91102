use crate::grid::{Coordinate, Grid, row_major_index};

/// The eight king-move offsets, in the order neighbours are enumerated.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds neighbours of every cell, computed once per grid.
///
/// Entries are stored by the grid's row-major cell index, so lookups never hash.
#[derive(Clone, Debug)]
pub struct AdjacencyIndex {
    neighbors: Vec<Vec<Coordinate>>,
    indices: Vec<Vec<usize>>,
    width: usize,
    height: usize,
}

impl AdjacencyIndex {
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        let mut neighbors = Vec::with_capacity(grid.len());
        let mut indices = Vec::with_capacity(grid.len());
        for cell in grid.coordinates() {
            let adjacent: Vec<Coordinate> = NEIGHBOR_OFFSETS
                .iter()
                .map(|&(d_row, d_col)| cell.offset(d_row, d_col))
                .filter(|&n| grid.contains(n))
                .collect();
            indices.push(adjacent.iter().filter_map(|&n| grid.index_of(n)).collect());
            neighbors.push(adjacent);
        }
        Self {
            neighbors,
            indices,
            width: grid.width(),
            height: grid.height(),
        }
    }

    /// Neighbours of `coordinate`; empty when it is not part of the grid.
    #[must_use]
    pub fn neighbors(&self, coordinate: Coordinate) -> &[Coordinate] {
        self.index_of(coordinate)
            .map(|i| self.neighbors[i].as_slice())
            .unwrap_or_default()
    }

    /// Neighbours of the cell at row-major `index`, as cell indices.
    #[must_use]
    pub fn neighbor_indices(&self, index: usize) -> &[usize] {
        self.indices.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of cells covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Whether this index was built for a grid of `grid`'s shape.
    #[must_use]
    pub fn matches(&self, grid: &Grid) -> bool {
        self.width == grid.width() && self.height == grid.height()
    }

    fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        row_major_index(coordinate, self.width, self.height)
    }
}
