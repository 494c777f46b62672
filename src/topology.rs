/// Row/column coordinate on the board.
pub type Coord = (usize, usize);

/// Moore neighborhood of every cell on a toroidal grid.
///
/// Stored flat, indexed by `row * cols + col`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborTopology {
    rows: usize,
    cols: usize,
    neighbors: Vec<[Coord; 8]>,
}

impl NeighborTopology {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut topology = Self::default();
        topology.rebuild(rows, cols);
        topology
    }

    /// Replace the whole table for a grid of `rows x cols`.
    pub fn rebuild(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.neighbors.clear();
        self.neighbors.reserve(rows * cols);

        for r in 0..rows {
            for c in 0..cols {
                let mut set = [(0, 0); 8];
                let mut i = 0;
                for dr in 0..3 {
                    for dc in 0..3 {
                        // Skip the cell itself
                        if dr == 1 && dc == 1 {
                            continue;
                        }
                        // Adding the dimension first keeps the subtraction from underflowing
                        let nr = (r + rows + dr - 1) % rows;
                        let nc = (c + cols + dc - 1) % cols;
                        set[i] = (nr, nc);
                        i += 1;
                    }
                }
                self.neighbors.push(set);
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Neighbors of `(row, col)`; panics if the coordinate is outside the grid.
    pub fn neighbors(&self, row: usize, col: usize) -> &[Coord; 8] {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) outside {}x{}", self.rows, self.cols);
        &self.neighbors[row * self.cols + col]
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
