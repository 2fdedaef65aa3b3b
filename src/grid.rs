//! Toroidal grid topology.
//!
//! Maps (x, y) coordinates to linear indices and computes each cell's Moore
//! neighborhood, the 8 cells horizontally, vertically, and diagonally
//! adjacent. Edges wrap to the opposite edge, so every cell has exactly 8
//! distinct neighbors on any grid of side >= 3.

/// The number of neighbors in a Moore neighborhood.
pub const NEIGHBOR_COUNT: usize = 8;

/// An N x N torus addressed by linear index `x * N + y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Creates a grid of side `size`. Sides below 3 produce duplicate
    /// neighbors and are out of contract.
    #[must_use]
    pub fn new(size: usize) -> Grid {
        debug_assert!(size >= 3, "grid side must be at least 3");
        Grid { size }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Linear index of (x, y). Row-major in x: the same order the
    /// population is built and iterated in.
    #[must_use]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        x * self.size + y
    }

    /// Inverse of `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.cell_count());
        (index / self.size, index % self.size)
    }

    /// Linear indices of the 8 neighbors of (x, y), with toroidal wrap.
    ///
    /// The order is fixed and significant for reproducibility: right, left,
    /// above, below, right-above, right-below, left-below, left-above.
    #[must_use]
    pub fn neighbors(&self, x: usize, y: usize) -> [usize; NEIGHBOR_COUNT] {
        let n = self.size;
        let right = (x + 1) % n;
        let left = (x + n - 1) % n;
        let above = (y + 1) % n;
        let below = (y + n - 1) % n;
        [
            self.index(right, y),
            self.index(left, y),
            self.index(x, above),
            self.index(x, below),
            self.index(right, above),
            self.index(right, below),
            self.index(left, below),
            self.index(left, above),
        ]
    }
}
