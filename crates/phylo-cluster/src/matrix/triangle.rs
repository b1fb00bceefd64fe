//! Index arithmetic for the strict upper triangle of an N×N matrix.

/// Maps the flat row-major index space `[0, N²)` onto `(row, col)`
/// coordinates and picks out the cells that carry work.
///
/// Only cells with `row < col` are "work" cells: every unordered pair of
/// genes appears exactly once among them, so parallel workers that each own
/// one flat index never write the same pair twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleIndexer {
    n: usize,
}

impl TriangleIndexer {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Size of the flat index space, `N²`.
    pub fn cell_count(&self) -> usize {
        self.n * self.n
    }

    /// Number of unordered off-diagonal pairs, `N(N-1)/2`.
    pub fn pair_count(&self) -> usize {
        self.n * self.n.saturating_sub(1) / 2
    }

    /// `(k / N, k % N)`.
    #[inline]
    pub fn coords(&self, k: usize) -> (usize, usize) {
        (k / self.n, k % self.n)
    }

    #[inline]
    pub fn flat(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    /// True when flat index `k` lies strictly above the diagonal.
    #[inline]
    pub fn is_upper(&self, k: usize) -> bool {
        let (row, col) = self.coords(k);
        row < col
    }

    /// All `(row, col)` with `row < col`, in row-major order:
    /// `(0,1), (0,2), .., (0,N-1), (1,2), ..`.
    pub fn upper_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.n).flat_map(move |row| ((row + 1)..self.n).map(move |col| (row, col)))
    }
}
