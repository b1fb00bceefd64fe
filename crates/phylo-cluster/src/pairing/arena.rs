//! The single owned buffer the pairing loop rewrites in place.

use phylo_core::constants::SENTINEL;
use phylo_core::errors::PairingError;
use phylo_core::types::{ClusterLabel, DissimilarityMatrix};

/// One matrix row/column: a live cluster or one already absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Active(ClusterLabel),
    Retired(ClusterLabel),
}

impl Slot {
    pub fn label(&self) -> &ClusterLabel {
        match self {
            Self::Active(label) | Self::Retired(label) => label,
        }
    }

    pub fn is_retired(&self) -> bool {
        matches!(self, Self::Retired(_))
    }

    /// Text form; retired slots carry the marker prefix.
    pub fn render(&self, marker: char) -> String {
        match self {
            Self::Active(label) => label.to_string(),
            Self::Retired(label) => label.render_retired(marker),
        }
    }
}

/// Matrix cells plus one slot per row, repurposed as clusters merge.
///
/// A cell is a merge candidate while it is non-negative and off-diagonal;
/// [`SENTINEL`] marks everything else. Once pairing finishes the arena is
/// dropped, its contents carry no meaning.
#[derive(Debug)]
pub struct PairingArena {
    n: usize,
    cells: Vec<f32>,
    slots: Vec<Slot>,
}

impl PairingArena {
    /// Take ownership of `matrix` and `labels`, checking the input contract:
    /// one label per row, finite non-negative off-diagonal cells, symmetry.
    pub fn new(matrix: DissimilarityMatrix, labels: Vec<ClusterLabel>) -> Result<Self, PairingError> {
        let n = matrix.dimension();
        if labels.len() != n {
            return Err(PairingError::LabelCountMismatch {
                labels: labels.len(),
                dimension: n,
            });
        }
        for row in 0..n {
            for col in 0..n {
                let v = matrix.get(row, col);
                if row != col && (!v.is_finite() || v < 0.0) {
                    return Err(PairingError::InvalidDistance { row, col });
                }
            }
        }
        if let Some((row, col)) = matrix.first_asymmetry() {
            return Err(PairingError::AsymmetricMatrix { row, col });
        }

        let mut arena = Self {
            n,
            cells: matrix.into_cells(),
            slots: labels.into_iter().map(Slot::Active).collect(),
        };
        for i in 0..n {
            arena.cells[i * n + i] = SENTINEL;
        }
        Ok(arena)
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cells[row * self.n + col]
    }

    pub fn slot(&self, i: usize) -> &Slot {
        &self.slots[i]
    }

    pub fn label(&self, i: usize) -> &ClusterLabel {
        self.slots[i].label()
    }

    /// Remaining candidate pairs: non-negative cells halved for symmetry.
    /// Full O(N²) scan.
    pub fn comparable_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v >= 0.0).count() / 2
    }

    /// Smallest candidate in the upper triangle, skipping retired rows.
    ///
    /// Strict `<` keeps the first minimum met in row-major, then increasing
    /// column, order; ties never move the selection.
    pub fn closest_pair(&self) -> Option<(usize, usize, f32)> {
        let mut best: Option<(usize, usize, f32)> = None;
        let mut best_value = f32::INFINITY;
        for row in 0..self.n {
            if self.slots[row].is_retired() {
                continue;
            }
            let base = row * self.n;
            for col in (row + 1)..self.n {
                let v = self.cells[base + col];
                if v >= 0.0 && v < best_value {
                    best_value = v;
                    best = Some((row, col, v));
                }
            }
        }
        best
    }

    /// Fold cluster `col` into cluster `row` (`row < col`).
    ///
    /// The merged row becomes the unweighted mean of both rows towards every
    /// live cluster, `col` is retired with its whole row/column set to
    /// [`SENTINEL`], and `row` is relabelled `merged`.
    pub fn absorb(&mut self, row: usize, col: usize, merged: ClusterLabel) {
        let n = self.n;
        for k in 0..n {
            if k == row || k == col {
                continue;
            }
            let a = self.cells[row * n + k];
            let b = self.cells[col * n + k];
            if a < 0.0 || b < 0.0 {
                continue;
            }
            let mean = (a + b) / 2.0;
            self.cells[row * n + k] = mean;
            self.cells[k * n + row] = mean;
        }

        for k in 0..n {
            self.cells[col * n + k] = SENTINEL;
            self.cells[k * n + col] = SENTINEL;
        }
        self.cells[row * n + row] = SENTINEL;

        let absorbed = self.slots[col].label().clone();
        self.slots[col] = Slot::Retired(absorbed);
        self.slots[row] = Slot::Active(merged);
    }

    /// Labels of every slot as text, retired ones prefixed with `marker`.
    pub fn render_labels(&self, marker: char) -> Vec<String> {
        self.slots.iter().map(|s| s.render(marker)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(n: usize, cells: &[f32]) -> PairingArena {
        let labels = (0..n).map(|i| ClusterLabel::leaf(format!("L{i}"))).collect();
        PairingArena::new(DissimilarityMatrix::from_cells(n, cells.to_vec()).unwrap(), labels).unwrap()
    }

    #[test]
    fn diagonal_is_sealed() {
        let a = arena(2, &[0.0, 0.3, 0.3, 0.0]);
        assert_eq!(a.get(0, 0), SENTINEL);
        assert_eq!(a.get(1, 1), SENTINEL);
        assert_eq!(a.comparable_count(), 1);
    }

    #[test]
    fn closest_pair_keeps_first_tie() {
        #[rustfmt::skip]
        let a = arena(3, &[
            0.0, 0.5, 0.5,
            0.5, 0.0, 0.5,
            0.5, 0.5, 0.0,
        ]);
        assert_eq!(a.closest_pair(), Some((0, 1, 0.5)));
    }

    #[test]
    fn absorb_averages_and_retires() {
        #[rustfmt::skip]
        let mut a = arena(3, &[
            0.0, 0.1, 0.4,
            0.1, 0.0, 0.8,
            0.4, 0.8, 0.0,
        ]);
        a.absorb(0, 1, ClusterLabel::Internal(3));

        assert!((a.get(0, 2) - 0.6).abs() < 1e-6);
        assert_eq!(a.get(0, 2), a.get(2, 0));
        assert!((0..3).all(|k| a.get(1, k) == SENTINEL && a.get(k, 1) == SENTINEL));
        assert_eq!(a.slot(1), &Slot::Retired(ClusterLabel::leaf("L1")));
        assert_eq!(a.label(0), &ClusterLabel::Internal(3));
        assert_eq!(a.comparable_count(), 1);
        assert_eq!(a.render_labels('*'), vec!["3", "*L1", "L2"]);
    }

    #[test]
    fn rejects_label_mismatch() {
        let m = DissimilarityMatrix::zeros(3);
        let err = PairingArena::new(m, vec![ClusterLabel::leaf("a")]).unwrap_err();
        assert_eq!(
            err,
            PairingError::LabelCountMismatch {
                labels: 1,
                dimension: 3
            }
        );
    }

    #[test]
    fn rejects_asymmetric_matrix() {
        let m = DissimilarityMatrix::from_cells(2, vec![0.0, 0.2, 0.3, 0.0]).unwrap();
        let labels = vec![ClusterLabel::leaf("a"), ClusterLabel::leaf("b")];
        assert_eq!(
            PairingArena::new(m, labels).unwrap_err(),
            PairingError::AsymmetricMatrix { row: 0, col: 1 }
        );
    }

    #[test]
    fn rejects_negative_and_nan_cells() {
        let labels = || vec![ClusterLabel::leaf("a"), ClusterLabel::leaf("b")];
        let neg = DissimilarityMatrix::from_cells(2, vec![0.0, -0.2, -0.2, 0.0]).unwrap();
        assert!(matches!(
            PairingArena::new(neg, labels()),
            Err(PairingError::InvalidDistance { row: 0, col: 1 })
        ));
        let nan = DissimilarityMatrix::from_cells(2, vec![0.0, f32::NAN, f32::NAN, 0.0]).unwrap();
        assert!(PairingArena::new(nan, labels()).is_err());
    }
}
