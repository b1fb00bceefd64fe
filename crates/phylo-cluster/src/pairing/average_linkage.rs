//! AverageLinkage: greedy UPGMA agglomeration over a dissimilarity matrix.

use phylo_core::config::PairingConfig;
use phylo_core::errors::PairingError;
use phylo_core::types::{ClusterLabel, DissimilarityMatrix, MergeEvent};
use tracing::{debug, info, trace};

use super::PairingArena;

/// Merges the closest pair of live clusters until one remains.
///
/// Each step emits `(label[row], label[col], distance)`, replaces the merged
/// row by the mean of both rows, retires `col`, and relabels `row` as
/// `Internal(step + N)`. For N ≥ 2 inputs this yields exactly N−1 events;
/// the last one is the root and gets no synthetic id of its own.
///
/// Every step rescans the matrix to select the pair and to recount the
/// candidates, so a run is O(N³).
#[derive(Debug, Clone, Default)]
pub struct AverageLinkage {
    config: PairingConfig,
}

impl AverageLinkage {
    pub fn new(config: PairingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Consume `matrix` and produce the merge events in temporal order.
    ///
    /// `labels[i]` names row `i`. Contract violations are reported before any
    /// merge happens.
    pub fn pair(
        &self,
        matrix: DissimilarityMatrix,
        labels: Vec<ClusterLabel>,
    ) -> Result<Vec<MergeEvent>, PairingError> {
        let n = matrix.dimension();
        let mut arena = PairingArena::new(matrix, labels)?;

        if n <= 1 {
            debug!(leaves = n, "nothing to pair");
            return Ok(Vec::new());
        }

        let mut events = Vec::with_capacity(n - 1);
        let mut remaining = arena.comparable_count();

        while remaining > 1 {
            let Some((row, col, distance)) = arena.closest_pair() else {
                break;
            };
            let event = MergeEvent::new(arena.label(row).clone(), arena.label(col).clone(), distance);
            trace!(
                step = events.len(),
                first = %event.first,
                second = %event.second,
                distance,
                "merge"
            );
            events.push(event);

            arena.absorb(row, col, ClusterLabel::Internal(events.len() - 1 + n));
            remaining = arena.comparable_count();
        }

        if remaining > 0 {
            if let Some((row, col, distance)) = arena.closest_pair() {
                trace!(first = %arena.label(row), second = %arena.label(col), distance, "root");
                events.push(MergeEvent::new(
                    arena.label(row).clone(),
                    arena.label(col).clone(),
                    distance,
                ));
            }
        }

        debug!(
            slots = ?arena.render_labels(self.config.retired_marker),
            "final slot state"
        );
        info!(leaves = n, merges = events.len(), "pairing complete");
        Ok(events)
    }
}
