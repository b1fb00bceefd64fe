//! PhyloEngine: one clustering run, matrix build → average-linkage pairing.

use std::sync::atomic::{AtomicBool, Ordering};

use phylo_core::config::PhyloConfig;
use phylo_core::errors::{ConfigError, PairingError, PhyloError, PhyloResult};
use phylo_core::traits::{Cancellable, CancellationToken, DissimilarityMetric};
use phylo_core::types::{ClusterLabel, DissimilarityMatrix, FeatureVector, GeneticEncoding, MergeEvent};
use tracing::info;

use crate::dendrogram::Dendrogram;
use crate::matrix::CorrelationMatrixEngine;
use crate::pairing::AverageLinkage;

/// Output of a run: leaf labels, the matrix as built, and the merge events.
#[derive(Debug, Clone)]
pub struct Clustering {
    /// Leaf labels in matrix order.
    pub labels: Vec<ClusterLabel>,
    /// Snapshot of the normalized matrix taken before pairing consumed it.
    pub matrix: DissimilarityMatrix,
    pub events: Vec<MergeEvent>,
}

impl Clustering {
    pub fn dendrogram(&self) -> Result<Dendrogram, PairingError> {
        Dendrogram::from_events(self.labels.len(), &self.events)
    }
}

/// Runs the two engines for one config and one metric.
///
/// Cancellation is checked only at stage boundaries; once a stage starts it
/// runs to completion. One engine serves one run at a time.
pub struct PhyloEngine<M> {
    config: PhyloConfig,
    matrix_engine: CorrelationMatrixEngine<M>,
    pairing: AverageLinkage,
    /// Guard: only one run at a time.
    is_running: AtomicBool,
}

impl<M> PhyloEngine<M> {
    pub fn new(config: PhyloConfig, metric: M) -> Self {
        Self {
            matrix_engine: CorrelationMatrixEngine::new(metric, config.matrix.clone()),
            pairing: AverageLinkage::new(config.pairing.clone()),
            config,
            is_running: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &PhyloConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Run to completion without a cancellation source.
    pub fn run<E>(&self, encoding: &GeneticEncoding<E>) -> PhyloResult<Clustering>
    where
        M: DissimilarityMetric<E>,
        E: Sync,
    {
        self.run_with_cancellation(encoding, &CancellationToken::new())
    }

    pub fn run_with_cancellation<E>(
        &self,
        encoding: &GeneticEncoding<E>,
        cancel: &dyn Cancellable,
    ) -> PhyloResult<Clustering>
    where
        M: DissimilarityMetric<E>,
        E: Sync,
    {
        let _guard = RunGuard::acquire(&self.is_running)?;
        self.run_stages(encoding, cancel)
    }

    /// Align `vectors` under the configured data analysis, then run.
    pub fn run_aligned<E>(&self, vectors: Vec<FeatureVector<E>>, default: E) -> PhyloResult<Clustering>
    where
        M: DissimilarityMetric<E>,
        E: Clone + Sync,
    {
        let encoding = GeneticEncoding::aligned_with(vectors, default, &self.config.data_analysis)?;
        self.run(&encoding)
    }

    fn run_stages<E>(
        &self,
        encoding: &GeneticEncoding<E>,
        cancel: &dyn Cancellable,
    ) -> PhyloResult<Clustering>
    where
        M: DissimilarityMetric<E>,
        E: Sync,
    {
        let kind = self.matrix_engine.metric().kind();
        if kind != self.config.metric {
            return Err(ConfigError::ValidationFailed {
                field: "metric".to_string(),
                message: format!("configured {} but engine runs {}", self.config.metric, kind),
            }
            .into());
        }

        cancel.checkpoint("matrix")?;
        let matrix = self.matrix_engine.build(&encoding.genes)?;

        cancel.checkpoint("pairing")?;
        let labels = encoding.labels();
        let events = self.pairing.pair(matrix.clone(), labels.clone())?;

        info!(
            genes = labels.len(),
            merges = events.len(),
            aligned = encoding.aligned,
            "clustering run complete"
        );

        Ok(Clustering {
            labels,
            matrix,
            events,
        })
    }
}

/// Holds the single-run flag; clears it on drop, including during unwinding.
struct RunGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> PhyloResult<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| PhyloError::AlreadyRunning)?;
        Ok(Self { flag })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
