//! Euclidean distance over numeric genes of possibly different length.

use phylo_core::config::MetricKind;
use phylo_core::errors::MetricError;
use phylo_core::traits::DissimilarityMetric;
use phylo_core::types::FeatureVector;

/// `sqrt(Σ (a_i - b_i)²)` over the common prefix, plus `Σ t²` over the tail
/// of the longer vector, which is compared against 0.
///
/// The pair value is not normalized; the matrix engine divides every cell
/// by the observed maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl<E> DissimilarityMetric<E> for Euclidean
where
    E: Copy + Into<f64> + Send + Sync,
{
    fn kind(&self) -> MetricKind {
        MetricKind::Euclidean
    }

    fn distance(&self, a: &FeatureVector<E>, b: &FeatureVector<E>) -> Result<f32, MetricError> {
        ensure_finite(a)?;
        ensure_finite(b)?;

        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

        let mut sum = 0.0f64;
        for (&x, &y) in short.values.iter().zip(&long.values) {
            let d = x.into() - y.into();
            sum += d * d;
        }
        for &t in &long.values[short.len()..] {
            let t = t.into();
            sum += t * t;
        }

        Ok(sum.sqrt() as f32)
    }
}

fn ensure_finite<E: Copy + Into<f64>>(v: &FeatureVector<E>) -> Result<(), MetricError> {
    match v.values.iter().position(|&x| !x.into().is_finite()) {
        Some(index) => Err(MetricError::NonFiniteValue {
            vector: v.name.clone(),
            index,
        }),
        None => Ok(()),
    }
}
