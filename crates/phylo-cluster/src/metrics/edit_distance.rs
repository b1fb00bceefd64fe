//! Token-wise Levenshtein distance over symbolic genes.

use phylo_core::config::MetricKind;
use phylo_core::errors::MetricError;
use phylo_core::traits::DissimilarityMetric;
use phylo_core::types::FeatureVector;

/// Mean normalized edit distance between paired tokens.
///
/// Tokens at the same position are compared with [`levenshtein`] divided by
/// the longer token's length. Tail tokens of the longer gene are compared
/// with the empty string, so each non-empty tail token costs a full 1.0.
/// The sum is divided by the longer gene's length, which keeps the result
/// in [0,1]; the matrix engine does not normalize it again.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistance;

impl<E> DissimilarityMetric<E> for EditDistance
where
    E: AsRef<str> + Send + Sync,
{
    fn kind(&self) -> MetricKind {
        MetricKind::EditDistance
    }

    fn distance(&self, a: &FeatureVector<E>, b: &FeatureVector<E>) -> Result<f32, MetricError> {
        let longest = a.len().max(b.len());
        if longest == 0 {
            return Ok(0.0);
        }

        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

        let mut total = 0.0f64;
        for (x, y) in short.values.iter().zip(&long.values) {
            total += normalized_levenshtein(x.as_ref(), y.as_ref());
        }
        for t in &long.values[short.len()..] {
            total += normalized_levenshtein("", t.as_ref());
        }

        Ok((total / longest as f64) as f32)
    }
}

/// Levenshtein distance divided by the longer string's length (in chars).
/// Two empty strings are identical.
fn normalized_levenshtein(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / longest as f64
}

/// Classic insert/delete/substitute edit distance, counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows of the (|a|+1)×(|b|+1) table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
