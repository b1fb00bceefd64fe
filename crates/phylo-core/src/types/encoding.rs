//! A population of genes ready for the matrix engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{filter_population, ClusterLabel, FeatureVector};
use crate::config::DataAnalysisConfig;
use crate::errors::EncodingError;

/// All genes of one run plus the header layout they were encoded with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticEncoding<E> {
    pub headers: Vec<String>,
    pub genes: Vec<FeatureVector<E>>,
    /// True when every gene shares `headers` and has the same length.
    pub aligned: bool,
}

impl<E: Clone> GeneticEncoding<E> {
    /// Re-lay every gene onto the union of all headers.
    ///
    /// Headers keep first-seen order. A gene missing a header gets `default`
    /// in that slot. Genes with no headers contribute nothing to the union
    /// and come out filled with `default`. A gene with headers must carry
    /// exactly one value per header.
    pub fn aligned(vectors: Vec<FeatureVector<E>>, default: E) -> Result<Self, EncodingError> {
        Self::aligned_with(vectors, default, &DataAnalysisConfig::default())
    }

    /// [`aligned`](Self::aligned), after dropping genes rejected by
    /// `analysis`. The header union is built from the surviving genes only.
    pub fn aligned_with(
        vectors: Vec<FeatureVector<E>>,
        default: E,
        analysis: &DataAnalysisConfig,
    ) -> Result<Self, EncodingError> {
        if let Some(bad) = vectors
            .iter()
            .find(|v| !v.headers.is_empty() && v.headers.len() != v.values.len())
        {
            return Err(EncodingError::HeaderValueMismatch {
                gene: bad.name.clone(),
                headers: bad.headers.len(),
                values: bad.values.len(),
            });
        }

        let vectors = filter_population(vectors, analysis);

        let mut headers: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for vector in vectors.iter().filter(|v| !v.headers.is_empty()) {
            for header in &vector.headers {
                if !index.contains_key(header) {
                    index.insert(header.clone(), headers.len());
                    headers.push(header.clone());
                }
            }
        }

        let genes = vectors
            .into_iter()
            .map(|vector| {
                let mut values = vec![default.clone(); headers.len()];
                for (header, value) in vector.headers.iter().zip(vector.values) {
                    if let Some(&slot) = index.get(header) {
                        values[slot] = value;
                    }
                }
                FeatureVector::with_headers(vector.name, headers.clone(), values)
            })
            .collect();

        Ok(Self {
            headers,
            genes,
            aligned: true,
        })
    }
}

impl<E> GeneticEncoding<E> {
    /// Keep every gene as-is, dropping genes without values.
    ///
    /// `headers` becomes the positional labels `"1"..="max"` where `max` is
    /// the longest gene.
    pub fn non_aligned(vectors: Vec<FeatureVector<E>>) -> Self {
        let genes: Vec<FeatureVector<E>> = vectors.into_iter().filter(|v| !v.is_empty()).collect();
        let longest = genes.iter().map(FeatureVector::len).max().unwrap_or(0);
        let headers = (1..=longest).map(|i| i.to_string()).collect();

        Self {
            headers,
            genes,
            aligned: false,
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene names in matrix order.
    pub fn names(&self) -> Vec<String> {
        self.genes.iter().map(|g| g.name.clone()).collect()
    }

    /// Leaf labels in matrix order, ready for the pairing engine.
    pub fn labels(&self) -> Vec<ClusterLabel> {
        self.genes.iter().map(|g| ClusterLabel::leaf(g.name.clone())).collect()
    }
}
