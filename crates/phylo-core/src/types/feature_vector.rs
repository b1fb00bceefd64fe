use serde::{Deserialize, Serialize};

/// One gene: the feature vector summarizing a single input artifact.
///
/// `headers` optionally labels each dimension. Under an aligned encoding
/// every vector shares the same headers and length; under a non-aligned
/// encoding each vector keeps its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector<E> {
    pub name: String,
    pub values: Vec<E>,
    #[serde(default)]
    pub headers: Vec<String>,
}

impl<E> FeatureVector<E> {
    /// A vector without dimension labels.
    pub fn new(name: impl Into<String>, values: Vec<E>) -> Self {
        Self {
            name: name.into(),
            values,
            headers: Vec::new(),
        }
    }

    /// A vector whose `i`-th value is labelled by `headers[i]`.
    pub fn with_headers(name: impl Into<String>, headers: Vec<String>, values: Vec<E>) -> Self {
        Self {
            name: name.into(),
            values,
            headers,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
