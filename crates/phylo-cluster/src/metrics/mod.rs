//! Dissimilarity metrics: Euclidean (numeric genes) and token-wise edit
//! distance (symbolic genes).

pub mod edit_distance;
pub mod euclidean;

pub use edit_distance::{levenshtein, EditDistance};
pub use euclidean::Euclidean;
