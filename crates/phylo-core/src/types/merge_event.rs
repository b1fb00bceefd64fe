use serde::{Deserialize, Serialize};

use super::ClusterLabel;

/// One agglomeration step: `first` and `second` joined at `distance`.
///
/// The ordered list of events is the whole dendrogram. A side labelled
/// `Internal(id)` refers to the cluster created by event `id - N`; the last
/// event is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeEvent {
    pub first: ClusterLabel,
    pub second: ClusterLabel,
    pub distance: f32,
}

impl MergeEvent {
    pub fn new(first: ClusterLabel, second: ClusterLabel, distance: f32) -> Self {
        Self {
            first,
            second,
            distance,
        }
    }
}
