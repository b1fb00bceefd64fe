//! In-memory tree rebuilt from an ordered merge-event list.

use std::collections::HashMap;

use phylo_core::errors::PairingError;
use phylo_core::types::{ClusterLabel, MergeEvent};

/// A node of the binary merge hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum DendrogramNode {
    Leaf {
        name: String,
    },
    Internal {
        id: usize,
        distance: f32,
        left: Box<DendrogramNode>,
        right: Box<DendrogramNode>,
    },
}

impl DendrogramNode {
    /// Merge distance for internal nodes, 0 for leaves.
    pub fn distance(&self) -> f32 {
        match self {
            Self::Leaf { .. } => 0.0,
            Self::Internal { distance, .. } => *distance,
        }
    }

    /// Leaf names, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Leaf { name } => out.push(name.as_str()),
                Self::Internal { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }
        out
    }
}

/// The tree described by a pairing run.
///
/// Event `i` creates internal node `i + leaf_count`; a later event side
/// labelled with that id is resolved to the node, every other side is a
/// leaf. The last event is the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Dendrogram {
    leaf_count: usize,
    root: Option<DendrogramNode>,
}

impl Dendrogram {
    pub fn from_events(leaf_count: usize, events: &[MergeEvent]) -> Result<Self, PairingError> {
        let mut pending: HashMap<usize, DendrogramNode> = HashMap::with_capacity(events.len());

        for (step, event) in events.iter().enumerate() {
            let left = resolve(&mut pending, &event.first, step)?;
            let right = resolve(&mut pending, &event.second, step)?;
            let id = leaf_count + step;
            pending.insert(
                id,
                DendrogramNode::Internal {
                    id,
                    distance: event.distance,
                    left: Box::new(left),
                    right: Box::new(right),
                },
            );
        }

        if pending.len() > 1 {
            return Err(PairingError::IncompleteTree {
                roots: pending.len(),
            });
        }

        Ok(Self {
            leaf_count,
            root: pending.into_values().next(),
        })
    }

    pub fn root(&self) -> Option<&DendrogramNode> {
        self.root.as_ref()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Leaf names in dendrogram order; empty when there were no merges.
    pub fn leaves(&self) -> Vec<&str> {
        self.root.as_ref().map(DendrogramNode::leaves).unwrap_or_default()
    }

    /// Distance at which the root was formed.
    pub fn height(&self) -> f32 {
        self.root.as_ref().map_or(0.0, DendrogramNode::distance)
    }
}

fn resolve(
    pending: &mut HashMap<usize, DendrogramNode>,
    label: &ClusterLabel,
    step: usize,
) -> Result<DendrogramNode, PairingError> {
    match label {
        ClusterLabel::Leaf(name) => Ok(DendrogramNode::Leaf { name: name.clone() }),
        ClusterLabel::Internal(id) => pending
            .remove(id)
            .ok_or(PairingError::UnknownCluster { event: step, id: *id }),
    }
}
