//! Hierarchical pairing: greedy average-linkage (UPGMA) agglomeration.

pub mod arena;
pub mod average_linkage;

pub use arena::{PairingArena, Slot};
pub use average_linkage::AverageLinkage;
