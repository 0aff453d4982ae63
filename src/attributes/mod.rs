// src/attributes/mod.rs

pub mod assembler;
pub mod cache;

pub use assembler::{AttributeAssembler, AttributeSet, CompositionEntry, NO_CLUSTERS_DISTANCE};
pub use cache::{ClusterCache, EfficientClusterSet};
