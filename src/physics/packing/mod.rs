// src/physics/packing/mod.rs

pub mod ideal_ratio;
pub mod calculator;
pub mod shells;
pub mod cluster_range;
pub mod clusters;
pub mod optimal;

// Re-export commonly used items
pub use ideal_ratio::{ideal_radius_ratio, MAX_CLUSTER_SIZE, MIN_CLUSTER_SIZE};
pub use calculator::{compute_ape, compute_shell_ape, packing_deviation};
pub use shells::{count_shell_compositions, shell_compositions, ShellComposition, ShellCompositions};
pub use cluster_range::{cluster_range, ClusterRange};
pub use clusters::{cluster_compositions, find_efficient_clusters, UNARY_SCREENING_THRESHOLD};
pub use optimal::{determine_optimal_ape, optimal_cluster};
