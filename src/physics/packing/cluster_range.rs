// src/physics/packing/cluster_range.rs

use super::calculator::compute_ape;
use super::ideal_ratio::{MAX_CLUSTER_SIZE, MIN_CLUSTER_SIZE};
use crate::error::{ApeError, Result, SearchBound};
use std::ops::Range;

/// Bounds on the shell size of efficiently packed clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterRange {
    /// Smallest shell size worth enumerating
    pub min: usize,
    /// Largest shell size (exclusive when enumerating)
    pub max: usize,
}

impl ClusterRange {
    /// Shell sizes to enumerate, `min..max`
    pub fn sizes(&self) -> Range<usize> {
        self.min..self.max
    }

    pub fn contains(&self, size: usize) -> bool {
        self.sizes().contains(&size)
    }
}

/// Determine the smallest and largest cluster sizes that can reach the
/// packing threshold for a set of radii.
///
/// The smallest cluster puts the smallest atom in the center with a shell of
/// only the largest atom; the largest cluster is the reverse. Both searches
/// rely on APE increasing with z for a fixed radius pair.
///
/// # Errors
/// - `SearchBoundsExceeded` if a search leaves [3, 24] or if the smallest
///   cluster ends up larger than the largest
/// - `Configuration` for an empty radius list
pub fn cluster_range(radii: &[f64], threshold: f64) -> Result<ClusterRange> {
    if radii.is_empty() {
        return Err(ApeError::Configuration(
            "Cluster range requested for an empty set of radii".into(),
        ));
    }

    let smallest = radii.iter().copied().fold(f64::INFINITY, f64::min);
    let largest = radii.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // --- Smallest cluster: small center, shell of the largest atom ---
    let mut min = MIN_CLUSTER_SIZE;
    while compute_ape(min, smallest, largest) < 1.0 - threshold {
        min += 1;
        if min > MAX_CLUSTER_SIZE {
            return Err(ApeError::SearchBoundsExceeded {
                search: SearchBound::Minimum,
                threshold,
            });
        }
    }

    // --- Largest cluster: large center, shell of the smallest atom ---
    let mut max = MAX_CLUSTER_SIZE;
    while compute_ape(max, largest, smallest) > 1.0 + threshold {
        max -= 1;
        if max < MIN_CLUSTER_SIZE {
            return Err(ApeError::SearchBoundsExceeded {
                search: SearchBound::Maximum,
                threshold,
            });
        }
    }

    if min > max {
        return Err(ApeError::SearchBoundsExceeded {
            search: SearchBound::Crossed { min, max },
            threshold,
        });
    }

    Ok(ClusterRange { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_range() {
        let range = cluster_range(&[1.0, 1.34], 0.05).unwrap();
        assert_eq!(range, ClusterRange { min: 9, max: 19 });
        assert!(range.contains(9));
        assert!(!range.contains(19));

        // Order of the radii does not matter
        assert_eq!(cluster_range(&[1.34, 1.0], 0.05).unwrap(), range);
    }

    #[test]
    fn test_range_within_bounds() {
        let cases: [&[f64]; 4] = [
            &[1.26, 1.58],
            &[1.0, 0.902113],
            &[1.0, 0.902113, 1.1, 1.2, 0.7],
            &[1.4, 1.6, 1.25],
        ];
        for radii in cases {
            let range = cluster_range(radii, 0.01).unwrap();
            assert!(range.min <= range.max);
            assert!(range.min >= MIN_CLUSTER_SIZE && range.max <= MAX_CLUSTER_SIZE);
        }
        assert_eq!(
            cluster_range(&[1.0, 0.902113, 1.1, 1.2, 0.7], 0.01).unwrap(),
            ClusterRange { min: 8, max: 24 }
        );

        let table: [(&[f64], f64, usize, usize); 9] = [
            (&[1.0, 1.0], 0.03, 13, 13),
            (&[1.0, 1.0], 0.05, 13, 14),
            (&[1.0, 1.0], 0.1, 12, 14),
            (&[1.0, 1.2], 0.03, 11, 16),
            (&[1.0, 1.2], 0.05, 10, 17),
            (&[1.0, 1.2], 0.1, 10, 18),
            (&[1.4, 1.0, 1.2], 0.03, 9, 20),
            (&[1.4, 1.0, 1.2], 0.05, 9, 20),
            (&[1.4, 1.0, 1.2], 0.1, 9, 21),
        ];
        for (radii, threshold, min, max) in table {
            assert_eq!(
                cluster_range(radii, threshold).unwrap(),
                ClusterRange { min, max },
                "radii {:?} at threshold {}",
                radii,
                threshold
            );
        }
    }

    #[test]
    fn test_degenerate_radii_exceed_bounds() {
        let err = cluster_range(&[1.0, 1.0], 1e-9).unwrap_err();
        assert!(err.is_search_bounds());
        assert_eq!(
            err,
            ApeError::SearchBoundsExceeded {
                search: SearchBound::Crossed { min: 14, max: 13 },
                threshold: 1e-9,
            }
        );
    }

    #[test]
    fn test_similar_radii_tight_threshold() {
        let err = cluster_range(&[1.26, 1.24], 0.001).unwrap_err();
        assert!(err.is_search_bounds());

        // Touching bounds are allowed, leaving nothing to enumerate
        let range = cluster_range(&[1.26, 1.24], 0.01).unwrap();
        assert_eq!(range, ClusterRange { min: 13, max: 13 });
        assert_eq!(range.sizes().count(), 0);
    }

    #[test]
    fn test_loose_threshold_spans_window() {
        let range = cluster_range(&[1.0, 1.34], 0.9).unwrap();
        assert_eq!(range, ClusterRange { min: MIN_CLUSTER_SIZE, max: MAX_CLUSTER_SIZE });
    }

    #[test]
    fn test_empty_radii() {
        assert!(cluster_range(&[], 0.01).unwrap_err().is_configuration());
    }
}
