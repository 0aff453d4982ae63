// src/physics/packing/clusters.rs

use super::calculator::{compute_ape, compute_shell_ape, packing_deviation};
use super::cluster_range::cluster_range;
use super::ideal_ratio::{MAX_CLUSTER_SIZE, MIN_CLUSTER_SIZE};
use super::shells::{shell_compositions, ShellComposition};
use crate::error::{ApeError, Result};
use crate::model::Composition;

/// Fixed |APE - 1| window used to screen single-element clusters.
/// Independent of the caller's packing threshold.
pub const UNARY_SCREENING_THRESHOLD: f64 = 0.05;

/// Find every efficiently packed cluster for a set of radii.
///
/// Returns one list per central atom type: `result[c]` holds the shell
/// compositions with an atom of type `c` in the center and
/// |APE - 1| < `threshold`.
///
/// A single element is scanned directly over z = 3..=24 against
/// [`UNARY_SCREENING_THRESHOLD`]. Otherwise shell sizes come from
/// [`cluster_range`] and every shell of each size is enumerated.
pub fn find_efficient_clusters(radii: &[f64], threshold: f64) -> Result<Vec<Vec<ShellComposition>>> {
    match radii.len() {
        0 => Err(ApeError::Configuration(
            "Cannot search clusters for an empty set of radii".into(),
        )),
        1 => Ok(vec![unary_clusters()]),
        types => {
            let range = cluster_range(radii, threshold)?;

            let clusters: Vec<Vec<ShellComposition>> = (0..types)
                .map(|center| {
                    range
                        .sizes()
                        .flat_map(|size| shell_compositions(size, types))
                        .filter(|shell| {
                            packing_deviation(compute_shell_ape(radii, center, shell)) < threshold
                        })
                        .collect()
                })
                .collect();

            log::debug!(
                "Cluster search over {} types, z in [{}, {}): {} efficient clusters",
                types,
                range.min,
                range.max,
                clusters.iter().map(Vec::len).sum::<usize>()
            );

            Ok(clusters)
        }
    }
}

/// Homogeneous shells: only the shell size matters.
fn unary_clusters() -> Vec<ShellComposition> {
    (MIN_CLUSTER_SIZE..=MAX_CLUSTER_SIZE)
        .filter(|&size| packing_deviation(compute_ape(size, 1.0, 1.0)) < UNARY_SCREENING_THRESHOLD)
        .map(|size| vec![size])
        .collect()
}

/// Compositions of whole clusters (shell plus central atom).
///
/// `clusters[c]` lists shells around an atom of type `c`, as returned by
/// [`find_efficient_clusters`]; `elements[i]` is the element ID of type `i`.
pub fn cluster_compositions(
    elements: &[usize],
    clusters: &[Vec<ShellComposition>],
) -> Result<Vec<Composition>> {
    let mut output = Vec::with_capacity(clusters.iter().map(Vec::len).sum());
    let mut amounts = vec![0.0; elements.len()];

    for (center, shells) in clusters.iter().enumerate() {
        if center >= elements.len() {
            return Err(ApeError::Configuration(format!(
                "Cluster list has {} central types but only {} elements",
                clusters.len(),
                elements.len()
            )));
        }

        for shell in shells {
            for (i, amount) in amounts.iter_mut().enumerate() {
                *amount = shell.get(i).copied().unwrap_or(0) as f64;
            }
            amounts[center] += 1.0;

            output.push(Composition::new(elements, &amounts)?);
        }
    }

    Ok(output)
}
