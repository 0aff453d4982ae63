// src/physics/packing/optimal.rs

use super::calculator::{compute_ape, packing_deviation};
use super::ideal_ratio::{MAX_CLUSTER_SIZE, MIN_CLUSTER_SIZE};
use crate::error::Result;
use crate::model::{Composition, RadiusTable};

/// Shell size giving the APE closest to 1, and that APE.
///
/// Scans every z in 3..=24; on ties the smaller shell wins.
pub fn optimal_cluster(center_radius: f64, shell_radius: f64) -> (usize, f64) {
    let mut best = (MIN_CLUSTER_SIZE, compute_ape(MIN_CLUSTER_SIZE, center_radius, shell_radius));

    for size in MIN_CLUSTER_SIZE + 1..=MAX_CLUSTER_SIZE {
        let ape = compute_ape(size, center_radius, shell_radius);
        if packing_deviation(ape) < packing_deviation(best.1) {
            best = (size, ape);
        }
    }

    best
}

/// Best achievable APE for an atom of `center` type surrounded by a shell
/// with composition `shell`.
///
/// Shell sites may be partially occupied, so the shell radius is simply the
/// composition-weighted mean radius. Normally `shell` is the alloy itself.
pub fn determine_optimal_ape(center: usize, shell: &Composition, radii: &RadiusTable) -> Result<f64> {
    let center_radius = radii.radius(center)?;
    let shell_radius = shell.weighted_mean(&radii.radii_for(shell.elements())?);

    Ok(optimal_cluster(center_radius, shell_radius).1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn miracle_radii() -> RadiusTable {
        RadiusTable::from_symbols(&[("Cu", 1.26), ("Zr", 1.58)]).unwrap()
    }

    #[test]
    fn test_pure_copper() {
        let cu = Composition::from_formula("Cu").unwrap();
        let ape = determine_optimal_ape(28, &cu, &miracle_radii()).unwrap();
        assert!((ape - 0.976006).abs() < 1e-6);
        assert_eq!(optimal_cluster(1.26, 1.26).0, 13);
    }

    #[test]
    fn test_copper_in_cuzr() {
        let alloy = Composition::from_formula("Cu64.3Zr35.7").unwrap();
        let ape = determine_optimal_ape(28, &alloy, &miracle_radii()).unwrap();
        assert!((ape - 0.902113 / 0.916870416).abs() < 1e-6);
    }

    #[test]
    fn test_matches_exhaustive_minimum() {
        for &(center, shell) in &[(1.0, 1.0), (0.7, 1.3), (1.6, 1.1), (1.26, 1.37424), (3.0, 0.5)] {
            let (_, best) = optimal_cluster(center, shell);
            let min_dev = (MIN_CLUSTER_SIZE..=MAX_CLUSTER_SIZE)
                .map(|z| (compute_ape(z, center, shell) - 1.0).abs())
                .fold(f64::INFINITY, f64::min);
            assert_eq!((best - 1.0).abs(), min_dev);
        }
    }

    #[test]
    fn test_missing_radius() {
        let ni = Composition::from_formula("Ni").unwrap();
        assert!(determine_optimal_ape(27, &ni, &miracle_radii())
            .unwrap_err()
            .is_configuration());
    }
}
