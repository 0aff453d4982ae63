// src/physics/packing/calculator.rs

use super::ideal_ratio::ideal_radius_ratio;

/// Atomic Packing Efficiency of a cluster
///
/// **Formula**: APE = R_ideal(z) / (r_center / r_shell)
///
/// Where:
/// - z = number of atoms in the first neighbour shell
/// - r_center = radius of the central atom
/// - r_shell = effective radius of the shell, usually its mean radius
///
/// APE = 1 is ideal packing; values below 1 are overpacked.
///
/// **Reference**: Laws et al. (2015) Nat. Commun. 6, 8123
pub fn compute_ape(neighbors: usize, center_radius: f64, shell_radius: f64) -> f64 {
    let actual_ratio = center_radius / shell_radius;
    ideal_radius_ratio(neighbors) / actual_ratio
}

/// APE of a cluster given per-type radii and the shell occupancy.
///
/// `shell[i]` is the number of shell atoms of type `i`; `shell` and `radii`
/// must have the same length and `center_type` must index into `radii`.
pub fn compute_shell_ape(radii: &[f64], center_type: usize, shell: &[usize]) -> f64 {
    let neighbors: usize = shell.iter().sum();
    let shell_radius = shell
        .iter()
        .zip(radii)
        .map(|(&count, &r)| count as f64 * r)
        .sum::<f64>()
        / neighbors as f64;

    compute_ape(neighbors, radii[center_type], shell_radius)
}

/// Distance from ideal packing, |APE - 1|
pub fn packing_deviation(ape: f64) -> f64 {
    (ape - 1.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_icosahedron() {
        assert!((compute_ape(12, 0.902113, 1.0) - 1.0).abs() < 1e-6);
        assert!((compute_shell_ape(&[0.902113, 1.0], 0, &[0, 12]) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_overpacked_below_one() {
        // Swapping a shell atom for a smaller one overpacks the cluster
        assert!(compute_shell_ape(&[0.902113, 1.0], 0, &[1, 11]) < 1.0);
    }

    #[test]
    fn test_ratio_round_trip() {
        for z in 0..30 {
            for &(r1, r2) in &[(1.0, 1.0), (1.26, 1.58), (0.7, 1.2), (2.1, 0.9)] {
                let ape = compute_ape(z, r1, r2);
                assert!((ape * (r1 / r2) - ideal_radius_ratio(z)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_shell_form_uses_mean_radius() {
        let radii = [1.0, 1.2, 1.5];
        let shell = [2, 3, 5];
        let mean = (2.0 * 1.0 + 3.0 * 1.2 + 5.0 * 1.5) / 10.0;
        let expected = compute_ape(10, 1.2, mean);
        assert!((compute_shell_ape(&radii, 1, &shell) - expected).abs() < 1e-12);
        assert!((packing_deviation(0.97) - 0.03).abs() < 1e-12);
    }
}
