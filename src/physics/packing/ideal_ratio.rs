// src/physics/packing/ideal_ratio.rs

/// Smallest coordination number with a tabulated ideal radius ratio
pub const MIN_CLUSTER_SIZE: usize = 3;
/// Largest coordination number with a tabulated ideal radius ratio
pub const MAX_CLUSTER_SIZE: usize = 24;

/// Ideal center/shell radius ratio for z = 3..=24 neighbours.
///
/// **Reference**: Miracle et al. (2006) Mater. Trans. 47, 1737
const IDEAL_RADIUS_RATIOS: [f64; MAX_CLUSTER_SIZE - MIN_CLUSTER_SIZE + 1] = [
    0.154701, // 3
    0.224745, // 4
    0.361654, // 5
    0.414213, // 6
    0.518145, // 7
    0.616517, // 8
    0.709914, // 9
    0.798907, // 10
    0.884003, // 11
    0.902113, // 12 (icosahedron)
    0.976006, // 13
    1.04733,  // 14
    1.11632,  // 15
    1.18318,  // 16
    1.24810,  // 17
    1.31123,  // 18
    1.37271,  // 19
    1.43267,  // 20
    1.49119,  // 21
    1.54840,  // 22
    1.60436,  // 23
    1.65915,  // 24
];

/// Ideal radius ratio for a cluster with `neighbors` atoms in the first shell.
///
/// Sizes below 3 return the z = 3 value and sizes above 24 the z = 24 value.
pub fn ideal_radius_ratio(neighbors: usize) -> f64 {
    let z = neighbors.clamp(MIN_CLUSTER_SIZE, MAX_CLUSTER_SIZE);
    IDEAL_RADIUS_RATIOS[z - MIN_CLUSTER_SIZE]
}
