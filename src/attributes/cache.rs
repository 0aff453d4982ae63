// src/attributes/cache.rs

use crate::error::Result;
use crate::model::{Composition, RadiusTable};
use crate::physics::packing::{cluster_compositions, find_efficient_clusters, ShellComposition};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Efficiently packed clusters for one element set.
#[derive(Debug, Clone, PartialEq)]
pub struct EfficientClusterSet {
    elements: Vec<usize>,
    shells: Vec<Vec<ShellComposition>>,
    compositions: Vec<Composition>,
}

impl EfficientClusterSet {
    /// Search clusters for the sorted element IDs in `elements`.
    pub fn build(elements: &[usize], radii: &RadiusTable, threshold: f64) -> Result<Self> {
        let element_radii = radii.radii_for(elements)?;
        let shells = find_efficient_clusters(&element_radii, threshold)?;
        let compositions = cluster_compositions(elements, &shells)?;

        Ok(Self {
            elements: elements.to_vec(),
            shells,
            compositions,
        })
    }

    pub fn elements(&self) -> &[usize] {
        &self.elements
    }

    /// Shells per central type, aligned with [`EfficientClusterSet::elements`]
    pub fn shells(&self) -> &[Vec<ShellComposition>] {
        &self.shells
    }

    /// Whole-cluster compositions, shell plus central atom
    pub fn compositions(&self) -> &[Composition] {
        &self.compositions
    }

    pub fn len(&self) -> usize {
        self.compositions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }
}

/// Memoized cluster sets keyed by sorted element-ID tuple.
///
/// Lookups do not depend on the order entries arrive in. One cache belongs
/// to one batch (or one shard of a batch); nothing is shared between them.
#[derive(Debug, Default)]
pub struct ClusterCache {
    sets: HashMap<Vec<usize>, EfficientClusterSet>,
}

impl ClusterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(
        &mut self,
        elements: &[usize],
        radii: &RadiusTable,
        threshold: f64,
    ) -> Result<&EfficientClusterSet> {
        match self.sets.entry(elements.to_vec()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let set = EfficientClusterSet::build(elements, radii, threshold)?;
                log::debug!(
                    "Built {} efficient clusters for element set {:?}",
                    set.len(),
                    elements
                );
                Ok(entry.insert(set))
            }
        }
    }

    pub fn contains(&self, elements: &[usize]) -> bool {
        self.sets.contains_key(elements)
    }

    /// Number of element sets searched so far
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radii() -> RadiusTable {
        RadiusTable::from_symbols(&[("Cu", 1.26), ("Zr", 1.58), ("Al", 1.42)]).unwrap()
    }

    #[test]
    fn test_cluster_set_contents() {
        let set = EfficientClusterSet::build(&[28, 39], &radii(), 0.01).unwrap();
        assert_eq!(set.elements(), &[28, 39]);
        assert_eq!(set.shells().len(), 2);
        assert_eq!(set.len(), 7);
        assert!(set
            .compositions()
            .iter()
            .all(|c| c.elements().iter().all(|e| [28, 39].contains(e))));
    }

    #[test]
    fn test_cache_reuses_sets_regardless_of_order() {
        let table = radii();
        let mut cache = ClusterCache::new();

        cache.get_or_build(&[28, 39], &table, 0.01).unwrap();
        cache.get_or_build(&[12], &table, 0.01).unwrap();
        cache.get_or_build(&[28, 39], &table, 0.01).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&[12]));
        assert!(!cache.contains(&[12, 28]));
    }

    #[test]
    fn test_missing_radius_not_cached() {
        let mut cache = ClusterCache::new();
        let err = cache.get_or_build(&[28, 40], &radii(), 0.01).unwrap_err();
        assert!(err.is_configuration());
        assert!(cache.is_empty());
    }
}
