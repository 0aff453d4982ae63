// src/attributes/assembler.rs

use super::cache::{ClusterCache, EfficientClusterSet};
use crate::config::ApeConfig;
use crate::error::{ApeError, Result};
use crate::model::{Composition, PropertyTable, RadiusTable};
use crate::physics::packing::determine_optimal_ape;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Value reported for every nearest-cluster attribute when an element set
/// has no efficiently packed clusters at all.
pub const NO_CLUSTERS_DISTANCE: f64 = 1000.0;

/// Anything that can hand the assembler a nominal composition.
pub trait CompositionEntry {
    fn composition(&self) -> Option<&Composition>;
}

impl CompositionEntry for Composition {
    fn composition(&self) -> Option<&Composition> {
        Some(self)
    }
}

impl CompositionEntry for Option<Composition> {
    fn composition(&self) -> Option<&Composition> {
        self.as_ref()
    }
}

/// Attribute table: one row per entry, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSet {
    pub names: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl AttributeSet {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn row(&self, entry: usize) -> Option<&[f64]> {
        self.values.get(entry).map(Vec::as_slice)
    }

    /// All values of one named attribute. `None` if the name is unknown or
    /// any row is too short to hold it.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.names.iter().position(|n| n == name)?;
        self.values.iter().map(|row| row.get(idx).copied()).collect()
    }
}

/// Computes APE attributes for batches of compositions.
///
/// Per entry the attributes are, in order:
/// 1. Mean distance to the `n` nearest efficiently packed clusters, for each
///    configured neighbour count `n` (ascending)
/// 2. Composition-weighted mean of the optimal APE around each element,
///    taking the alloy composition as the shell composition
/// 3. Composition-weighted mean of |1 - APE| for the same clusters
///
/// **Reference**: Laws et al. (2015) Nat. Commun. 6, 8123
#[derive(Debug, Clone)]
pub struct AttributeAssembler {
    config: ApeConfig,
    radii: RadiusTable,
}

impl AttributeAssembler {
    pub fn new(config: ApeConfig, radii: RadiusTable) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, radii })
    }

    /// Resolve the configured radius property from an elemental property table.
    pub fn from_properties(config: ApeConfig, properties: &PropertyTable) -> Result<Self> {
        config.validate()?;
        let radii = properties.radius_table(&config.radius_property)?;
        Self::new(config, radii)
    }

    pub fn config(&self) -> &ApeConfig {
        &self.config
    }

    pub fn radii(&self) -> &RadiusTable {
        &self.radii
    }

    pub fn attribute_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .config
            .neighbor_counts
            .iter()
            .map(|n| format!("APE_Nearest{}_Below{:.6}", n, self.config.packing_threshold))
            .collect();
        names.push("APE_SystemAverage".to_string());
        names.push("APE_SystemAverageDeviation".to_string());
        names
    }

    pub fn description(&self) -> String {
        let counts: Vec<String> = self.config.neighbor_counts.iter().map(|n| n.to_string()).collect();
        let clusters = match counts.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
            Some((last, _)) => last.clone(),
            None => String::new(),
        };

        format!(
            "({}) Attributes based on the estimated packing efficiency of individual atomic \
             clusters using the Atomic Packing Efficiency approach of Laws et al. Includes the \
             estimated average packing efficiency and deviation from perfect packing of each atom, \
             assuming that the nearest neighbor shell composition is equal to the alloy \
             composition. Additionally, the distance to the {} nearest clusters with a packing \
             efficiency within 1 +/- {}.",
            self.config.neighbor_counts.len() + 2,
            clusters,
            self.config.packing_threshold
        )
    }

    /// Compute attributes for every entry, single-threaded.
    ///
    /// # Errors
    /// Any failure aborts the whole batch; there are no partial results.
    pub fn compute<E: CompositionEntry>(&self, entries: &[E]) -> Result<AttributeSet> {
        let compositions = self.prepare(entries)?;

        let mut cache = ClusterCache::new();
        let values = compositions
            .iter()
            .map(|comp| self.compute_entry(comp, &mut cache))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Computed APE attributes for {} entries over {} element sets",
            values.len(),
            cache.len()
        );

        Ok(AttributeSet {
            names: self.attribute_names(),
            values,
        })
    }

    /// Same output as [`AttributeAssembler::compute`], with entries sharded
    /// by element set across the rayon pool. Each shard keeps its own cache.
    pub fn compute_parallel<E: CompositionEntry + Sync>(&self, entries: &[E]) -> Result<AttributeSet> {
        let compositions = self.prepare(entries)?;

        let mut shards: BTreeMap<&[usize], Vec<usize>> = BTreeMap::new();
        for (idx, comp) in compositions.iter().enumerate() {
            shards.entry(comp.element_set()).or_default().push(idx);
        }
        let shards: Vec<Vec<usize>> = shards.into_values().collect();

        let results: Vec<Vec<(usize, Vec<f64>)>> = shards
            .par_iter()
            .map(|indices| {
                let mut cache = ClusterCache::new();
                indices
                    .iter()
                    .map(|&idx| Ok((idx, self.compute_entry(compositions[idx], &mut cache)?)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let mut values = vec![Vec::new(); compositions.len()];
        for (idx, row) in results.into_iter().flatten() {
            values[idx] = row;
        }

        log::info!(
            "Computed APE attributes for {} entries in {} shards",
            values.len(),
            shards.len()
        );

        Ok(AttributeSet {
            names: self.attribute_names(),
            values,
        })
    }

    /// Attribute vector for a single composition.
    pub fn compute_entry(&self, composition: &Composition, cache: &mut ClusterCache) -> Result<Vec<f64>> {
        let clusters = cache.get_or_build(
            composition.element_set(),
            &self.radii,
            self.config.packing_threshold,
        )?;

        let distances = nearest_cluster_distances(composition, clusters);

        let mut attrs = Vec::with_capacity(self.config.neighbor_counts.len() + 2);
        for &n in &self.config.neighbor_counts {
            attrs.push(mean_nearest_distance(&distances, n));
        }

        let (mean_ape, mean_deviation) = self.system_packing(composition)?;
        attrs.push(mean_ape);
        attrs.push(mean_deviation);

        Ok(attrs)
    }

    /// Check every entry and every radius before any work starts.
    fn prepare<'a, E: CompositionEntry>(&self, entries: &'a [E]) -> Result<Vec<&'a Composition>> {
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let comp = entry.composition().ok_or_else(|| {
                    ApeError::UnsupportedInput(format!("Entry {} has no composition", idx))
                })?;
                self.radii.radii_for(comp.elements())?;
                Ok(comp)
            })
            .collect()
    }

    /// Weighted mean APE and mean |1 - APE| over the constituent elements,
    /// each in a shell with the alloy's own composition.
    fn system_packing(&self, composition: &Composition) -> Result<(f64, f64)> {
        let mut mean_ape = 0.0;
        let mut mean_deviation = 0.0;

        for (&elem, &frac) in composition.elements().iter().zip(composition.fractions()) {
            let ape = determine_optimal_ape(elem, composition, &self.radii)?;
            mean_ape += frac * ape;
            mean_deviation += frac * (1.0 - ape).abs();
        }

        Ok((mean_ape, mean_deviation))
    }
}

/// Distances from `composition` to every cluster in the set, ascending.
fn nearest_cluster_distances(composition: &Composition, clusters: &EfficientClusterSet) -> Vec<f64> {
    let mut distances: Vec<f64> = clusters
        .compositions()
        .iter()
        .map(|cluster| composition.distance(cluster))
        .collect();
    distances.sort_by(f64::total_cmp);
    distances
}

/// Mean of the nearest `min(n, len - 1)` distances, never fewer than one.
fn mean_nearest_distance(sorted: &[f64], n: usize) -> f64 {
    if sorted.is_empty() {
        return NO_CLUSTERS_DISTANCE;
    }
    let count = n.min(sorted.len() - 1).max(1);
    sorted[..count].iter().sum::<f64>() / count as f64
}
