// src/config.rs

use crate::error::{ApeError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Default |APE - 1| window for an "efficiently packed" cluster
pub const DEFAULT_PACKING_THRESHOLD: f64 = 0.01;
/// Default elemental property holding atomic radii
pub const DEFAULT_RADIUS_PROPERTY: &str = "MiracleRadius";

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApeConfig {
    /// Maximum |APE - 1| for a cluster to count as efficiently packed
    #[serde(default = "default_packing_threshold")]
    pub packing_threshold: f64,

    /// Numbers of nearest efficient clusters to average over, ascending
    #[serde(default = "default_neighbor_counts")]
    pub neighbor_counts: BTreeSet<usize>,

    /// Name of the elemental property used as atomic radius
    #[serde(default = "default_radius_property")]
    pub radius_property: String,
}

fn default_packing_threshold() -> f64 {
    DEFAULT_PACKING_THRESHOLD
}

fn default_neighbor_counts() -> BTreeSet<usize> {
    BTreeSet::from([1, 3, 5])
}

fn default_radius_property() -> String {
    DEFAULT_RADIUS_PROPERTY.to_string()
}

impl Default for ApeConfig {
    fn default() -> Self {
        Self {
            packing_threshold: default_packing_threshold(),
            neighbor_counts: default_neighbor_counts(),
            radius_property: default_radius_property(),
        }
    }
}

impl ApeConfig {
    pub fn with_packing_threshold(mut self, threshold: f64) -> Self {
        self.packing_threshold = threshold;
        self
    }

    pub fn with_neighbor_counts<I: IntoIterator<Item = usize>>(mut self, counts: I) -> Self {
        self.neighbor_counts = counts.into_iter().collect();
        self
    }

    pub fn with_radius_property(mut self, property: impl Into<String>) -> Self {
        self.radius_property = property.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.packing_threshold.is_finite() || self.packing_threshold <= 0.0 {
            return Err(ApeError::Configuration(format!(
                "Packing threshold must be positive, got {}",
                self.packing_threshold
            )));
        }
        if self.packing_threshold >= 1.0 {
            log::warn!(
                "Packing threshold {} >= 1: every cluster size will qualify",
                self.packing_threshold
            );
        }
        if self.neighbor_counts.is_empty() {
            return Err(ApeError::Configuration(
                "At least one neighbor count is required".into(),
            ));
        }
        if self.neighbor_counts.contains(&0) {
            return Err(ApeError::Configuration(
                "Neighbor counts must be positive".into(),
            ));
        }
        if self.radius_property.trim().is_empty() {
            return Err(ApeError::Configuration(
                "Radius property name is empty".into(),
            ));
        }
        Ok(())
    }

    /// Loads and validates a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let cfg: Self = serde_json::from_reader(BufReader::new(file))?;
        cfg.validate()?;
        log::info!("Config loaded from {:?}", path.as_ref());
        Ok(cfg)
    }

    /// Loads config from standard OS location (e.g., ~/.config/ape-features/settings.json),
    /// falling back to defaults when no file exists
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            log::debug!("No config found at {:?}. Using defaults.", path);
            Ok(Self::default())
        }
    }

    /// Saves config as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("org", "ape-features", "ape-features") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}
