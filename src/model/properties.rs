// src/model/properties.rs

use crate::error::{ApeError, Result};
use crate::model::elements::{element_id, element_symbol};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Elemental property lookup keyed by property name, then element symbol.
///
/// On disk this is a JSON object of objects:
/// `{ "MiracleRadius": { "Cu": 1.26, "Zr": 1.58 } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyTable {
    properties: BTreeMap<String, BTreeMap<String, f64>>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, property: &str, symbol: &str, value: f64) {
        self.properties
            .entry(property.to_string())
            .or_default()
            .insert(symbol.to_string(), value);
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let table: Self = serde_json::from_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded {} elemental properties from {:?}",
            table.properties.len(),
            path.as_ref()
        );
        Ok(table)
    }

    /// Resolve one property as a radius table.
    pub fn radius_table(&self, property: &str) -> Result<RadiusTable> {
        let values = self.properties.get(property).ok_or_else(|| {
            ApeError::Configuration(format!("Unknown radius property {:?}", property))
        })?;

        let mut table = RadiusTable::new();
        for (symbol, &value) in values {
            let id = element_id(symbol).ok_or_else(|| {
                ApeError::Configuration(format!(
                    "Property {:?} lists unknown element {:?}",
                    property, symbol
                ))
            })?;
            table.insert(id, value)?;
        }
        Ok(table)
    }
}

/// Atomic radius per element ID. Read-only once a batch starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadiusTable {
    radii: HashMap<usize, f64>,
}

impl RadiusTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor from `(symbol, radius)` pairs
    pub fn from_symbols(pairs: &[(&str, f64)]) -> Result<Self> {
        let mut table = Self::new();
        for &(symbol, radius) in pairs {
            let id = element_id(symbol).ok_or_else(|| {
                ApeError::Configuration(format!("Unknown element {:?}", symbol))
            })?;
            table.insert(id, radius)?;
        }
        Ok(table)
    }

    /// Radii must be positive and finite.
    pub fn insert(&mut self, element: usize, radius: f64) -> Result<()> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ApeError::Configuration(format!(
                "Radius of {} must be positive, got {}",
                display_element(element),
                radius
            )));
        }
        self.radii.insert(element, radius);
        Ok(())
    }

    pub fn radius(&self, element: usize) -> Result<f64> {
        self.radii.get(&element).copied().ok_or_else(|| {
            ApeError::Configuration(format!(
                "Missing radius data for {}",
                display_element(element)
            ))
        })
    }

    /// Radii aligned with `elements`
    pub fn radii_for(&self, elements: &[usize]) -> Result<Vec<f64>> {
        elements.iter().map(|&e| self.radius(e)).collect()
    }

    pub fn contains(&self, element: usize) -> bool {
        self.radii.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }
}

fn display_element(element: usize) -> String {
    match element_symbol(element) {
        Some(sym) => sym.to_string(),
        None => format!("element #{}", element),
    }
}
