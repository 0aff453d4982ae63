// src/model/composition.rs

use crate::error::{ApeError, Result};
use crate::model::elements::{element_id, element_symbol};
use nalgebra::DVector;
use std::collections::BTreeMap;
use std::fmt;

/// Nominal alloy composition in canonical form.
///
/// Elements are sorted by ID with one entry each, and fractions are
/// non-negative and sum to 1. Two compositions with the same elements and
/// fractions compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    elements: Vec<usize>,
    fractions: Vec<f64>,
}

impl Composition {
    /// Build a composition from element IDs and (unnormalized) amounts.
    ///
    /// Duplicate elements are merged and zero amounts dropped.
    pub fn new(elements: &[usize], amounts: &[f64]) -> Result<Self> {
        if elements.len() != amounts.len() {
            return Err(ApeError::UnsupportedInput(format!(
                "{} elements but {} amounts",
                elements.len(),
                amounts.len()
            )));
        }

        let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
        for (&elem, &amount) in elements.iter().zip(amounts) {
            if !amount.is_finite() || amount < 0.0 {
                return Err(ApeError::UnsupportedInput(format!(
                    "Invalid amount {} for element {}",
                    amount, elem
                )));
            }
            if amount == 0.0 {
                continue;
            }
            *merged.entry(elem).or_insert(0.0) += amount;
        }

        if merged.is_empty() {
            return Err(ApeError::UnsupportedInput(
                "Composition contains no atoms".into(),
            ));
        }

        // Sum of amounts scaled by the largest one stays finite for any finite input
        let largest = merged.values().copied().fold(0.0_f64, f64::max);
        let total: f64 = merged.values().map(|a| a / largest).sum();
        let (elements, fractions): (Vec<usize>, Vec<f64>) = merged
            .into_iter()
            .map(|(e, a)| (e, a / largest / total))
            .unzip();

        Ok(Self {
            elements,
            fractions,
        })
    }

    /// Parse a flat chemical formula such as `Cu64.3Zr35.7` or `H2He6`.
    /// A missing amount counts as 1.
    pub fn from_formula(formula: &str) -> Result<Self> {
        let chars: Vec<char> = formula.trim().chars().collect();
        if chars.is_empty() {
            return Err(ApeError::UnsupportedInput("Empty formula".into()));
        }

        let mut elements = Vec::new();
        let mut amounts = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if !chars[pos].is_ascii_uppercase() {
                return Err(ApeError::UnsupportedInput(format!(
                    "Unexpected '{}' in formula {:?}",
                    chars[pos], formula
                )));
            }

            let start = pos;
            pos += 1;
            while pos < chars.len() && chars[pos].is_ascii_lowercase() {
                pos += 1;
            }
            let symbol: String = chars[start..pos].iter().collect();
            let id = element_id(&symbol).ok_or_else(|| {
                ApeError::UnsupportedInput(format!("Unknown element {:?}", symbol))
            })?;

            let num_start = pos;
            while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
                pos += 1;
            }
            let amount = if num_start == pos {
                1.0
            } else {
                let text: String = chars[num_start..pos].iter().collect();
                text.parse::<f64>().map_err(|_| {
                    ApeError::UnsupportedInput(format!(
                        "Invalid amount {:?} for {}",
                        text, symbol
                    ))
                })?
            };

            elements.push(id);
            amounts.push(amount);
        }

        Self::new(&elements, &amounts)
    }

    pub fn elements(&self) -> &[usize] {
        &self.elements
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Sorted IDs of the elements present. Cluster searches depend only on this.
    pub fn element_set(&self) -> &[usize] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn fraction_of(&self, element: usize) -> f64 {
        match self.elements.binary_search(&element) {
            Ok(i) => self.fractions[i],
            Err(_) => 0.0,
        }
    }

    /// Fraction-weighted mean of a per-element property, `values` aligned
    /// with [`Composition::elements`].
    pub fn weighted_mean(&self, values: &[f64]) -> f64 {
        self.fractions
            .iter()
            .zip(values)
            .map(|(x, v)| x * v)
            .sum()
    }

    /// L2 distance between the two fraction vectors over the union of
    /// elements present in either composition.
    pub fn distance(&self, other: &Composition) -> f64 {
        let mut union: Vec<usize> = self
            .elements
            .iter()
            .chain(other.elements.iter())
            .copied()
            .collect();
        union.sort_unstable();
        union.dedup();

        let a = DVector::from_iterator(union.len(), union.iter().map(|&e| self.fraction_of(e)));
        let b = DVector::from_iterator(union.len(), union.iter().map(|&e| other.fraction_of(e)));
        (a - b).norm()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (&elem, &frac) in self.elements.iter().zip(&self.fractions) {
            match element_symbol(elem) {
                Some(sym) => write!(f, "{}", sym)?,
                None => write!(f, "X{}", elem)?,
            }
            if self.elements.len() > 1 {
                let amount = format!("{:.4}", frac);
                write!(f, "{}", amount.trim_end_matches('0').trim_end_matches('.'))?;
            }
        }
        Ok(())
    }
}
