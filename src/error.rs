// src/error.rs

use std::fmt;

/// Which coordination-number search ran out of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBound {
    /// Smallest possible cluster needed more than 24 neighbours
    Minimum,
    /// Largest possible cluster needed fewer than 3 neighbours
    Maximum,
    /// Both searches succeeded but the smallest cluster is larger than the largest
    Crossed { min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApeError {
    /// Bad threshold, neighbour counts, radius property or radius data.
    Configuration(String),
    /// The [3, 24] coordination window cannot satisfy the packing threshold.
    SearchBoundsExceeded { search: SearchBound, threshold: f64 },
    /// An entry that carries no usable composition.
    UnsupportedInput(String),
}

pub type Result<T> = std::result::Result<T, ApeError>;

impl ApeError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, ApeError::Configuration(_))
    }

    pub fn is_search_bounds(&self) -> bool {
        matches!(self, ApeError::SearchBoundsExceeded { .. })
    }

    pub fn is_unsupported_input(&self) -> bool {
        matches!(self, ApeError::UnsupportedInput(_))
    }
}

impl fmt::Display for ApeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApeError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            ApeError::SearchBoundsExceeded { search, threshold } => match search {
                SearchBound::Minimum => write!(
                    f,
                    "Smallest cluster > 24 atoms: packing threshold {} too large for given radii",
                    threshold
                ),
                SearchBound::Maximum => write!(
                    f,
                    "Largest cluster < 3 atoms: packing threshold {} too large for given radii",
                    threshold
                ),
                SearchBound::Crossed { min, max } => write!(
                    f,
                    "No cluster size satisfies packing threshold {}: smallest cluster {} > largest cluster {}",
                    threshold, min, max
                ),
            },
            ApeError::UnsupportedInput(msg) => write!(f, "Unsupported input: {}", msg),
        }
    }
}

impl std::error::Error for ApeError {}

impl From<std::io::Error> for ApeError {
    fn from(e: std::io::Error) -> Self {
        ApeError::Configuration(format!("I/O failure: {}", e))
    }
}

impl From<serde_json::Error> for ApeError {
    fn from(e: serde_json::Error) -> Self {
        ApeError::Configuration(format!("Invalid JSON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let cfg = ApeError::Configuration("bad".into());
        assert!(cfg.is_configuration());
        assert!(!cfg.is_search_bounds());

        let bounds = ApeError::SearchBoundsExceeded {
            search: SearchBound::Minimum,
            threshold: 0.5,
        };
        assert!(bounds.is_search_bounds());
        assert!(bounds.to_string().contains("> 24"));

        let input = ApeError::UnsupportedInput("no composition".into());
        assert!(input.is_unsupported_input());
    }

    #[test]
    fn test_io_error_maps_to_configuration() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ApeError = io.into();
        assert!(err.is_configuration());
    }
}
