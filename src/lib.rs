//! Atomic Packing Efficiency (APE) attributes for alloy compositions.
//!
//! Given a nominal composition and a table of elemental radii, compute a
//! fixed-length feature vector describing how efficiently atoms can pack
//! into local clusters:
//!
//! ```no_run
//! use ape_features::{ApeConfig, AttributeAssembler, Composition, RadiusTable};
//!
//! let radii = RadiusTable::from_symbols(&[("Cu", 1.26), ("Zr", 1.58)])?;
//! let assembler = AttributeAssembler::new(ApeConfig::default(), radii)?;
//!
//! let alloys = vec![Composition::from_formula("Cu64.3Zr35.7")?];
//! let attrs = assembler.compute(&alloys)?;
//! println!("{:?} = {:?}", attrs.names, attrs.values[0]);
//! # Ok::<(), ape_features::ApeError>(())
//! ```

pub mod attributes;
pub mod config;
pub mod error;
pub mod model;
pub mod physics;
pub mod utils;

pub use attributes::{AttributeAssembler, AttributeSet, ClusterCache, CompositionEntry, EfficientClusterSet};
pub use config::ApeConfig;
pub use error::{ApeError, Result, SearchBound};
pub use model::{Composition, PropertyTable, RadiusTable};
