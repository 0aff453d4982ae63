//src/model/mod.rs
pub mod elements;
pub mod composition;
pub mod properties;

// Re-exports for cleaner imports
pub use elements::{element_id, element_symbol, ELEMENT_SYMBOLS};
pub use composition::Composition;
pub use properties::{PropertyTable, RadiusTable};
