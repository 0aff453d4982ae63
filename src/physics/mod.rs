// src/physics/mod.rs

pub mod packing;
