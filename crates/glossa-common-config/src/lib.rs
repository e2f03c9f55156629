//! Configuration types for Glossa.
//!
//! This crate provides the configuration read from `glossa.yaml` files:
//! where bundles live, which locale to load, and how key enums are
//! generated.

pub mod loader;
pub mod types;


pub use loader::*;
pub use types::*;
