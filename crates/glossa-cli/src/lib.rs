//! Glossa CLI Library
//!
//! Command implementations and key enum generation for the `glossa` binary.

pub mod cli;
pub mod codegen;
pub mod commands;
pub mod error;

pub use error::CliError;
