//! Core utilities and types for the primelib SDK generator.
//!
//! This crate provides the small set of types shared by the configuration,
//! code generation and command-line crates.

mod file;
mod verbosity;

// File operations
pub use file::{File, Overwrite, WriteResult, write_file};
pub use verbosity::Verbosity;
