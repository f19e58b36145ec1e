//! ra-linker library
//!
//! Core functionality for regenerating the `rust-analyzer.linkedProjects`
//! key of a VS Code settings file from the Cargo manifests on disk.

pub mod commands;
pub mod error;
pub mod manifest;
pub mod settings;
