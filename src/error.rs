//! Error types for the linking pipeline
//!
//! Every failure is fatal to the run: the tool either rewrites the settings
//! file completely or leaves it untouched.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkerError {
    /// Manifest discovery could not complete, or the filter pattern was
    /// rejected before traversal started.
    #[error("scan failed: {0}")]
    Scan(String),

    /// The settings file is missing, unreadable, or not valid JSON.
    /// The tool never creates a default document.
    #[error("could not load settings from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    /// The rewritten document could not be persisted. The original file
    /// is left as it was.
    #[error("could not write settings to {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, LinkerError>;
