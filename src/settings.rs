//! VS Code settings document operations
//!
//! The settings file is an arbitrary JSON object; this tool owns exactly one
//! key, `rust-analyzer.linkedProjects`, and must leave every other key/value
//! pair untouched across a rewrite.

use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LinkerError, Result};

/// The settings key this tool owns
pub const LINKED_PROJECTS_KEY: &str = "rust-analyzer.linkedProjects";

/// Relative location of the settings file
pub const SETTINGS_PATH: &str = ".vscode/settings.json";

/// An editor settings document loaded from disk
#[derive(Debug)]
pub struct Settings {
    path: PathBuf,
    document: Map<String, Value>,
}

impl Settings {
    /// Load the settings document from a file.
    ///
    /// A missing file is an error; the tool does not synthesize a default
    /// document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| LinkerError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let document: Value =
            serde_json::from_str(&content).map_err(|e| LinkerError::ConfigLoad {
                path: path.to_path_buf(),
                reason: format!("invalid JSON: {}", e),
            })?;

        let document = match document {
            Value::Object(map) => map,
            other => {
                return Err(LinkerError::ConfigLoad {
                    path: path.to_path_buf(),
                    reason: format!("expected a JSON object, found {}", json_kind(&other)),
                });
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Replace the linked-projects key with the given manifest paths.
    ///
    /// An empty list becomes an empty array, never key removal.
    pub fn set_linked_projects(&mut self, manifests: &[String]) {
        let list = Value::Array(manifests.iter().cloned().map(Value::String).collect());
        self.document.insert(LINKED_PROJECTS_KEY.to_string(), list);
    }

    /// Persist the document back to the file it was loaded from.
    ///
    /// Serializes fully in memory, writes to a temporary file next to the
    /// target, then renames over it, so a failure never leaves a truncated
    /// settings file behind.
    pub fn save(&self) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.document).map_err(|e| {
            LinkerError::Write {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;
        content.push('\n');

        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let write_err = |e: &dyn std::fmt::Display| LinkerError::Write {
            path: self.path.clone(),
            reason: e.to_string(),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| write_err(&e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| write_err(&e))?;
        tmp.persist(&self.path).map_err(|e| write_err(&e))?;

        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
