//! Loads the JSON documents the command operates on.

use std::path::{Path, PathBuf};

use listdiff_core::{DiffSection, Equality};
use serde_json::Value;

/// An error raised while reading one of the input files.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("{}: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },

    #[error("{}: expected a JSON array", path.display())]
    NotAnArray { path: PathBuf },
}

static NULL: Value = Value::Null;

fn read(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_owned(), source })
}

/// Reads a file holding a JSON array and returns its elements.
///
/// # Errors
///
/// If the file can't be read, isn't valid JSON, or isn't an array.
pub fn load_sequence(path: &Path) -> Result<Vec<Value>, Error> {
    let value = serde_json::from_str::<Value>(&read(path)?)
        .map_err(|source| Error::Json { path: path.to_owned(), source })?;

    log::debug!("loaded {}", path.display());

    match value {
        Value::Array(elements) => Ok(elements),
        _ => Err(Error::NotAnArray { path: path.to_owned() }),
    }
}

/// Reads an edit script previously written by `listdiff diff --format json`.
///
/// # Errors
///
/// If the file can't be read or isn't a JSON array of sections.
pub fn load_script(path: &Path) -> Result<Vec<DiffSection>, Error> {
    serde_json::from_str(&read(path)?)
        .map_err(|source| Error::Json { path: path.to_owned(), source })
}

/// Compares JSON values either whole or by the value found at a JSON
/// pointer.
///
/// Values missing the pointed-to member compare as `null`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Projection {
    pointer: Option<String>,
}

impl Projection {
    /// Creates a projection for `key`, which may be a JSON pointer such as
    /// `/user/id` or a bare top-level member name such as `id`.
    #[must_use]
    pub fn new(key: Option<&str>) -> Self {
        Self {
            pointer: key.map(|key| {
                if key.is_empty() || key.starts_with('/') {
                    key.to_owned()
                } else {
                    format!("/{key}")
                }
            }),
        }
    }

    fn project<'a>(&self, value: &'a Value) -> &'a Value {
        self.pointer.as_ref().map_or(value, |pointer| {
            value.pointer(pointer).unwrap_or(&NULL)
        })
    }
}

impl Equality<Value> for Projection {
    fn equals(&self, first: &Value, second: &Value) -> bool {
        self.project(first) == self.project(second)
    }
}
