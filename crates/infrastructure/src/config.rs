//! Properties-file configuration
//!
//! Test suites point the executor at an environment through a
//! `.properties`-style file (`HOST=http://host`), loaded here into a
//! [`PropertySource`]. The executor itself never sees this layer; it
//! receives the base URL as an opaque string argument.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// Errors while loading a property file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read properties from {path}: {message}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O message.
        message: String,
    },
}

/// A collection of configuration properties from one source file.
///
/// Lines are `key=value`; blank lines and lines starting with `#` or `!`
/// are ignored, and keys and values are trimmed. The last occurrence of a
/// key wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    name: String,
    properties: HashMap<String, String>,
}

impl PropertySource {
    /// Creates a `PropertySource` with the given name and properties.
    #[must_use]
    pub fn new(name: impl Into<String>, properties: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Loads properties from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::parse(path.display().to_string(), &content))
    }

    /// Parses properties from already-loaded text.
    #[must_use]
    pub fn parse(name: impl Into<String>, content: &str) -> Self {
        let mut properties = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                properties.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Self::new(name, properties)
    }

    /// Returns the name of this property source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets a property value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
