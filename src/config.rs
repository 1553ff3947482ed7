//! Site configuration module.
//!
//! Handles loading `config.json` and exposing its values through typed
//! accessors. The file is a flat JSON object; recognized keys:
//!
//! ```json
//! {
//!     "src-folder": "src",
//!     "static-folder": "static",
//!     "emoji": true
//! }
//! ```
//!
//! All keys are optional. Unknown keys are ignored. A key that is present
//! with the wrong type is a fatal error at the point the consumer reads it,
//! with one exception: a non-boolean `emoji` value downgrades to a warning
//! and the default (emoji enabled), since it only affects console cosmetics.
//!
//! The store keeps the raw JSON object rather than deserializing into a
//! struct: unknown keys must pass through silently, and type mismatches are
//! reported per consuming key, neither of which a derive gives us cleanly.
//! Configuration is read exactly once at process start and never mutated.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config key for the source directory (default: `<cwd>/src`).
pub const SRC_FOLDER_KEY: &str = "src-folder";
/// Config key for the static asset folder under the output root.
pub const STATIC_FOLDER_KEY: &str = "static-folder";
/// Config key for the emoji/plain console output switch (default: true).
pub const EMOJI_KEY: &str = "emoji";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("config key '{key}': expected {expected}, got {actual}")]
    InvalidType {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("source directory does not exist: {0}")]
    MissingSourceDirectory(PathBuf),
}

/// The `emoji` flag as read from config.
///
/// Reading this flag never fails: a wrong type keeps the default (enabled)
/// and carries the offending JSON type name so the caller can warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiFlag {
    pub enabled: bool,
    /// JSON type name of a non-boolean value, if one was configured.
    pub invalid_type: Option<&'static str>,
}

/// Validated key/value configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    values: Map<String, Value>,
}

impl ConfigStore {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(value)
    }

    /// Build a store from an already-parsed JSON value. The root must be an
    /// object.
    pub fn from_json(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(ConfigError::InvalidType {
                key: "(config root)".to_string(),
                expected: "object",
                actual: json_type_name(&other),
            }),
        }
    }

    /// String accessor: `Ok(None)` when absent, `InvalidType` when present
    /// with any other type.
    fn get_str(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(ConfigError::InvalidType {
                key: key.to_string(),
                expected: "string",
                actual: json_type_name(other),
            }),
        }
    }

    /// Resolve the source directory.
    ///
    /// Uses `src-folder` when configured (relative paths are joined to
    /// `cwd`), otherwise `<cwd>/src`. The resolved directory must exist.
    pub fn src_folder(&self, cwd: &Path) -> Result<PathBuf, ConfigError> {
        let dir = match self.get_str(SRC_FOLDER_KEY)? {
            Some(configured) => cwd.join(configured),
            None => cwd.join("src"),
        };
        if !dir.is_dir() {
            return Err(ConfigError::MissingSourceDirectory(dir));
        }
        Ok(dir)
    }

    /// The static asset folder name, if configured.
    pub fn static_folder(&self) -> Result<Option<&str>, ConfigError> {
        self.get_str(STATIC_FOLDER_KEY)
    }

    /// The emoji output flag. Defaults to enabled; a non-boolean value keeps
    /// the default and reports the actual type instead of failing.
    pub fn emoji(&self) -> EmojiFlag {
        match self.values.get(EMOJI_KEY) {
            None => EmojiFlag {
                enabled: true,
                invalid_type: None,
            },
            Some(Value::Bool(enabled)) => EmojiFlag {
                enabled: *enabled,
                invalid_type: None,
            },
            Some(other) => EmojiFlag {
                enabled: true,
                invalid_type: Some(json_type_name(other)),
            },
        }
    }
}

/// JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns a stock `config.json` with every recognized key at its default.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_json() -> String {
    let stock = serde_json::json!({
        "src-folder": "src",
        "static-folder": "static",
        "emoji": true,
    });
    let mut out = serde_json::to_string_pretty(&stock).expect("stock config must serialize");
    out.push('\n');
    out
}
