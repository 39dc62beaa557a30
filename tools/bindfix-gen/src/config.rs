// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generator configuration.
//!
//! Every key is optional; a missing file section falls back to the defaults
//! below.
//!
//! ```toml
//! namespace = "fixtures"
//! guard = "ifndef"
//! includes = ["<cstddef>", "\"extra.h\""]
//! log_level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable consulted when no `-c` path is given.
pub const CONFIG_ENV: &str = "BINDFIX_GEN_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Include guard style of the generated header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guard {
    #[default]
    Pragma,
    Ifndef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenConfig {
    /// C++ namespace wrapping the generated types; none when unset.
    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub guard: Guard,

    /// Extra include targets, written verbatim after `#include`.
    #[serde(default)]
    pub includes: Vec<String>,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            guard: Guard::Pragma,
            includes: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl GenConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve from an explicit path, then `BINDFIX_GEN_CONFIG`, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ns) = &self.namespace {
            let valid = !ns.is_empty()
                && ns.split("::").all(|part| {
                    let mut chars = part.chars();
                    chars
                        .next()
                        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                });
            if !valid {
                return Err(ConfigError::Invalid(format!(
                    "namespace '{ns}' is not a C++ identifier path"
                )));
            }
        }

        for include in &self.includes {
            let bracketed = include.len() > 2
                && ((include.starts_with('<') && include.ends_with('>'))
                    || (include.starts_with('"') && include.ends_with('"')));
            if !bracketed {
                return Err(ConfigError::Invalid(format!(
                    "include '{include}' must be written as <header> or \"header\""
                )));
            }
        }

        Ok(())
    }
}
