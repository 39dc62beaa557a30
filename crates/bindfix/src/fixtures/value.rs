// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Plain aggregates: `Config` and the types composed from it.

use crate::Shape;
use serde::{Deserialize, Serialize};

/// Sentinel defaults for a fresh `Config`.
pub const DEFAULT_CONFIG_ID: i32 = 42;
pub const DEFAULT_CONFIG_VALUE: f32 = 56.0;
pub const DEFAULT_CONFIG_NAME: &str = "test";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Shape)]
pub struct Config {
    pub id: i32,
    pub value: f32,
    pub name: String,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with only the id replaced.
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id: DEFAULT_CONFIG_ID,
            value: DEFAULT_CONFIG_VALUE,
            name: DEFAULT_CONFIG_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Shape)]
pub struct Manager {
    pub config: Config,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Two managers held by value and one held through an owning box.
///
/// `Clone` deep-copies `other`, so clones never share it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Shape)]
pub struct School {
    pub teacher: Manager,
    pub student: Manager,
    pub other: Box<Manager>,
}

impl School {
    pub fn new() -> Self {
        Self::default()
    }
}
