// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::value::Config;
use crate::Shape;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key-unique maps populated at construction and read-only afterwards.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Shape)]
pub struct MapExample {
    int_str_map: HashMap<i32, String>,
    int_config_map: HashMap<i32, Config>,
    str_config_map: HashMap<String, Config>,
}

impl MapExample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn int_str_map(&self) -> &HashMap<i32, String> {
        &self.int_str_map
    }

    pub fn int_config_map(&self) -> &HashMap<i32, Config> {
        &self.int_config_map
    }

    pub fn str_config_map(&self) -> &HashMap<String, Config> {
        &self.str_config_map
    }
}

impl Default for MapExample {
    fn default() -> Self {
        let int_str_map = HashMap::from([(1, "one".to_string()), (2, "two".to_string())]);
        let int_config_map = [10, 20]
            .into_iter()
            .map(|id| (id, Config::with_id(id)))
            .collect();
        let str_config_map = HashMap::from([("one".to_string(), Config::with_id(30))]);
        Self {
            int_str_map,
            int_config_map,
            str_config_map,
        }
    }
}
