// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sequence fixtures with forward traversal only.
//!
//! Contents are fixed at construction; there is no insertion or removal API.
//! Traversal is restartable and follows insertion order.

use super::value::Config;
use crate::Shape;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Shape)]
#[shape(iter = data)]
pub struct IntContainer {
    data: Vec<i32>,
}

impl IntContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, i32> {
        self.data.iter_mut()
    }
}

impl Default for IntContainer {
    fn default() -> Self {
        Self {
            data: vec![10, 20, 30],
        }
    }
}

impl<'a> IntoIterator for &'a IntContainer {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut IntContainer {
    type Item = &'a mut i32;
    type IntoIter = std::slice::IterMut<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for IntContainer {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Configs with a parallel list of labels, one label per config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Shape)]
#[shape(iter = data)]
pub struct ConfigContainer {
    data: Vec<Config>,
    names: Vec<String>,
}

impl ConfigContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[Config] {
        &self.data
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Config> {
        self.data.iter()
    }

    /// Mutates configs in place; the container keeps its length.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Config> {
        self.data.iter_mut()
    }

    /// Each config paired with its label.
    pub fn entries(&self) -> impl Iterator<Item = (&Config, &str)> + '_ {
        self.data
            .iter()
            .zip(self.names.iter().map(String::as_str))
    }
}

impl Default for ConfigContainer {
    fn default() -> Self {
        let (data, names) = [100, 200]
            .into_iter()
            .map(|id| (Config::with_id(id), id.to_string()))
            .unzip();
        Self { data, names }
    }
}

impl<'a> IntoIterator for &'a ConfigContainer {
    type Item = &'a Config;
    type IntoIter = std::slice::Iter<'a, Config>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut ConfigContainer {
    type Item = &'a mut Config;
    type IntoIter = std::slice::IterMut<'a, Config>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for ConfigContainer {
    type Item = Config;
    type IntoIter = std::vec::IntoIter<Config>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
