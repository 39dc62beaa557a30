// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ordered registry of shapes published to the binding side.

use crate::contract::{Contract, TypeContract};
use crate::shape::{Shape, ShapeDescriptor};
use crate::{Error, Result};
use serde::Serialize;

type DefaultsFn = fn() -> serde_json::Result<serde_json::Value>;

/// One registered type: its static shape and a snapshot of its defaults.
pub struct ShapeEntry {
    descriptor: &'static ShapeDescriptor,
    defaults: DefaultsFn,
}

impl ShapeEntry {
    pub fn descriptor(&self) -> &'static ShapeDescriptor {
        self.descriptor
    }

    /// JSON value of a freshly default-constructed instance.
    pub fn defaults(&self) -> Result<serde_json::Value> {
        (self.defaults)().map_err(|source| Error::Defaults {
            type_name: self.descriptor.type_name.to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for ShapeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeEntry")
            .field("type_name", &self.descriptor.type_name)
            .field("type_id", &self.descriptor.type_id)
            .finish()
    }
}

fn default_value<T: Default + Serialize>() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(T::default())
}

#[derive(Debug, Default)]
pub struct ShapeRegistry {
    entries: Vec<ShapeEntry>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`, rejecting a second type with the same name.
    pub fn register<T>(&mut self) -> Result<&mut Self>
    where
        T: Shape + Default + Serialize,
    {
        let descriptor = T::shape();
        if self.contains(descriptor.type_name) {
            return Err(Error::DuplicateType(descriptor.type_name.to_string()));
        }

        log::debug!(
            "[registry] {} (type_id=0x{:08X}, {} fields, {} methods)",
            descriptor.type_name,
            descriptor.type_id,
            descriptor.fields.len(),
            descriptor.methods.len()
        );
        self.entries.push(ShapeEntry {
            descriptor,
            defaults: default_value::<T>,
        });
        Ok(self)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.descriptor.type_name == type_name)
    }

    pub fn get(&self, type_name: &str) -> Result<&ShapeEntry> {
        self.entries
            .iter()
            .find(|e| e.descriptor.type_name == type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))
    }

    /// Entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ShapeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializable contract covering every registered type.
    pub fn contract(&self) -> Result<Contract> {
        let types = self
            .entries
            .iter()
            .map(TypeContract::from_entry)
            .collect::<Result<Vec<_>>>()?;
        Ok(Contract::new(types))
    }
}

impl<'a> IntoIterator for &'a ShapeRegistry {
    type Item = &'a ShapeEntry;
    type IntoIter = std::slice::Iter<'a, ShapeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
