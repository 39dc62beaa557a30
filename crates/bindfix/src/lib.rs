// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # bindfix - binding fixture types
//!
//! Plain aggregates used to exercise a cross-language binding layer: struct
//! layout, optional fields, containers, maps, static and member methods.
//! Each fixture publishes its shape (field names and order, field types,
//! method signatures, default values) so that a generator on the other side
//! of the boundary can mirror it and detect drift.
//!
//! ## Quick Start
//!
//! ```rust
//! use bindfix::fixtures::{Config, Methods};
//! use bindfix::Shape;
//!
//! let config = Config::new();
//! assert_eq!((config.id, config.name.as_str()), (42, "test"));
//! assert_eq!(Methods::add(10, 20), 30);
//!
//! let names: Vec<_> = Config::shape().field_names().collect();
//! assert_eq!(names, ["id", "value", "name"]);
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`fixtures`] | The fixture aggregates (`Config`, `School`, `Methods`, ...) |
//! | [`Shape`] | Static shape descriptor, usually derived |
//! | [`ShapeRegistry`] | Ordered set of published shapes |
//! | [`Contract`] | JSON form of a registry, with drift detection |

// Lets `#[derive(Shape)]` expand to `::bindfix::...` paths inside this crate.
extern crate self as bindfix;

pub mod contract;
pub mod error;
pub mod fixtures;
pub mod registry;
pub mod shape;

pub use bindfix_derive::Shape;
pub use contract::{Contract, Drift};
pub use error::{Error, Result};
pub use registry::{ShapeEntry, ShapeRegistry};
pub use shape::{Shape, ShapeDescriptor};
