// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixture types mirrored across the binding boundary.
//!
//! Every type builds its sentinel state in `Default`; `new()` is an alias.

pub mod container;
pub mod map;
pub mod methods;
pub mod optional;
pub mod value;

pub use container::{ConfigContainer, IntContainer};
pub use map::MapExample;
pub use methods::Methods;
pub use optional::{Chance, Wallet};
pub use value::{Config, Manager, School};

use crate::registry::ShapeRegistry;
use crate::Result;

/// Registry of every fixture, nested types before the types that embed them.
pub fn registry() -> Result<ShapeRegistry> {
    let mut registry = ShapeRegistry::new();
    registry
        .register::<Config>()?
        .register::<Manager>()?
        .register::<School>()?
        .register::<Methods>()?
        .register::<IntContainer>()?
        .register::<ConfigContainer>()?
        .register::<Chance>()?
        .register::<Wallet>()?
        .register::<MapExample>()?;
    Ok(registry)
}
