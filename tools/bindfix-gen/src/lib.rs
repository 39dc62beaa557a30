// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Binding generator for the bindfix fixtures.
//!
//! Renders a C++ header mirroring every registered shape and reads or writes
//! the JSON contract used for drift checks.

pub mod codegen;
pub mod config;

pub use config::{ConfigError, GenConfig, Guard};
