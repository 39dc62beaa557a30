// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Static shape metadata for fixture types.
//!
//! Provides the `Shape` trait implemented by `#[derive(Shape)]`, the
//! `ShapeDescriptor` it returns, and the FNV-1a type id shared with the
//! derive macro.

pub mod descriptor;
pub mod type_id;

pub use descriptor::{
    FieldLayout, MethodSignature, Param, PassMode, PrimitiveKind, Receiver, Returns,
    ShapeDescriptor, TypeRef,
};
pub use type_id::compute_type_id;

/// A type whose shape is published across the binding boundary.
pub trait Shape {
    fn shape() -> &'static ShapeDescriptor;
}

// Shared leaves for hand-written method tables.
pub const BOOL: TypeRef = TypeRef::Primitive(PrimitiveKind::Bool);
pub const I32: TypeRef = TypeRef::Primitive(PrimitiveKind::I32);
