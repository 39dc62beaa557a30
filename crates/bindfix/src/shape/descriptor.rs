// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape descriptor for fixture field layout and method signatures.
//!
//! Defines `ShapeDescriptor`, `FieldLayout` and `MethodSignature`, the static
//! metadata a binding generator reads to mirror a fixture type. Descriptors
//! are emitted by `#[derive(Shape)]`; method tables are written by hand next
//! to the type they describe.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl PrimitiveKind {
    /// Rust spelling of the primitive.
    pub const fn rust_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// C++ spelling of the primitive (`int` and `float` for the 32-bit kinds).
    pub const fn cpp_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "int8_t",
            Self::I16 => "int16_t",
            Self::I32 => "int",
            Self::I64 => "int64_t",
            Self::U8 => "uint8_t",
            Self::U16 => "uint16_t",
            Self::U32 => "uint32_t",
            Self::U64 => "uint64_t",
            Self::F32 => "float",
            Self::F64 => "double",
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

/// Field or parameter type as seen across the binding boundary.
///
/// Composite variants use named fields so that nested references written in
/// a `static` initializer live for `'static`.
#[derive(Clone, Copy)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    String,
    /// Nested fixture type, resolved lazily to its descriptor.
    Struct(fn() -> &'static ShapeDescriptor),
    Optional {
        inner: &'static TypeRef,
    },
    Sequence {
        element: &'static TypeRef,
    },
    /// Any key-unique map; rendered as `HashMap` whatever the Rust map type.
    Map {
        key: &'static TypeRef,
        value: &'static TypeRef,
    },
    /// Exclusively owned heap value (`Box<T>` / `std::unique_ptr<T>`).
    Unique {
        inner: &'static TypeRef,
    },
}

impl TypeRef {
    /// Rust-style spelling, e.g. `Option<i32>` or `HashMap<i32, Config>`.
    pub fn render(&self) -> String {
        match self {
            TypeRef::Primitive(p) => p.rust_name().to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Struct(shape) => shape().type_name.to_string(),
            TypeRef::Optional { inner } => format!("Option<{}>", inner.render()),
            TypeRef::Sequence { element } => format!("Vec<{}>", element.render()),
            TypeRef::Map { key, value } => {
                format!("HashMap<{}, {}>", key.render(), value.render())
            }
            TypeRef::Unique { inner } => format!("Box<{}>", inner.render()),
        }
    }

    /// Descriptor of the nested fixture type, if this is one.
    pub fn shape(&self) -> Option<&'static ShapeDescriptor> {
        match self {
            TypeRef::Struct(shape) => Some(shape()),
            _ => None,
        }
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeRef::Primitive(a), TypeRef::Primitive(b)) => a == b,
            (TypeRef::String, TypeRef::String) => true,
            // Compare by resolved type name, function addresses are not stable.
            (TypeRef::Struct(a), TypeRef::Struct(b)) => a().type_name == b().type_name,
            (TypeRef::Optional { inner: a }, TypeRef::Optional { inner: b })
            | (TypeRef::Unique { inner: a }, TypeRef::Unique { inner: b }) => a == b,
            (TypeRef::Sequence { element: a }, TypeRef::Sequence { element: b }) => a == b,
            (
                TypeRef::Map { key: ka, value: va },
                TypeRef::Map { key: kb, value: vb },
            ) => ka == kb && va == vb,
            _ => false,
        }
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Layout of a single field, in declaration order.
#[derive(Debug)]
pub struct FieldLayout {
    pub name: &'static str,
    pub index: u32,
    pub offset_bytes: u32,
    pub size_bytes: u32,
    pub alignment: u8,
    pub field_type: TypeRef,
    /// Only reachable through methods on the binding side.
    pub readonly: bool,
}

/// How the receiver of a method is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Receiver {
    /// Associated function, no instance.
    Static,
    Ref,
    Mut,
}

/// How a parameter or return value crosses the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassMode {
    Value,
    Ref,
    Mut,
}

#[derive(Debug)]
pub struct Param {
    pub name: &'static str,
    pub ty: TypeRef,
    pub pass: PassMode,
}

#[derive(Debug)]
pub enum Returns {
    Unit,
    Type { ty: TypeRef, pass: PassMode },
}

#[derive(Debug)]
pub struct MethodSignature {
    pub name: &'static str,
    pub receiver: Receiver,
    pub params: &'static [Param],
    pub returns: Returns,
}

/// Shape descriptor: everything the binding side needs to mirror a type
#[derive(Debug)]
pub struct ShapeDescriptor {
    pub type_id: u32,            // FNV-1a hash of type_name
    pub type_name: &'static str, // e.g., "Config"
    pub size_bytes: u32,         // in-process size, toolchain dependent
    pub alignment: u8,
    pub fields: &'static [FieldLayout],
    pub methods: &'static [MethodSignature],
    /// Field exposed for forward iteration (begin/end on the C++ side).
    pub iterates: Option<&'static str>,
}

impl ShapeDescriptor {
    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get method by name.
    pub fn method(&self, name: &str) -> Option<&'static MethodSignature> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.name)
    }
}
