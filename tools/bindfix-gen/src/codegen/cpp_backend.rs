// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! C++ header backend.
//!
//! Each registered shape becomes a `struct` with default member initializers
//! taken from the JSON value of `T::default()`. Readonly fields are placed
//! under `private:`; method tables become declarations; an iterated field
//! gets inline `begin()`/`end()`.
//!
//! Types are emitted in registry order, so nested types must be registered
//! before the types that embed them.

use crate::config::{GenConfig, Guard};
use bindfix::contract::CONTRACT_VERSION;
use bindfix::shape::{
    FieldLayout, MethodSignature, PassMode, PrimitiveKind, Receiver, Returns, ShapeDescriptor,
    TypeRef,
};
use bindfix::{Result, ShapeRegistry};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Write as _;

const STD_INCLUDES: &[&str] = &[
    "<cstdint>",
    "<memory>",
    "<optional>",
    "<string>",
    "<unordered_map>",
    "<vector>",
];

pub const GUARD_MACRO: &str = "BINDFIX_FIXTURES_HPP";

/// C++ spelling of a field or parameter type.
pub fn cpp_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Primitive(p) => p.cpp_name().to_string(),
        TypeRef::String => "std::string".to_string(),
        TypeRef::Struct(shape) => shape().type_name.to_string(),
        TypeRef::Optional { inner } => format!("std::optional<{}>", cpp_type(inner)),
        TypeRef::Sequence { element } => format!("std::vector<{}>", cpp_type(element)),
        TypeRef::Map { key, value } => {
            format!("std::unordered_map<{}, {}>", cpp_type(key), cpp_type(value))
        }
        TypeRef::Unique { inner } => format!("std::unique_ptr<{}>", cpp_type(inner)),
    }
}

fn passed_type(ty: &TypeRef, pass: PassMode) -> String {
    match pass {
        PassMode::Value => cpp_type(ty),
        PassMode::Ref => format!("const {}&", cpp_type(ty)),
        PassMode::Mut => format!("{}&", cpp_type(ty)),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn float_literal(value: f64, kind: PrimitiveKind) -> String {
    if kind == PrimitiveKind::F32 {
        format!("{:?}f", value as f32)
    } else {
        format!("{value:?}")
    }
}

fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Octal escapes stop after three digits, unlike \x.
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// JSON object keys are always strings; turn one back into a key literal.
fn key_literal(ty: &TypeRef, key: &str) -> Option<String> {
    match ty {
        TypeRef::String => Some(string_literal(key)),
        TypeRef::Primitive(PrimitiveKind::Bool) => {
            key.parse::<bool>().ok().map(|b| b.to_string())
        }
        TypeRef::Primitive(p) if !p.is_float() => key.parse::<i128>().ok().map(|n| n.to_string()),
        _ => None,
    }
}

struct Renderer {
    defaults: HashMap<&'static str, Value>,
}

impl Renderer {
    fn new(registry: &ShapeRegistry) -> Result<Self> {
        let mut defaults = HashMap::with_capacity(registry.len());
        for entry in registry {
            defaults.insert(entry.descriptor().type_name, entry.defaults()?);
        }
        Ok(Self { defaults })
    }

    fn is_default(&self, shape: &ShapeDescriptor, value: &Value) -> bool {
        self.defaults.get(shape.type_name) == Some(value)
    }

    /// Default state needs no initializer.
    fn omits(&self, ty: &TypeRef, value: &Value) -> bool {
        match (ty, value) {
            (TypeRef::Optional { .. }, Value::Null) => true,
            (TypeRef::String, Value::String(s)) => s.is_empty(),
            (TypeRef::Sequence { .. }, Value::Array(items)) => items.is_empty(),
            (TypeRef::Map { .. }, Value::Object(entries)) => entries.is_empty(),
            (TypeRef::Struct(shape), value) => self.is_default(shape(), value),
            _ => false,
        }
    }

    /// C++ expression for `value`, or `None` if it does not fit `ty`.
    fn literal(&self, ty: &TypeRef, value: &Value) -> Option<String> {
        match (ty, value) {
            (TypeRef::Primitive(PrimitiveKind::Bool), Value::Bool(b)) => Some(b.to_string()),
            (TypeRef::Primitive(p), Value::Number(n)) if p.is_float() => {
                Some(float_literal(n.as_f64()?, *p))
            }
            (TypeRef::Primitive(_), Value::Number(n)) if n.is_i64() || n.is_u64() => {
                Some(n.to_string())
            }
            (TypeRef::String, Value::String(s)) => Some(string_literal(s)),
            (TypeRef::Struct(shape), Value::Object(obj)) => {
                let shape = shape();
                let parts = shape
                    .fields
                    .iter()
                    .map(|f| obj.get(f.name).and_then(|v| self.literal(&f.field_type, v)))
                    .collect::<Option<Vec<_>>>()?;
                Some(format!("{}{{{}}}", shape.type_name, parts.join(", ")))
            }
            (TypeRef::Optional { .. }, Value::Null) => Some("std::nullopt".to_string()),
            (TypeRef::Optional { inner }, value) => self.literal(inner, value),
            (TypeRef::Sequence { element }, Value::Array(items)) => {
                let parts = items
                    .iter()
                    .map(|item| self.literal(element, item))
                    .collect::<Option<Vec<_>>>()?;
                Some(format!("{{{}}}", parts.join(", ")))
            }
            (TypeRef::Map { key, value: item }, Value::Object(entries)) => {
                let parts = entries
                    .iter()
                    .map(|(k, v)| {
                        Some(format!(
                            "{{{}, {}}}",
                            key_literal(key, k)?,
                            self.literal(item, v)?
                        ))
                    })
                    .collect::<Option<Vec<_>>>()?;
                Some(format!("{{{}}}", parts.join(", ")))
            }
            (TypeRef::Unique { inner }, value) => {
                let target = cpp_type(inner);
                match inner {
                    TypeRef::Struct(shape) if self.is_default(shape(), value) => {
                        Some(format!("std::make_unique<{target}>()"))
                    }
                    _ => Some(format!(
                        "std::make_unique<{target}>({})",
                        self.literal(inner, value)?
                    )),
                }
            }
            _ => None,
        }
    }

    fn field_line(&self, shape: &ShapeDescriptor, field: &FieldLayout, defaults: &Value) -> String {
        let decl = format!("{} {}", cpp_type(&field.field_type), field.name);
        let Some(value) = defaults.get(field.name) else {
            tracing::warn!("[cpp] {}.{}: no default recorded", shape.type_name, field.name);
            return format!("{decl};");
        };
        if self.omits(&field.field_type, value) {
            return format!("{decl};");
        }
        match self.literal(&field.field_type, value) {
            Some(init) => format!("{decl} = {init};"),
            None => {
                tracing::warn!(
                    "[cpp] {}.{}: default {} does not fit {}",
                    shape.type_name,
                    field.name,
                    value,
                    field.field_type.render()
                );
                format!("{decl};")
            }
        }
    }

    fn emit_struct(&self, out: &mut String, shape: &ShapeDescriptor) {
        static NO_DEFAULTS: Value = Value::Null;
        let defaults = self.defaults.get(shape.type_name).unwrap_or(&NO_DEFAULTS);
        let mut public = true;

        let _ = writeln!(out, "struct {} {{", shape.type_name);
        for field in shape.fields {
            if field.readonly == public {
                public = !field.readonly;
                out.push_str(if public { "public:\n" } else { "private:\n" });
            }
            let _ = writeln!(out, "    {}", self.field_line(shape, field, defaults));
        }

        let iterator = shape.iterates.and_then(|name| match shape.field(name) {
            Some(FieldLayout {
                field_type: TypeRef::Sequence { .. },
                ..
            }) => Some(name),
            _ => {
                tracing::warn!("[cpp] {}: iterated field {name} is not a sequence", shape.type_name);
                None
            }
        });

        if !shape.methods.is_empty() || iterator.is_some() {
            if !shape.fields.is_empty() {
                out.push('\n');
            }
            if !public {
                out.push_str("public:\n");
            }
        }
        for method in shape.methods {
            let _ = writeln!(out, "    {};", method_decl(method));
        }
        if let Some(field) = iterator.and_then(|name| shape.field(name)) {
            let seq = cpp_type(&field.field_type);
            let name = field.name;
            let _ = writeln!(out, "    {seq}::iterator begin() {{ return {name}.begin(); }}");
            let _ = writeln!(out, "    {seq}::iterator end() {{ return {name}.end(); }}");
            let _ = writeln!(out, "    {seq}::const_iterator begin() const {{ return {name}.begin(); }}");
            let _ = writeln!(out, "    {seq}::const_iterator end() const {{ return {name}.end(); }}");
        }
        out.push_str("};\n");
    }
}

/// Declaration of one method, without the trailing semicolon.
pub fn method_decl(method: &MethodSignature) -> String {
    let ret = match &method.returns {
        Returns::Unit => "void".to_string(),
        Returns::Type { ty, pass } => passed_type(ty, *pass),
    };
    let params = method
        .params
        .iter()
        .map(|p| format!("{} {}", passed_type(&p.ty, p.pass), p.name))
        .collect::<Vec<_>>()
        .join(", ");

    match method.receiver {
        Receiver::Static => format!("static {ret} {}({params})", method.name),
        Receiver::Ref => format!("{ret} {}({params}) const", method.name),
        Receiver::Mut => format!("{ret} {}({params})", method.name),
    }
}

/// Render the header for every shape in `registry`.
pub fn emit_header(registry: &ShapeRegistry, config: &GenConfig) -> Result<String> {
    let renderer = Renderer::new(registry)?;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "// Generated by bindfix-gen {} (contract v{CONTRACT_VERSION}). Do not edit.",
        env!("CARGO_PKG_VERSION")
    );
    match config.guard {
        Guard::Pragma => out.push_str("#pragma once\n"),
        Guard::Ifndef => {
            let _ = write!(out, "#ifndef {GUARD_MACRO}\n#define {GUARD_MACRO}\n");
        }
    }
    out.push('\n');

    for include in STD_INCLUDES
        .iter()
        .copied()
        .chain(config.includes.iter().map(String::as_str))
    {
        let _ = writeln!(out, "#include {include}");
    }

    if let Some(ns) = &config.namespace {
        let _ = write!(out, "\nnamespace {ns} {{\n");
    }

    for entry in registry {
        let shape = entry.descriptor();
        tracing::debug!("[cpp] emitting {}", shape.type_name);
        out.push('\n');
        renderer.emit_struct(&mut out, shape);
    }

    if let Some(ns) = &config.namespace {
        let _ = write!(out, "\n}}  // namespace {ns}\n");
    }
    if config.guard == Guard::Ifndef {
        let _ = write!(out, "\n#endif  // {GUARD_MACRO}\n");
    }

    Ok(out)
}
