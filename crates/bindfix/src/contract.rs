// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Serializable shape contract and drift detection.
//!
//! A `Contract` is the JSON form of a `ShapeRegistry`: field names and order,
//! field types, method signatures and default values. The binding side keeps
//! a snapshot of it; `Contract::diff` reports where the live shapes moved away
//! from that snapshot. Layout numbers are recorded for information only and
//! never compared, as they depend on the toolchain.

use crate::registry::ShapeEntry;
use crate::shape::{MethodSignature, PassMode, Receiver, Returns};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Bumped when the JSON layout of the contract itself changes.
pub const CONTRACT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub version: u32,
    pub types: Vec<TypeContract>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeContract {
    pub name: String,
    pub type_id: u32,
    pub size_bytes: u32,
    pub alignment: u8,
    pub fields: Vec<FieldContract>,
    #[serde(default)]
    pub methods: Vec<MethodContract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterates: Option<String>,
    pub defaults: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldContract {
    pub name: String,
    pub ty: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodContract {
    pub name: String,
    pub receiver: Receiver,
    pub params: Vec<ParamContract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnContract>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamContract {
    pub name: String,
    pub ty: String,
    pub pass: PassMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnContract {
    pub ty: String,
    pub pass: PassMode,
}

fn pass_prefix(pass: PassMode) -> &'static str {
    match pass {
        PassMode::Value => "",
        PassMode::Ref => "&",
        PassMode::Mut => "&mut ",
    }
}

impl MethodContract {
    /// Rust-style signature, e.g. `fn set_config(&mut self, c: &Config)`.
    pub fn signature(&self) -> String {
        let mut args = Vec::with_capacity(self.params.len() + 1);
        match self.receiver {
            Receiver::Static => {}
            Receiver::Ref => args.push("&self".to_string()),
            Receiver::Mut => args.push("&mut self".to_string()),
        }
        args.extend(
            self.params
                .iter()
                .map(|p| format!("{}: {}{}", p.name, pass_prefix(p.pass), p.ty)),
        );

        let mut sig = format!("fn {}({})", self.name, args.join(", "));
        if let Some(ret) = &self.returns {
            sig.push_str(&format!(" -> {}{}", pass_prefix(ret.pass), ret.ty));
        }
        sig
    }
}

impl From<&MethodSignature> for MethodContract {
    fn from(method: &MethodSignature) -> Self {
        Self {
            name: method.name.to_string(),
            receiver: method.receiver,
            params: method
                .params
                .iter()
                .map(|p| ParamContract {
                    name: p.name.to_string(),
                    ty: p.ty.render(),
                    pass: p.pass,
                })
                .collect(),
            returns: match &method.returns {
                Returns::Unit => None,
                Returns::Type { ty, pass } => Some(ReturnContract {
                    ty: ty.render(),
                    pass: *pass,
                }),
            },
        }
    }
}

impl TypeContract {
    pub fn from_entry(entry: &ShapeEntry) -> Result<Self> {
        let desc = entry.descriptor();
        Ok(Self {
            name: desc.type_name.to_string(),
            type_id: desc.type_id,
            size_bytes: desc.size_bytes,
            alignment: desc.alignment,
            fields: desc
                .fields
                .iter()
                .map(|f| FieldContract {
                    name: f.name.to_string(),
                    ty: f.field_type.render(),
                    readonly: f.readonly,
                })
                .collect(),
            methods: desc.methods.iter().map(MethodContract::from).collect(),
            iterates: desc.iterates.map(str::to_string),
            defaults: entry.defaults()?,
        })
    }

    pub fn method(&self, name: &str) -> Option<&MethodContract> {
        self.methods.iter().find(|m| m.name == name)
    }

    fn field_lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| {
                let access = if f.readonly { " (readonly)" } else { "" };
                format!("{}: {}{}", f.name, f.ty, access)
            })
            .collect()
    }
}

/// One way the live contract differs from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    /// In the snapshot, gone from the live contract.
    MissingType(String),
    /// In the live contract, absent from the snapshot.
    AddedType(String),
    FieldsChanged {
        type_name: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },
    MethodChanged {
        type_name: String,
        method: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    IterationChanged {
        type_name: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    DefaultsChanged {
        type_name: String,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_none(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or("<none>")
        }

        match self {
            Drift::MissingType(name) => write!(f, "{name}: type missing"),
            Drift::AddedType(name) => write!(f, "{name}: type not in snapshot"),
            Drift::FieldsChanged {
                type_name,
                expected,
                actual,
            } => write!(
                f,
                "{type_name}: fields changed, expected [{}], found [{}]",
                expected.join(", "),
                actual.join(", ")
            ),
            Drift::MethodChanged {
                type_name,
                method,
                expected,
                actual,
            } => write!(
                f,
                "{type_name}::{method}: expected `{}`, found `{}`",
                or_none(expected),
                or_none(actual)
            ),
            Drift::IterationChanged {
                type_name,
                expected,
                actual,
            } => write!(
                f,
                "{type_name}: iterated field changed, expected {}, found {}",
                or_none(expected),
                or_none(actual)
            ),
            Drift::DefaultsChanged {
                type_name,
                expected,
                actual,
            } => write!(
                f,
                "{type_name}: defaults changed, expected {expected}, found {actual}"
            ),
        }
    }
}

impl Contract {
    pub fn new(types: Vec<TypeContract>) -> Self {
        Self {
            version: CONTRACT_VERSION,
            types,
        }
    }

    pub fn get(&self, name: &str) -> Option<&TypeContract> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Differences between `self` (live) and `snapshot` (expected).
    ///
    /// Empty when the binding side is up to date.
    pub fn diff(&self, snapshot: &Contract) -> Vec<Drift> {
        let mut drifts = Vec::new();

        for expected in &snapshot.types {
            match self.get(&expected.name) {
                Some(actual) => diff_type(expected, actual, &mut drifts),
                None => drifts.push(Drift::MissingType(expected.name.clone())),
            }
        }
        for actual in &self.types {
            if snapshot.get(&actual.name).is_none() {
                drifts.push(Drift::AddedType(actual.name.clone()));
            }
        }

        for drift in &drifts {
            log::trace!("[contract] drift: {drift}");
        }
        drifts
    }
}

fn diff_type(expected: &TypeContract, actual: &TypeContract, drifts: &mut Vec<Drift>) {
    let type_name = &expected.name;

    if expected.fields != actual.fields {
        drifts.push(Drift::FieldsChanged {
            type_name: type_name.clone(),
            expected: expected.field_lines(),
            actual: actual.field_lines(),
        });
    }

    let names: BTreeSet<&str> = expected
        .methods
        .iter()
        .chain(&actual.methods)
        .map(|m| m.name.as_str())
        .collect();
    for name in names {
        let before = expected.method(name);
        let after = actual.method(name);
        if before != after {
            drifts.push(Drift::MethodChanged {
                type_name: type_name.clone(),
                method: name.to_string(),
                expected: before.map(MethodContract::signature),
                actual: after.map(MethodContract::signature),
            });
        }
    }

    if expected.iterates != actual.iterates {
        drifts.push(Drift::IterationChanged {
            type_name: type_name.clone(),
            expected: expected.iterates.clone(),
            actual: actual.iterates.clone(),
        });
    }

    if expected.defaults != actual.defaults {
        drifts.push(Drift::DefaultsChanged {
            type_name: type_name.clone(),
            expected: expected.defaults.to_string(),
            actual: actual.defaults.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn live() -> Contract {
        fixtures::registry()
            .and_then(|r| r.contract())
            .expect("fixture contract")
    }

    #[test]
    fn test_contract_matches_itself() {
        let contract = live();
        assert!(contract.diff(&contract).is_empty());
    }

    #[test]
    fn test_json_round_trip_has_no_drift() {
        let contract = live();
        let json = contract.to_json_pretty().expect("serialize");
        let parsed = Contract::from_json(&json).expect("parse");
        assert!(contract.diff(&parsed).is_empty());
    }

    #[test]
    fn test_config_contract() {
        let contract = live();
        let config = contract.get("Config").expect("Config");
        let fields: Vec<(&str, &str)> = config
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.ty.as_str()))
            .collect();
        assert_eq!(fields, [("id", "i32"), ("value", "f32"), ("name", "String")]);
        assert_eq!(
            config.defaults,
            serde_json::json!({ "id": 42, "value": 56.0, "name": "test" })
        );
    }

    #[test]
    fn test_method_signatures() {
        let contract = live();
        let methods = contract.get("Methods").expect("Methods");
        let sig = |name: &str| methods.method(name).map(MethodContract::signature);
        assert_eq!(sig("add").as_deref(), Some("fn add(v: i32, w: i32) -> i32"));
        assert_eq!(
            sig("set_config").as_deref(),
            Some("fn set_config(&mut self, c: &Config)")
        );
        assert_eq!(
            sig("set_config_by_value").as_deref(),
            Some("fn set_config_by_value(&mut self, c: Config)")
        );
        assert_eq!(
            sig("get_config").as_deref(),
            Some("fn get_config(&self) -> &Config")
        );
        assert_eq!(
            sig("optional_id").as_deref(),
            Some("fn optional_id(&self, flag: bool) -> Option<i32>")
        );
    }

    #[test]
    fn test_reordered_fields_reported() {
        let contract = live();
        let mut snapshot = contract.clone();
        let config = snapshot
            .types
            .iter_mut()
            .find(|t| t.name == "Config")
            .expect("Config");
        config.fields.swap(0, 1);

        let drifts = contract.diff(&snapshot);
        assert_eq!(drifts.len(), 1);
        assert!(matches!(
            &drifts[0],
            Drift::FieldsChanged { type_name, .. } if type_name == "Config"
        ));
    }

    #[test]
    fn test_changed_defaults_and_methods_reported() {
        let contract = live();
        let mut snapshot = contract.clone();
        for ty in &mut snapshot.types {
            match ty.name.as_str() {
                "Chance" => ty.defaults = serde_json::json!({ "probability": 50 }),
                "Methods" => ty.methods.retain(|m| m.name != "add"),
                _ => {}
            }
        }

        let drifts = contract.diff(&snapshot);
        assert_eq!(drifts.len(), 2);
        assert!(drifts.contains(&Drift::MethodChanged {
            type_name: "Methods".to_string(),
            method: "add".to_string(),
            expected: None,
            actual: Some("fn add(v: i32, w: i32) -> i32".to_string()),
        }));
        assert!(drifts
            .iter()
            .any(|d| matches!(d, Drift::DefaultsChanged { type_name, .. } if type_name == "Chance")));
    }

    #[test]
    fn test_missing_and_added_types() {
        let contract = live();
        let mut snapshot = contract.clone();
        snapshot.types.retain(|t| t.name != "Wallet");
        snapshot.types.push(TypeContract {
            name: "Ctor".to_string(),
            type_id: 0,
            size_bytes: 4,
            alignment: 4,
            fields: vec![FieldContract {
                name: "id".to_string(),
                ty: "i32".to_string(),
                readonly: false,
            }],
            methods: Vec::new(),
            iterates: None,
            defaults: serde_json::json!({ "id": 0 }),
        });

        let drifts = contract.diff(&snapshot);
        assert_eq!(
            drifts,
            [
                Drift::MissingType("Ctor".to_string()),
                Drift::AddedType("Wallet".to_string()),
            ]
        );
        assert_eq!(drifts[0].to_string(), "Ctor: type missing");
    }

    #[test]
    fn test_layout_not_compared() {
        let contract = live();
        let mut snapshot = contract.clone();
        for ty in &mut snapshot.types {
            ty.size_bytes += 8;
        }
        assert!(contract.diff(&snapshot).is_empty());
    }
}
