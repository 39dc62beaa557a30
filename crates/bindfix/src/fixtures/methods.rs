// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Accessor fixture: getters, setters, a static function and an optional
//! return.

use super::value::Config;
use crate::shape::{MethodSignature, Param, PassMode, Receiver, Returns, TypeRef, BOOL, I32};
use crate::Shape;
use serde::{Deserialize, Serialize};

const CONFIG: TypeRef = TypeRef::Struct(<Config as Shape>::shape);

/// Method table published with the `Methods` shape.
pub const METHODS: &[MethodSignature] = &[
    MethodSignature {
        name: "get_id",
        receiver: Receiver::Ref,
        params: &[],
        returns: Returns::Type {
            ty: I32,
            pass: PassMode::Value,
        },
    },
    MethodSignature {
        name: "set_id",
        receiver: Receiver::Mut,
        params: &[Param {
            name: "v",
            ty: I32,
            pass: PassMode::Value,
        }],
        returns: Returns::Unit,
    },
    MethodSignature {
        name: "get_config",
        receiver: Receiver::Ref,
        params: &[],
        returns: Returns::Type {
            ty: CONFIG,
            pass: PassMode::Ref,
        },
    },
    MethodSignature {
        name: "set_config",
        receiver: Receiver::Mut,
        params: &[Param {
            name: "c",
            ty: CONFIG,
            pass: PassMode::Ref,
        }],
        returns: Returns::Unit,
    },
    MethodSignature {
        name: "set_config_by_value",
        receiver: Receiver::Mut,
        params: &[Param {
            name: "c",
            ty: CONFIG,
            pass: PassMode::Value,
        }],
        returns: Returns::Unit,
    },
    MethodSignature {
        name: "add",
        receiver: Receiver::Static,
        params: &[
            Param {
                name: "v",
                ty: I32,
                pass: PassMode::Value,
            },
            Param {
                name: "w",
                ty: I32,
                pass: PassMode::Value,
            },
        ],
        returns: Returns::Type {
            ty: I32,
            pass: PassMode::Value,
        },
    },
    MethodSignature {
        name: "create_config",
        receiver: Receiver::Ref,
        params: &[],
        returns: Returns::Type {
            ty: CONFIG,
            pass: PassMode::Value,
        },
    },
    MethodSignature {
        name: "optional_id",
        receiver: Receiver::Ref,
        params: &[Param {
            name: "flag",
            ty: BOOL,
            pass: PassMode::Value,
        }],
        returns: Returns::Type {
            ty: TypeRef::Optional { inner: &I32 },
            pass: PassMode::Value,
        },
    },
];

/// Both fields are readonly across the boundary; go through the methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Shape)]
#[shape(methods = METHODS)]
pub struct Methods {
    #[shape(readonly)]
    id: i32,
    #[shape(readonly)]
    config: Config,
}

impl Methods {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, v: i32) {
        self.id = v;
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn set_config(&mut self, c: &Config) {
        self.config.clone_from(c);
    }

    pub fn set_config_by_value(&mut self, c: Config) {
        self.config = c;
    }

    /// Wraps on overflow.
    pub fn add(v: i32, w: i32) -> i32 {
        v.wrapping_add(w)
    }

    pub fn create_config(&self) -> Config {
        self.config.clone()
    }

    pub fn optional_id(&self, flag: bool) -> Option<i32> {
        flag.then_some(self.id)
    }
}
