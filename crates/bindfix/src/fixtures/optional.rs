// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Optional-field fixtures. Absence is `None`, never a sentinel payload.

use super::value::Config;
use crate::shape::{MethodSignature, Param, PassMode, Receiver, Returns, TypeRef, BOOL, I32};
use crate::Shape;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROBABILITY: i32 = 75;

pub const CHANCE_METHODS: &[MethodSignature] = &[MethodSignature {
    name: "set_chance",
    receiver: Receiver::Mut,
    params: &[
        Param {
            name: "has_chance",
            ty: BOOL,
            pass: PassMode::Value,
        },
        Param {
            name: "value",
            ty: I32,
            pass: PassMode::Value,
        },
    ],
    returns: Returns::Unit,
}];

pub const WALLET_METHODS: &[MethodSignature] = &[MethodSignature {
    name: "set_config",
    receiver: Receiver::Mut,
    params: &[
        Param {
            name: "has_config",
            ty: BOOL,
            pass: PassMode::Value,
        },
        Param {
            name: "c",
            ty: TypeRef::Struct(<Config as Shape>::shape),
            pass: PassMode::Ref,
        },
    ],
    returns: Returns::Unit,
}];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Shape)]
#[shape(methods = CHANCE_METHODS)]
pub struct Chance {
    pub probability: Option<i32>,
}

impl Chance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_chance(&mut self, has_chance: bool, value: i32) {
        self.probability = has_chance.then_some(value);
    }
}

impl Default for Chance {
    fn default() -> Self {
        Self {
            probability: Some(DEFAULT_PROBABILITY),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Shape)]
#[shape(methods = WALLET_METHODS)]
pub struct Wallet {
    pub config: Option<Config>,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_config(&mut self, has_config: bool, c: &Config) {
        self.config = has_config.then(|| c.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chance_default_present() {
        assert_eq!(Chance::new().probability, Some(75));
    }

    #[test]
    fn test_set_chance_absent_ignores_value() {
        let mut chance = Chance::new();
        for value in [0, 1, 75, -1, i32::MIN] {
            chance.set_chance(false, value);
            assert_eq!(chance.probability, None);
        }
    }

    #[test]
    fn test_set_chance_present_zero_is_not_absent() {
        let mut chance = Chance::new();
        chance.set_chance(false, 5);
        chance.set_chance(true, 0);
        assert_eq!(chance.probability, Some(0));
    }

    #[test]
    fn test_wallet_default_absent() {
        assert!(Wallet::new().config.is_none());
    }

    #[test]
    fn test_wallet_set_config() {
        let mut wallet = Wallet::new();
        let config = Config::with_id(555);

        wallet.set_config(true, &config);
        assert_eq!(wallet.config.as_ref().map(|c| c.id), Some(555));

        wallet.set_config(false, &config);
        assert!(wallet.config.is_none());
    }

    #[test]
    fn test_optional_shapes() {
        assert_eq!(
            Chance::shape().fields[0].field_type.render(),
            "Option<i32>"
        );
        assert_eq!(
            Wallet::shape().fields[0].field_type.render(),
            "Option<Config>"
        );
        assert!(Wallet::shape().method("set_config").is_some());
    }
}
