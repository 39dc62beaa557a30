// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Optional-field fixtures for C FFI

use std::ptr;

use bindfix::fixtures::{Chance, Config, Wallet};

use super::{
    as_mut, as_ref, free_handle, into_handle, BindfixChance, BindfixConfig, BindfixError,
    BindfixWallet,
};

/// Create a Chance with probability 75
///
/// # Safety
/// The returned handle must be released with `bindfix_chance_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_chance_new() -> *mut BindfixChance {
    into_handle(Chance::new())
}

/// # Safety
/// - `chance` must be an owned Chance handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn bindfix_chance_free(chance: *mut BindfixChance) {
    free_handle::<Chance, _>(chance);
}

/// Read the probability
///
/// # Safety
/// - `chance` must be a valid Chance pointer.
/// - `out` must be a valid pointer to an `i32`.
///
/// # Returns
/// `BindfixError::BindfixOk` with `*out` set, or `BindfixNotFound` when absent
#[no_mangle]
pub unsafe extern "C" fn bindfix_chance_probability(
    chance: *const BindfixChance,
    out: *mut i32,
) -> BindfixError {
    if out.is_null() {
        return BindfixError::BindfixInvalidArgument;
    }
    let Some(chance) = as_ref::<Chance, _>(chance) else {
        return BindfixError::BindfixInvalidArgument;
    };
    match chance.probability {
        Some(p) => {
            *out = p;
            BindfixError::BindfixOk
        }
        None => BindfixError::BindfixNotFound,
    }
}

/// Set the probability to `value`, or clear it when `has_chance` is false
///
/// # Safety
/// - `chance` must be a valid Chance pointer.
#[no_mangle]
pub unsafe extern "C" fn bindfix_chance_set_chance(
    chance: *mut BindfixChance,
    has_chance: bool,
    value: i32,
) -> BindfixError {
    let Some(chance) = as_mut::<Chance, _>(chance) else {
        return BindfixError::BindfixInvalidArgument;
    };
    chance.set_chance(has_chance, value);
    BindfixError::BindfixOk
}

/// Create an empty Wallet
///
/// # Safety
/// The returned handle must be released with `bindfix_wallet_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_wallet_new() -> *mut BindfixWallet {
    into_handle(Wallet::new())
}

/// # Safety
/// - `wallet` must be an owned Wallet handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn bindfix_wallet_free(wallet: *mut BindfixWallet) {
    free_handle::<Wallet, _>(wallet);
}

/// Borrow the wallet's config
///
/// # Safety
/// - `wallet` must be a valid Wallet pointer.
/// - The result is borrowed from `wallet`; do not free it.
///
/// # Returns
/// Borrowed Config, or NULL when the wallet holds none
#[no_mangle]
pub unsafe extern "C" fn bindfix_wallet_config(wallet: *const BindfixWallet) -> *const BindfixConfig {
    as_ref::<Wallet, _>(wallet)
        .and_then(|w| w.config.as_ref())
        .map_or(ptr::null(), |config| ptr::from_ref(config).cast())
}

/// Store a copy of `c`, or clear the config when `has_config` is false
///
/// Passing the wallet's own config (from `bindfix_wallet_config`) with
/// `has_config` true is a no-op.
///
/// # Safety
/// - `wallet` must be a valid Wallet pointer.
/// - `c` must be a valid Config pointer; it may be NULL when `has_config`
///   is false.
#[no_mangle]
pub unsafe extern "C" fn bindfix_wallet_set_config(
    wallet: *mut BindfixWallet,
    has_config: bool,
    c: *const BindfixConfig,
) -> BindfixError {
    let Some(current) = as_ref::<Wallet, _>(wallet) else {
        return BindfixError::BindfixInvalidArgument;
    };
    if !has_config {
        if let Some(wallet) = as_mut::<Wallet, _>(wallet) {
            wallet.config = None;
        }
        return BindfixError::BindfixOk;
    }
    let Some(source) = as_ref::<Config, _>(c) else {
        return BindfixError::BindfixInvalidArgument;
    };
    // Self-assignment: never hold `&mut Wallet` alongside a borrow of its config.
    if current.config.as_ref().is_some_and(|own| ptr::eq(own, source)) {
        return BindfixError::BindfixOk;
    }
    if let Some(wallet) = as_mut::<Wallet, _>(wallet) {
        wallet.set_config(true, source);
    }
    BindfixError::BindfixOk
}
