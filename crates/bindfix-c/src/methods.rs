// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Methods fixture for C FFI
//!
//! `id` and `config` are readonly on this type: they are only reachable
//! through the accessor functions below.

use std::ptr;

use bindfix::fixtures::{Config, Methods};

use super::{
    as_mut, as_ref, free_handle, into_handle, BindfixConfig, BindfixError, BindfixMethods,
};

/// Create a Methods instance (id 0, default config)
///
/// # Safety
/// The returned handle must be released with `bindfix_methods_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_new() -> *mut BindfixMethods {
    into_handle(Methods::new())
}

/// # Safety
/// - `methods` must be an owned Methods handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_free(methods: *mut BindfixMethods) {
    free_handle::<Methods, _>(methods);
}

/// # Safety
/// - `methods` must be a valid Methods pointer.
///
/// # Returns
/// The stored id, or 0 if `methods` is NULL
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_get_id(methods: *const BindfixMethods) -> i32 {
    as_ref::<Methods, _>(methods).map_or(0, Methods::get_id)
}

/// # Safety
/// - `methods` must be a valid Methods pointer.
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_set_id(methods: *mut BindfixMethods, v: i32) -> BindfixError {
    let Some(methods) = as_mut::<Methods, _>(methods) else {
        return BindfixError::BindfixInvalidArgument;
    };
    methods.set_id(v);
    BindfixError::BindfixOk
}

/// Borrow the stored config, read-only
///
/// # Safety
/// - `methods` must be a valid Methods pointer.
/// - The result is borrowed; it is invalidated by `bindfix_methods_set_config*`
///   and must not be freed.
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_get_config(
    methods: *const BindfixMethods,
) -> *const BindfixConfig {
    match as_ref::<Methods, _>(methods) {
        Some(methods) => ptr::from_ref(methods.get_config()).cast(),
        None => ptr::null(),
    }
}

/// Store a copy of `c`; the caller keeps ownership of `c`
///
/// Passing the pointer returned by `bindfix_methods_get_config` for the same
/// instance is a no-op.
///
/// # Safety
/// - `methods` must be a valid Methods pointer.
/// - `c` must be a valid Config pointer (owned or borrowed).
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_set_config(
    methods: *mut BindfixMethods,
    c: *const BindfixConfig,
) -> BindfixError {
    let (Some(current), Some(source)) = (as_ref::<Methods, _>(methods), as_ref::<Config, _>(c))
    else {
        return BindfixError::BindfixInvalidArgument;
    };
    // Self-assignment: never hold `&mut Methods` alongside a borrow of its config.
    if ptr::eq(source, current.get_config()) {
        return BindfixError::BindfixOk;
    }
    let Some(methods) = as_mut::<Methods, _>(methods) else {
        return BindfixError::BindfixInvalidArgument;
    };
    methods.set_config(source);
    BindfixError::BindfixOk
}

/// Move `c` into the instance
///
/// # Safety
/// - `methods` must be a valid Methods pointer.
/// - `c` must be an owned Config handle. It is consumed on success and must
///   not be used or freed afterwards. On error it is left untouched.
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_set_config_by_value(
    methods: *mut BindfixMethods,
    c: *mut BindfixConfig,
) -> BindfixError {
    if c.is_null() {
        return BindfixError::BindfixInvalidArgument;
    }
    let Some(methods) = as_mut::<Methods, _>(methods) else {
        return BindfixError::BindfixInvalidArgument;
    };
    let c = Box::from_raw(c.cast::<Config>());
    methods.set_config_by_value(*c);
    BindfixError::BindfixOk
}

/// Copy of the stored config; later changes to either side stay separate
///
/// # Safety
/// - `methods` must be a valid Methods pointer.
/// - The returned handle must be released with `bindfix_config_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_create_config(
    methods: *const BindfixMethods,
) -> *mut BindfixConfig {
    match as_ref::<Methods, _>(methods) {
        Some(methods) => into_handle(methods.create_config()),
        None => ptr::null_mut(),
    }
}

/// `v + w`, wrapping on overflow
///
/// # Safety
/// Always safe to call; `unsafe` only for ABI uniformity.
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_add(v: i32, w: i32) -> i32 {
    Methods::add(v, w)
}

/// Write the id to `out` when `flag` is true
///
/// # Safety
/// - `methods` must be a valid Methods pointer.
/// - `out` must be a valid pointer to an `i32`.
///
/// # Returns
/// `BindfixError::BindfixOk` with `*out` set, or `BindfixNotFound` when
/// `flag` is false (`*out` untouched)
#[no_mangle]
pub unsafe extern "C" fn bindfix_methods_optional_id(
    methods: *const BindfixMethods,
    flag: bool,
    out: *mut i32,
) -> BindfixError {
    if out.is_null() {
        return BindfixError::BindfixInvalidArgument;
    }
    let Some(methods) = as_ref::<Methods, _>(methods) else {
        return BindfixError::BindfixInvalidArgument;
    };
    match methods.optional_id(flag) {
        Some(id) => {
            *out = id;
            BindfixError::BindfixOk
        }
        None => BindfixError::BindfixNotFound,
    }
}
