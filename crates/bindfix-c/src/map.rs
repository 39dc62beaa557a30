// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Map fixture for C FFI
//!
//! Lookups are by key; a missing key reports `BindfixNotFound` (or NULL).

use std::os::raw::c_char;
use std::ptr;

use bindfix::fixtures::MapExample;

use super::{
    as_ref, copy_str_out, free_handle, into_handle, str_arg, BindfixConfig, BindfixError,
    BindfixMapExample,
};

/// Create a MapExample with its default entries
///
/// # Safety
/// The returned handle must be released with `bindfix_map_example_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_map_example_new() -> *mut BindfixMapExample {
    into_handle(MapExample::new())
}

/// # Safety
/// - `map` must be an owned MapExample handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn bindfix_map_example_free(map: *mut BindfixMapExample) {
    free_handle::<MapExample, _>(map);
}

/// # Safety
/// - `map` must be a valid MapExample pointer.
#[no_mangle]
pub unsafe extern "C" fn bindfix_map_example_int_str_len(map: *const BindfixMapExample) -> usize {
    as_ref::<MapExample, _>(map).map_or(0, |m| m.int_str_map().len())
}

/// Copy the string stored under `key` into a caller buffer
///
/// # Safety
/// - `map` must be a valid MapExample pointer.
/// - `buf` must be NULL or point to at least `buf_len` bytes.
/// - `out_len` must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn bindfix_map_example_int_str_get(
    map: *const BindfixMapExample,
    key: i32,
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> BindfixError {
    let Some(map) = as_ref::<MapExample, _>(map) else {
        return BindfixError::BindfixInvalidArgument;
    };
    match map.int_str_map().get(&key) {
        Some(value) => copy_str_out(value, buf, buf_len, out_len),
        None => BindfixError::BindfixNotFound,
    }
}

/// # Safety
/// - `map` must be a valid MapExample pointer.
#[no_mangle]
pub unsafe extern "C" fn bindfix_map_example_int_config_len(map: *const BindfixMapExample) -> usize {
    as_ref::<MapExample, _>(map).map_or(0, |m| m.int_config_map().len())
}

/// Borrow the config stored under `key`
///
/// # Safety
/// - `map` must be a valid MapExample pointer.
/// - The result is borrowed from `map`; do not free it.
///
/// # Returns
/// Borrowed Config, or NULL if the key is absent
#[no_mangle]
pub unsafe extern "C" fn bindfix_map_example_int_config_get(
    map: *const BindfixMapExample,
    key: i32,
) -> *const BindfixConfig {
    as_ref::<MapExample, _>(map)
        .and_then(|m| m.int_config_map().get(&key))
        .map_or(ptr::null(), |config| ptr::from_ref(config).cast())
}

/// Borrow the config stored under a string key
///
/// # Safety
/// - `map` must be a valid MapExample pointer.
/// - `key` must be a valid null-terminated UTF-8 C string.
/// - The result is borrowed from `map`; do not free it.
///
/// # Returns
/// Borrowed Config, or NULL if the key is absent or invalid
#[no_mangle]
pub unsafe extern "C" fn bindfix_map_example_str_config_get(
    map: *const BindfixMapExample,
    key: *const c_char,
) -> *const BindfixConfig {
    let (Some(map), Some(key)) = (as_ref::<MapExample, _>(map), str_arg(key)) else {
        return ptr::null();
    };
    map.str_config_map()
        .get(key)
        .map_or(ptr::null(), |config| ptr::from_ref(config).cast())
}
