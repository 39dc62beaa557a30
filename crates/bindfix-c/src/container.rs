// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Container fixtures for C FFI
//!
//! Traversal is index based: `_len` then `_get(i)` for `i` in `0.._len`,
//! in insertion order. Out-of-range indices report `BindfixNotFound`.

use std::os::raw::c_char;
use std::ptr;

use bindfix::fixtures::{ConfigContainer, IntContainer};

use super::{
    as_ref, copy_str_out, free_handle, into_handle, BindfixConfig, BindfixConfigContainer,
    BindfixError, BindfixIntContainer,
};

// =============================================================================
// IntContainer
// =============================================================================

/// Create an IntContainer holding `[10, 20, 30]`
///
/// # Safety
/// The returned handle must be released with `bindfix_int_container_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_int_container_new() -> *mut BindfixIntContainer {
    into_handle(IntContainer::new())
}

/// # Safety
/// - `container` must be an owned IntContainer handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn bindfix_int_container_free(container: *mut BindfixIntContainer) {
    free_handle::<IntContainer, _>(container);
}

/// # Safety
/// - `container` must be a valid IntContainer pointer.
///
/// # Returns
/// Number of elements, or 0 if `container` is NULL
#[no_mangle]
pub unsafe extern "C" fn bindfix_int_container_len(container: *const BindfixIntContainer) -> usize {
    as_ref::<IntContainer, _>(container).map_or(0, IntContainer::len)
}

/// # Safety
/// - `container` must be a valid IntContainer pointer.
/// - `out` must be a valid pointer to an `i32`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_int_container_get(
    container: *const BindfixIntContainer,
    index: usize,
    out: *mut i32,
) -> BindfixError {
    if out.is_null() {
        return BindfixError::BindfixInvalidArgument;
    }
    let Some(container) = as_ref::<IntContainer, _>(container) else {
        return BindfixError::BindfixInvalidArgument;
    };
    match container.data().get(index) {
        Some(value) => {
            *out = *value;
            BindfixError::BindfixOk
        }
        None => BindfixError::BindfixNotFound,
    }
}

// =============================================================================
// ConfigContainer
// =============================================================================

/// Create a ConfigContainer holding configs 100 and 200
///
/// # Safety
/// The returned handle must be released with `bindfix_config_container_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_container_new() -> *mut BindfixConfigContainer {
    into_handle(ConfigContainer::new())
}

/// # Safety
/// - `container` must be an owned ConfigContainer handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_container_free(container: *mut BindfixConfigContainer) {
    free_handle::<ConfigContainer, _>(container);
}

/// # Safety
/// - `container` must be a valid ConfigContainer pointer.
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_container_len(
    container: *const BindfixConfigContainer,
) -> usize {
    as_ref::<ConfigContainer, _>(container).map_or(0, ConfigContainer::len)
}

/// Borrow the config at `index`
///
/// # Safety
/// - `container` must be a valid ConfigContainer pointer.
/// - The result is borrowed from `container`; do not free it.
///
/// # Returns
/// Borrowed Config, or NULL if out of range
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_container_get(
    container: *const BindfixConfigContainer,
    index: usize,
) -> *const BindfixConfig {
    as_ref::<ConfigContainer, _>(container)
        .and_then(|c| c.data().get(index))
        .map_or(ptr::null(), |config| ptr::from_ref(config).cast())
}

/// Copy the label of the config at `index` into a caller buffer
///
/// # Safety
/// - `container` must be a valid ConfigContainer pointer.
/// - `buf` must be NULL or point to at least `buf_len` bytes.
/// - `out_len` must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_container_label(
    container: *const BindfixConfigContainer,
    index: usize,
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> BindfixError {
    let Some(container) = as_ref::<ConfigContainer, _>(container) else {
        return BindfixError::BindfixInvalidArgument;
    };
    match container.names().get(index) {
        Some(label) => copy_str_out(label, buf, buf_len, out_len),
        None => BindfixError::BindfixNotFound,
    }
}
