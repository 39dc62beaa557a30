// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Config, Manager and School for C FFI

use std::os::raw::c_char;
use std::ptr;

use bindfix::fixtures::{Config, Manager, School};

use super::{
    as_mut, as_ref, copy_str_out, free_handle, into_handle, str_arg, BindfixConfig,
    BindfixError, BindfixManager, BindfixSchool,
};

// =============================================================================
// Config
// =============================================================================

/// Create a Config with its sentinel defaults (42, 56.0, "test")
///
/// # Safety
/// The returned handle must be released with `bindfix_config_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_new() -> *mut BindfixConfig {
    into_handle(Config::new())
}

/// Deep copy of a Config
///
/// # Safety
/// - `config` must be a valid Config pointer (owned or borrowed).
/// - The returned handle must be released with `bindfix_config_free`.
///
/// # Returns
/// New owned handle, or NULL if `config` is NULL
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_clone(config: *const BindfixConfig) -> *mut BindfixConfig {
    match as_ref::<Config, _>(config) {
        Some(config) => into_handle(config.clone()),
        None => ptr::null_mut(),
    }
}

/// Release a Config handle
///
/// # Safety
/// - `config` must come from a bindfix function returning an owned Config,
///   or be NULL. Borrowed sub-object pointers must not be passed here.
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_free(config: *mut BindfixConfig) {
    free_handle::<Config, _>(config);
}

/// # Safety
/// - `config` must be a valid Config pointer.
///
/// # Returns
/// The id, or 0 if `config` is NULL
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_id(config: *const BindfixConfig) -> i32 {
    as_ref::<Config, _>(config).map_or(0, |c| c.id)
}

/// # Safety
/// - `config` must be a valid Config pointer.
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_set_id(config: *mut BindfixConfig, id: i32) -> BindfixError {
    let Some(config) = as_mut::<Config, _>(config) else {
        return BindfixError::BindfixInvalidArgument;
    };
    config.id = id;
    BindfixError::BindfixOk
}

/// # Safety
/// - `config` must be a valid Config pointer.
///
/// # Returns
/// The value, or 0.0 if `config` is NULL
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_value(config: *const BindfixConfig) -> f32 {
    as_ref::<Config, _>(config).map_or(0.0, |c| c.value)
}

/// # Safety
/// - `config` must be a valid Config pointer.
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_set_value(
    config: *mut BindfixConfig,
    value: f32,
) -> BindfixError {
    let Some(config) = as_mut::<Config, _>(config) else {
        return BindfixError::BindfixInvalidArgument;
    };
    config.value = value;
    BindfixError::BindfixOk
}

/// Copy the name into a caller buffer
///
/// # Safety
/// - `config` must be a valid Config pointer.
/// - `buf` must be NULL or point to at least `buf_len` bytes.
/// - `out_len` must be a valid pointer; it receives the name length.
///
/// # Returns
/// `BindfixError::BindfixOk` on success, `BindfixBufferTooSmall` if the
/// name plus terminator does not fit
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_name(
    config: *const BindfixConfig,
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> BindfixError {
    let Some(config) = as_ref::<Config, _>(config) else {
        return BindfixError::BindfixInvalidArgument;
    };
    copy_str_out(&config.name, buf, buf_len, out_len)
}

/// # Safety
/// - `config` must be a valid Config pointer.
/// - `name` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn bindfix_config_set_name(
    config: *mut BindfixConfig,
    name: *const c_char,
) -> BindfixError {
    let (Some(config), Some(name)) = (as_mut::<Config, _>(config), str_arg(name)) else {
        return BindfixError::BindfixInvalidArgument;
    };
    name.clone_into(&mut config.name);
    BindfixError::BindfixOk
}

// =============================================================================
// Manager
// =============================================================================

/// # Safety
/// The returned handle must be released with `bindfix_manager_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_manager_new() -> *mut BindfixManager {
    into_handle(Manager::new())
}

/// # Safety
/// - `manager` must be a valid Manager pointer.
/// - The returned handle must be released with `bindfix_manager_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_manager_clone(
    manager: *const BindfixManager,
) -> *mut BindfixManager {
    match as_ref::<Manager, _>(manager) {
        Some(manager) => into_handle(manager.clone()),
        None => ptr::null_mut(),
    }
}

/// # Safety
/// - `manager` must be an owned Manager handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn bindfix_manager_free(manager: *mut BindfixManager) {
    free_handle::<Manager, _>(manager);
}

/// Borrow the manager's config, read-only
///
/// # Safety
/// - `manager` must be a valid Manager pointer.
/// - The result is valid while `manager` is alive; do not free it.
#[no_mangle]
pub unsafe extern "C" fn bindfix_manager_config(
    manager: *const BindfixManager,
) -> *const BindfixConfig {
    match as_ref::<Manager, _>(manager) {
        Some(manager) => ptr::from_ref(&manager.config).cast(),
        None => ptr::null(),
    }
}

/// Borrow the manager's config for modification
///
/// # Safety
/// - `manager` must be a valid Manager pointer.
/// - The result is valid while `manager` is alive; do not free it.
#[no_mangle]
pub unsafe extern "C" fn bindfix_manager_config_mut(
    manager: *mut BindfixManager,
) -> *mut BindfixConfig {
    match as_mut::<Manager, _>(manager) {
        Some(manager) => ptr::from_mut(&mut manager.config).cast(),
        None => ptr::null_mut(),
    }
}

// =============================================================================
// School
// =============================================================================

/// Create a School; `other` is allocated separately and owned by the school
///
/// # Safety
/// The returned handle must be released with `bindfix_school_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_school_new() -> *mut BindfixSchool {
    log::trace!("[ffi] school created");
    into_handle(School::new())
}

/// Deep copy, including a fresh allocation for `other`
///
/// # Safety
/// - `school` must be a valid School pointer.
/// - The returned handle must be released with `bindfix_school_free`.
#[no_mangle]
pub unsafe extern "C" fn bindfix_school_clone(school: *const BindfixSchool) -> *mut BindfixSchool {
    match as_ref::<School, _>(school) {
        Some(school) => into_handle(school.clone()),
        None => ptr::null_mut(),
    }
}

/// Release a School and every manager it owns
///
/// # Safety
/// - `school` must be an owned School handle or NULL.
/// - Pointers borrowed from it become dangling.
#[no_mangle]
pub unsafe extern "C" fn bindfix_school_free(school: *mut BindfixSchool) {
    free_handle::<School, _>(school);
}

/// # Safety
/// - `school` must be a valid School pointer.
/// - The result is borrowed from `school`; do not free it.
#[no_mangle]
pub unsafe extern "C" fn bindfix_school_teacher(school: *mut BindfixSchool) -> *mut BindfixManager {
    match as_mut::<School, _>(school) {
        Some(school) => ptr::from_mut(&mut school.teacher).cast(),
        None => ptr::null_mut(),
    }
}

/// # Safety
/// - `school` must be a valid School pointer.
/// - The result is borrowed from `school`; do not free it.
#[no_mangle]
pub unsafe extern "C" fn bindfix_school_student(school: *mut BindfixSchool) -> *mut BindfixManager {
    match as_mut::<School, _>(school) {
        Some(school) => ptr::from_mut(&mut school.student).cast(),
        None => ptr::null_mut(),
    }
}

/// Borrow the exclusively owned manager; never NULL for a valid school
///
/// # Safety
/// - `school` must be a valid School pointer.
/// - The result is borrowed from `school`; do not free it.
#[no_mangle]
pub unsafe extern "C" fn bindfix_school_other(school: *mut BindfixSchool) -> *mut BindfixManager {
    match as_mut::<School, _>(school) {
        Some(school) => ptr::from_mut(&mut *school.other).cast(),
        None => ptr::null_mut(),
    }
}
