// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # bindfix C FFI Bindings
//!
//! C-compatible surface over the `bindfix` fixtures. Every fixture is exposed
//! as an opaque handle with `_new`/`_free` and pass-through accessors.
//!
//! # Ownership
//!
//! - Handles returned by `_new`, `_clone` and `bindfix_methods_create_config`
//!   are owned by the caller and must be released with the matching `_free`.
//! - Pointers returned by sub-object accessors (a manager's config, a school's
//!   teacher, a map entry) are borrowed: valid while the owner is alive and
//!   unmodified, never to be freed.
//!
//! # Safety
//!
//! All public functions are `unsafe` and require the caller to uphold the
//! invariants documented in each function's safety comment. NULL handles are
//! rejected, never dereferenced.

mod container;
mod logging;
mod map;
mod methods;
mod optional;
mod value;

pub use container::*;
pub use logging::*;
pub use map::*;
pub use methods::*;
pub use optional::*;
pub use value::*;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

/// Opaque handle to a `Config`
#[repr(C)]
pub struct BindfixConfig {
    _private: [u8; 0],
}

/// Opaque handle to a `Manager`
#[repr(C)]
pub struct BindfixManager {
    _private: [u8; 0],
}

/// Opaque handle to a `School`
#[repr(C)]
pub struct BindfixSchool {
    _private: [u8; 0],
}

/// Opaque handle to a `Methods`
#[repr(C)]
pub struct BindfixMethods {
    _private: [u8; 0],
}

/// Opaque handle to an `IntContainer`
#[repr(C)]
pub struct BindfixIntContainer {
    _private: [u8; 0],
}

/// Opaque handle to a `ConfigContainer`
#[repr(C)]
pub struct BindfixConfigContainer {
    _private: [u8; 0],
}

/// Opaque handle to a `Chance`
#[repr(C)]
pub struct BindfixChance {
    _private: [u8; 0],
}

/// Opaque handle to a `Wallet`
#[repr(C)]
pub struct BindfixWallet {
    _private: [u8; 0],
}

/// Opaque handle to a `MapExample`
#[repr(C)]
pub struct BindfixMapExample {
    _private: [u8; 0],
}

/// Error codes (C-compatible enum)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindfixError {
    /// Operation completed successfully
    BindfixOk = 0,
    /// Invalid argument provided (null pointer, invalid UTF-8)
    BindfixInvalidArgument = 1,
    /// Value absent: empty optional, missing key, index out of range
    BindfixNotFound = 2,
    /// Generic operation failure
    BindfixOperationFailed = 3,
    /// Caller buffer too small; the required length is still reported
    BindfixBufferTooSmall = 4,
}

/// Box a value and hand it out as an owned opaque handle.
pub(crate) fn into_handle<T, H>(value: T) -> *mut H {
    Box::into_raw(Box::new(value)).cast::<H>()
}

/// Release an owned handle created by [`into_handle`].
///
/// # Safety
/// `handle` must be NULL or come from `into_handle::<T, H>` and not be freed yet.
pub(crate) unsafe fn free_handle<T, H>(handle: *mut H) {
    if !handle.is_null() {
        drop(Box::from_raw(handle.cast::<T>()));
    }
}

/// Borrow a handle as its Rust type.
///
/// # Safety
/// `handle` must be NULL or point to a live `T`.
pub(crate) unsafe fn as_ref<'a, T, H>(handle: *const H) -> Option<&'a T> {
    handle.cast::<T>().as_ref()
}

/// Mutably borrow a handle as its Rust type.
///
/// # Safety
/// `handle` must be NULL or point to a live `T` with no other borrow active.
pub(crate) unsafe fn as_mut<'a, T, H>(handle: *mut H) -> Option<&'a mut T> {
    handle.cast::<T>().as_mut()
}

/// Read a C string argument.
///
/// # Safety
/// `s` must be NULL or a valid null-terminated C string.
pub(crate) unsafe fn str_arg<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

/// Copy `s` into a caller buffer with a null terminator.
///
/// `*out_len` always receives the string length (terminator excluded), so a
/// caller can pass `buf = NULL, buf_len = 0` to size its buffer first.
///
/// # Safety
/// `buf` must be NULL or point to at least `buf_len` writable bytes;
/// `out_len` must be a valid pointer.
pub(crate) unsafe fn copy_str_out(
    s: &str,
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> BindfixError {
    if out_len.is_null() {
        return BindfixError::BindfixInvalidArgument;
    }

    let len = s.len();
    *out_len = len;

    if buf.is_null() || buf_len < len + 1 {
        return BindfixError::BindfixBufferTooSmall;
    }

    ptr::copy_nonoverlapping(s.as_ptr(), buf.cast::<u8>(), len);
    *buf.add(len) = 0; // Null terminator

    BindfixError::BindfixOk
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_str_out_sizes_first() {
        let mut len = 0usize;
        let rc = unsafe { copy_str_out("abc", ptr::null_mut(), 0, &mut len) };
        assert_eq!(rc, BindfixError::BindfixBufferTooSmall);
        assert_eq!(len, 3);

        let mut buf = [0 as c_char; 4];
        let rc = unsafe { copy_str_out("abc", buf.as_mut_ptr(), buf.len(), &mut len) };
        assert_eq!(rc, BindfixError::BindfixOk);
        let copied = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(copied.to_str(), Ok("abc"));
    }

    #[test]
    fn test_copy_str_out_exact_fit_needs_terminator() {
        let mut len = 0usize;
        let mut buf = [0 as c_char; 3];
        let rc = unsafe { copy_str_out("abc", buf.as_mut_ptr(), buf.len(), &mut len) };
        assert_eq!(rc, BindfixError::BindfixBufferTooSmall);
    }

    #[test]
    fn test_str_arg_rejects_null() {
        assert_eq!(unsafe { str_arg(ptr::null()) }, None);
        assert_eq!(unsafe { str_arg(c"hi".as_ptr()) }, Some("hi"));
    }
}
