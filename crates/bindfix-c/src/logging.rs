// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Logging initialization for the C FFI

use std::os::raw::c_char;

use super::{str_arg, BindfixError};

/// Log level for bindfix logging
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindfixLogLevel {
    BindfixLogOff = 0,
    BindfixLogError = 1,
    BindfixLogWarn = 2,
    BindfixLogInfo = 3,
    BindfixLogDebug = 4,
    BindfixLogTrace = 5,
}

impl From<BindfixLogLevel> for log::LevelFilter {
    fn from(level: BindfixLogLevel) -> Self {
        match level {
            BindfixLogLevel::BindfixLogOff => log::LevelFilter::Off,
            BindfixLogLevel::BindfixLogError => log::LevelFilter::Error,
            BindfixLogLevel::BindfixLogWarn => log::LevelFilter::Warn,
            BindfixLogLevel::BindfixLogInfo => log::LevelFilter::Info,
            BindfixLogLevel::BindfixLogDebug => log::LevelFilter::Debug,
            BindfixLogLevel::BindfixLogTrace => log::LevelFilter::Trace,
        }
    }
}

fn try_init(builder: &mut env_logger::Builder) -> BindfixError {
    match builder.format_timestamp_millis().try_init() {
        Ok(()) => BindfixError::BindfixOk,
        Err(_) => BindfixError::BindfixOperationFailed, // Already initialized
    }
}

/// Initialize logging to stderr at a fixed level
///
/// # Safety
/// Must be called from a single thread during initialization.
///
/// # Returns
/// `BindfixError::BindfixOk` on success, `BindfixOperationFailed` if a logger
/// is already installed
///
/// # Example (C)
/// ```c
/// bindfix_logging_init(BINDFIX_LOG_INFO);
/// ```
#[no_mangle]
pub unsafe extern "C" fn bindfix_logging_init(level: BindfixLogLevel) -> BindfixError {
    let filter: log::LevelFilter = level.into();
    try_init(env_logger::Builder::new().filter_level(filter))
}

/// Initialize logging, letting `RUST_LOG` override `default_level`
///
/// # Safety
/// Must be called from a single thread during initialization.
#[no_mangle]
pub unsafe extern "C" fn bindfix_logging_init_env(default_level: BindfixLogLevel) -> BindfixError {
    let filter: log::LevelFilter = default_level.into();
    try_init(&mut env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(filter.to_string()),
    ))
}

/// Initialize logging with an `env_logger` filter string
///
/// # Safety
/// - `filter` must be a valid null-terminated C string or NULL.
///
/// # Example (C)
/// ```c
/// bindfix_logging_init_with_filter("bindfix=debug,warn");
/// ```
#[no_mangle]
pub unsafe extern "C" fn bindfix_logging_init_with_filter(filter: *const c_char) -> BindfixError {
    let Some(filter) = str_arg(filter) else {
        return BindfixError::BindfixInvalidArgument;
    };
    try_init(env_logger::Builder::new().parse_filters(filter))
}
