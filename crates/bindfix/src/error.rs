// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use thiserror::Error;

/// Registry and contract errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Type already registered: {0}")]
    DuplicateType(String),

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Failed to serialize defaults of {type_name}: {source}")]
    Defaults {
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Contract JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
