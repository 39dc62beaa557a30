// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

pub mod cpp_backend;

pub use cpp_backend::{cpp_type, emit_header, method_decl};
