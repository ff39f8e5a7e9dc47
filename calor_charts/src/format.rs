// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Formats `v` with exactly `precision` fractional digits.
///
/// Negative zero is printed without its sign.
pub fn format_fixed(v: f64, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => String::from(rest),
        _ => s,
    }
}
