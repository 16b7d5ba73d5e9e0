// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Entry points called by macro expansions.

use std::ffi::CStr;

use vmstr_core::{Program, Stack, TransformUnit, Vm};

use crate::abort::{AbortCode, abort};
use crate::keys::unmask_keys;
use crate::slot::StaticSlot;
use crate::wide::WideString;

#[inline(always)]
pub(crate) fn run<U: TransformUnit>(program: &Program<U>) -> Stack<U> {
    match Vm::new(unmask_keys()).execute(program) {
        Ok(stack) => stack,
        Err(fault) => abort(AbortCode::from(fault)),
    }
}

/// Decodes a narrow program into an owned `String`.
pub fn decode_string(program: &'static Program<u8>) -> String {
    let stack = run(program);

    match core::str::from_utf8(stack.decoded()) {
        Ok(text) => String::from(text),
        Err(_) => abort(AbortCode::InvalidUtf8),
    }
}

/// Decodes a wide program into an owned [`WideString`].
pub fn decode_wide(program: &'static Program<u16>) -> WideString {
    let stack = run(program);
    WideString::from_units(stack.decoded())
}

/// Decodes a narrow program once and returns the cached C string.
pub fn decode_static_cstr(
    program: &'static Program<u8>,
    slot: &'static StaticSlot<u8>,
) -> &'static CStr {
    let bytes = slot.get_or_init(|| run(program));

    match CStr::from_bytes_with_nul(bytes) {
        Ok(cstr) => cstr,
        Err(_) => abort(AbortCode::InteriorNul),
    }
}

/// Decodes a wide program once and returns the cached units, terminator
/// included.
pub fn decode_static_wide(
    program: &'static Program<u16>,
    slot: &'static StaticSlot<u16>,
) -> &'static [u16] {
    slot.get_or_init(|| run(program))
}
