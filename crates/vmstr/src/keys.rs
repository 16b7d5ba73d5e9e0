// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime key material.
//!
//! Holds the unmask table and the stored half of the global key. The other
//! half is a constant folded into [`global_key`].

use core::ptr;

use vmstr_core::{UnmaskKeys, opaque_xor};

vmstr_macros::__key_material!();

/// Reassembles the global key from its two shares.
#[inline(always)]
pub(crate) fn global_key() -> u8 {
    // SAFETY: `KEY_SHARE` is an initialized static.
    let share = unsafe { ptr::read_volatile(ptr::addr_of!(KEY_SHARE)) };
    opaque_xor(share, KEY_SHARE_COMPLEMENT)
}

pub(crate) fn unmask_keys() -> UnmaskKeys<'static> {
    UnmaskKeys::new(&UNMASK_TABLE, global_key())
}
