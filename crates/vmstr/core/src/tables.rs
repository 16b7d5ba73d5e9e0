// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mask and unmask tables linked through the global key.
//!
//! # Invariant
//!
//! For every index `i`, `unmask[i] == mask[i] ^ global_key`. The two tables
//! are produced by separate LCG evaluations; neither is derived by reading the
//! other.
//!
//! # Runtime view
//!
//! Only [`KeyTables::unmask`] and the two key shares end up in an artifact.
//! [`UnmaskKeys`] re-derives `mask[p]` through a call-local volatile scratch
//! slot, so concurrent decodes never share mutable state.

use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

use crate::opaque::opaque_xor;
use crate::prng::{Sequence, lcg_next};
use crate::program::PROGRAM_CAPACITY;

/// Sequence index of the global key draw.
pub const GLOBAL_KEY_INDEX: u32 = 0xDEAD_BEEF;

/// Sequence index of the first global key share.
pub const KEY_SHARE_INDEX: u32 = 0x00C0_FFEE;

/// Build-time key material for one seed.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyTables {
    mask: [u8; PROGRAM_CAPACITY],
    unmask: [u8; PROGRAM_CAPACITY],
    global_key: u8,
}

impl core::fmt::Debug for KeyTables {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[REDACTED KeyTables]")
    }
}

impl KeyTables {
    /// Generates all tables for `sequence`.
    pub fn generate(sequence: &Sequence) -> Self {
        let global_key = sequence.draw_byte(GLOBAL_KEY_INDEX);

        let mut mask = [0u8; PROGRAM_CAPACITY];
        for (index, slot) in mask.iter_mut().enumerate() {
            *slot = sequence.draw_byte(index as u32);
        }

        let mut unmask = [0u8; PROGRAM_CAPACITY];
        let base = sequence.seed().value();
        for (index, slot) in unmask.iter_mut().enumerate() {
            let draw = lcg_next(base.wrapping_add(index as u32));
            *slot = ((draw % 255) as u8) ^ global_key;
        }

        Self {
            mask,
            unmask,
            global_key,
        }
    }

    /// Masks applied to operands at generation time. Never emitted.
    pub fn mask(&self) -> &[u8; PROGRAM_CAPACITY] {
        &self.mask
    }

    /// The table frozen into the artifact.
    pub fn unmask(&self) -> &[u8; PROGRAM_CAPACITY] {
        &self.unmask
    }

    /// The key linking both tables.
    pub fn global_key(&self) -> u8 {
        self.global_key
    }

    /// Splits the global key into `(share, complement)` with
    /// `share ^ complement == global_key`. The artifact stores `share` as a
    /// static and folds `complement` into code.
    pub fn global_key_shares(&self, sequence: &Sequence) -> (u8, u8) {
        let share = sequence.draw_byte(KEY_SHARE_INDEX);
        (share, share ^ self.global_key)
    }

    /// Runtime view over these tables.
    pub fn unmask_keys(&self) -> UnmaskKeys<'_> {
        UnmaskKeys::new(&self.unmask, self.global_key)
    }
}

/// What the interpreter needs: the unmask table and the reassembled key.
#[derive(Clone, Copy)]
pub struct UnmaskKeys<'a> {
    unmask: &'a [u8; PROGRAM_CAPACITY],
    global_key: u8,
}

impl core::fmt::Debug for UnmaskKeys<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[REDACTED UnmaskKeys]")
    }
}

impl<'a> UnmaskKeys<'a> {
    /// Wraps a frozen unmask table and its global key.
    pub const fn new(unmask: &'a [u8; PROGRAM_CAPACITY], global_key: u8) -> Self {
        Self { unmask, global_key }
    }

    #[inline(always)]
    fn unmask_at(&self, position: usize) -> u8 {
        // SAFETY: `position` is bounds-checked by the index expression.
        unsafe { ptr::read_volatile(&self.unmask[position]) }
    }

    /// Re-derives `mask[position]`.
    ///
    /// The unmask entry is bounced through a volatile local before the key is
    /// folded out of it in place, so the optimizer cannot merge the load and
    /// the XOR into a constant.
    #[inline(always)]
    pub fn mask_at(&self, position: usize) -> u8 {
        let mut scratch = 0u8;

        // SAFETY: `scratch` is a live local.
        unsafe { ptr::write_volatile(&mut scratch, self.unmask_at(position)) };
        compiler_fence(Ordering::SeqCst);

        // SAFETY: as above.
        let folded = opaque_xor(unsafe { ptr::read_volatile(&scratch) }, self.global_key);
        unsafe { ptr::write_volatile(&mut scratch, folded) };
        compiler_fence(Ordering::SeqCst);

        // SAFETY: as above.
        unsafe { ptr::read_volatile(&scratch) }
    }

    /// Always zero, computed from two volatile reads of the same entry.
    #[inline(always)]
    pub fn opaque_zero(&self, position: usize) -> u8 {
        let entry = self.unmask_at(position);
        opaque_xor(entry, self.unmask_at(position))
    }
}
