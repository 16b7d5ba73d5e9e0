// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity bytecode container.

use crate::unit::TransformUnit;

/// Slots in every program, and entries in every key table.
pub const PROGRAM_CAPACITY: usize = 1000;

/// Units on the VM stack. One slot is always taken by the terminator.
pub const STACK_CAPACITY: usize = 200;

/// A masked instruction sequence for one literal.
///
/// Slots past [`Program::len`] are zero. Call sites keep programs in
/// `static` storage, built through the `const fn` [`Program::from_prefix`].
#[derive(Clone, PartialEq, Eq)]
pub struct Program<U: TransformUnit> {
    units: [U; PROGRAM_CAPACITY],
    len: usize,
}

impl<U: TransformUnit> core::fmt::Debug for Program<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Program")
            .field("len", &self.len)
            .field("units", &self.instructions())
            .finish()
    }
}

impl<U: TransformUnit> Program<U> {
    /// Copies `prefix` into a zero-padded program.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` is longer than [`PROGRAM_CAPACITY`]. In a `static`
    /// initializer that panic is a compile error.
    pub const fn from_prefix(prefix: &[U]) -> Self {
        assert!(
            prefix.len() <= PROGRAM_CAPACITY,
            "vmstr: program prefix exceeds PROGRAM_CAPACITY"
        );

        let mut units = [U::ZERO; PROGRAM_CAPACITY];
        let mut i = 0;
        while i < prefix.len() {
            units[i] = prefix[i];
            i += 1;
        }

        Self {
            units,
            len: prefix.len(),
        }
    }

    /// All slots, padding included.
    #[inline(always)]
    pub fn units(&self) -> &[U; PROGRAM_CAPACITY] {
        &self.units
    }

    /// Used slots, terminator included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` for a program with no used slots. Generated programs always
    /// hold at least the terminator.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The used slots.
    pub fn instructions(&self) -> &[U] {
        &self.units[..self.len]
    }

    /// Overwrites one slot for fault-injection tests.
    #[cfg(test)]
    pub(crate) fn patch(&mut self, position: usize, unit: U) {
        self.units[position] = unit;
    }
}
