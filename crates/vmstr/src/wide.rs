// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned UTF-16 strings.

use core::fmt;

/// The decoded UTF-16 form of a literal, followed by a hidden NUL unit.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WideString {
    // Always ends in a single 0 that is not part of the string.
    units: Vec<u16>,
}

impl WideString {
    pub(crate) fn from_units(units: &[u16]) -> Self {
        let mut owned = Vec::with_capacity(units.len() + 1);
        owned.extend_from_slice(units);
        owned.push(0);

        Self { units: owned }
    }

    /// The UTF-16 units, without the terminator.
    pub fn as_units(&self) -> &[u16] {
        &self.units[..self.units.len() - 1]
    }

    /// The UTF-16 units followed by one NUL unit.
    pub fn as_units_with_nul(&self) -> &[u16] {
        &self.units
    }

    /// Pointer to a NUL-terminated buffer, valid while `self` is alive.
    pub fn as_ptr(&self) -> *const u16 {
        self.units.as_ptr()
    }

    /// Number of UTF-16 units, without the terminator.
    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    /// `true` for the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts to a `String`, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_units())
    }
}

impl From<&str> for WideString {
    fn from(text: &str) -> Self {
        let units: Vec<u16> = text.encode_utf16().collect();
        Self::from_units(&units)
    }
}

impl AsRef<[u16]> for WideString {
    fn as_ref(&self) -> &[u16] {
        self.as_units()
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
