// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Build seed derivation.

use crate::error::SeedError;

/// Digit offsets in `HH:MM:SS` and their weights (seconds since midnight).
const CLOCK_WEIGHTS: [(usize, u32); 6] = [
    (0, 36_000),
    (1, 3_600),
    (3, 600),
    (4, 60),
    (6, 10),
    (7, 1),
];

const CLOCK_SEPARATORS: [usize; 2] = [2, 5];

/// One integer fixed for the lifetime of a build.
///
/// Every table, program and global key of an artifact is a pure function of
/// this value and of slot positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed(u32);

impl Seed {
    /// Wraps an explicit seed value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Derives a seed from an `HH:MM:SS` clock string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vmstr_core::Seed;
    ///
    /// let seed = Seed::from_clock("01:02:03").expect("valid clock");
    /// assert_eq!(seed.value(), 3_600 + 2 * 60 + 3);
    /// ```
    pub fn from_clock(clock: &str) -> Result<Self, SeedError> {
        let bytes = clock.as_bytes();

        if bytes.len() != 8 {
            return Err(SeedError::InvalidClockLength { len: bytes.len() });
        }

        for offset in CLOCK_SEPARATORS {
            if bytes[offset] != b':' {
                return Err(SeedError::InvalidClockSeparator { offset });
            }
        }

        let mut value = 0u32;
        for (offset, weight) in CLOCK_WEIGHTS {
            let byte = bytes[offset];
            if !byte.is_ascii_digit() {
                return Err(SeedError::InvalidClockDigit { offset });
            }
            value += u32::from(byte - b'0') * weight;
        }

        Ok(Self(value))
    }

    /// Parses an explicit override, decimal or `0x`-prefixed hex.
    pub fn parse(text: &str) -> Result<Self, SeedError> {
        let text = text.trim();
        let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => text.parse::<u32>(),
        };

        parsed
            .map(Self)
            .map_err(|_| SeedError::InvalidSeedOverride)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
