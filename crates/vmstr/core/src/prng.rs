// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Position-indexed linear congruential sequence.
//!
//! The sequence is not iterated: `draw(k)` applies a single LCG step to
//! `seed + k`, so any position can be recomputed independently at build time.

use crate::seed::Seed;

/// LCG multiplier.
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;
/// LCG increment.
pub const LCG_INCREMENT: u32 = 12_345;
/// Keeps the low 31 bits (`mod 2^31`).
pub const LCG_RESULT_MASK: u32 = 0x7FFF_FFFF;

/// One LCG step: `(1103515245 * x + 12345) mod 2^31`.
#[inline(always)]
pub const fn lcg_next(x: u32) -> u32 {
    x.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT) & LCG_RESULT_MASK
}

/// Deterministic pseudo-random values indexed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    seed: Seed,
}

impl Sequence {
    /// Creates the sequence for `seed`.
    pub const fn new(seed: Seed) -> Self {
        Self { seed }
    }

    /// The seed this sequence is anchored to.
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// `Rand(k)`.
    #[inline(always)]
    pub const fn draw(&self, index: u32) -> u32 {
        lcg_next(self.seed.value().wrapping_add(index))
    }

    /// `Rand(k) mod 255`.
    #[inline(always)]
    pub const fn draw_byte(&self, index: u32) -> u8 {
        (self.draw(index) % 255) as u8
    }
}
