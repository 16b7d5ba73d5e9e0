// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Transform units: the fixed-width values the generator and VM operate on.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width unsigned value used for opcodes, operands and stack slots.
///
/// Implemented for `u8` (narrow strings) and `u16` (wide strings, UTF-16 code
/// units). All arithmetic is wrapping, so the opaque identities in
/// [`crate::opaque`] hold modulo `2^BITS`.
pub trait TransformUnit:
    sealed::Sealed
    + Copy
    + Eq
    + Debug
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
{
    /// Width in bits.
    const BITS: u32;
    /// All bits clear.
    const ZERO: Self;
    /// All bits set. Also the modulus used when drawing pair-strategy keys.
    const MAX: Self;

    /// Keeps the low `BITS` bits of `value`.
    fn from_u32_truncating(value: u32) -> Self;

    /// Zero-extends into a `u32`.
    fn to_u32(self) -> u32;

    /// Widens a mask-table byte.
    fn from_mask(byte: u8) -> Self;

    /// Wrapping addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Wrapping subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Wrapping two's complement negation.
    fn wrapping_neg(self) -> Self;

    /// Rotates left by `amount mod BITS`.
    fn rotate_left(self, amount: u32) -> Self;

    /// Rotates right by `amount mod BITS`.
    fn rotate_right(self, amount: u32) -> Self;
}

macro_rules! impl_transform_unit {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl TransformUnit for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;

                #[inline(always)]
                fn from_u32_truncating(value: u32) -> Self {
                    value as $ty
                }

                #[inline(always)]
                fn to_u32(self) -> u32 {
                    self as u32
                }

                #[inline(always)]
                fn from_mask(byte: u8) -> Self {
                    byte as $ty
                }

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline(always)]
                fn wrapping_neg(self) -> Self {
                    <$ty>::wrapping_neg(self)
                }

                #[inline(always)]
                fn rotate_left(self, amount: u32) -> Self {
                    <$ty>::rotate_left(self, amount % <Self as TransformUnit>::BITS)
                }

                #[inline(always)]
                fn rotate_right(self, amount: u32) -> Self {
                    <$ty>::rotate_right(self, amount % <Self as TransformUnit>::BITS)
                }
            }
        )*
    };
}

impl_transform_unit!(u8, u16);
