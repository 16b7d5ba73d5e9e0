// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Plain forward transforms shared by the generator and the interpreter.
//!
//! XOR and NOT are self-inverse. The rotations are inverses of each other,
//! which is why the generator emits the opposite-named combinator.

use crate::unit::TransformUnit;

/// `value ^ key`.
#[inline(always)]
pub fn xor<U: TransformUnit>(value: U, key: U) -> U {
    value ^ key
}

/// `!value`.
#[inline(always)]
pub fn not<U: TransformUnit>(value: U) -> U {
    !value
}

/// Rotates `value` left by `key mod BITS`.
#[inline(always)]
pub fn rotl<U: TransformUnit>(value: U, key: U) -> U {
    value.rotate_left(key.to_u32())
}

/// Rotates `value` right by `key mod BITS`.
#[inline(always)]
pub fn rotr<U: TransformUnit>(value: U, key: U) -> U {
    value.rotate_right(key.to_u32())
}
