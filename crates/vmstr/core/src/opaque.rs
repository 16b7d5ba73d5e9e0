// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Arithmetic spellings of XOR and NOT.
//!
//! Both functions are exact over the whole unit range and contain no `^`.
//! They are `#[inline(always)]` so each use site gets its own copy of the
//! expression tree.

use crate::unit::TransformUnit;

#[inline(always)]
fn add<U: TransformUnit>(x: U, y: U) -> U {
    x.wrapping_add(y)
}

#[inline(always)]
fn sub<U: TransformUnit>(x: U, y: U) -> U {
    x.wrapping_sub(y)
}

/// `a ^ b`, spelled with complement, AND, OR and wrapping add/sub.
///
/// Identity used: with `e = !a | !b` and `s = -!a` (that is `a + 1`),
/// `(e & s) + (e | s) = e + s`, `(x & b) + (x | b) = x + b`, and
/// `(!a & !b) | b = !a | b`. The whole expression reduces to
/// `(b & !a) + (a & !b)`, which is `a ^ b`.
#[inline(always)]
pub fn opaque_xor<U: TransformUnit>(a: U, b: U) -> U {
    let not_a = !a;
    let not_b = !b;

    let either = not_a | not_b;
    let succ = not_a.wrapping_neg();
    let folded = add(either & succ, either | succ);

    let both_clear = not_a & not_b;
    let lhs = add(folded & b, folded | b);
    let rhs = sub(add(both_clear & b, both_clear | b), not_a);

    sub(lhs, rhs)
}

/// `!a`, padded with a `b`-dependent term that always cancels to zero.
#[inline(always)]
pub fn opaque_not<U: TransformUnit>(a: U, b: U) -> U {
    let noise = add(sub(!a | b, !a), add(a & !b, b));
    let zero = sub(noise, noise);

    add(sub(!!a | zero, !!a), !a | zero)
}
