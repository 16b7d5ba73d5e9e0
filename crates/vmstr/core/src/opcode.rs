// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Instruction set.

use crate::unit::TransformUnit;

/// VM opcodes and their unit encodings.
///
/// `7` sits between the combinators and [`Opcode::Terminator`] and is never
/// emitted; like every other unlisted value it decodes to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Unmask the next slot and push it. Occupies two slots.
    Push = 0,
    /// Pop key and value, push `value ^ key`.
    Xor = 1,
    /// Pop value, push `!value`.
    Not = 2,
    /// Pop key and value, push `value` rotated right by `key`.
    RotateRight = 3,
    /// Pop key and value, push `value` rotated left by `key`.
    RotateLeft = 4,
    /// Like [`Opcode::Xor`], computed through [`opaque_xor`](crate::opaque_xor).
    AltXor = 5,
    /// Like [`Opcode::Not`], computed through [`opaque_not`](crate::opaque_not).
    AltNot = 6,
    /// Push a zero unit and halt.
    Terminator = 8,
}

impl Opcode {
    /// Decodes a raw program unit.
    #[inline(always)]
    pub fn decode(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Push),
            1 => Some(Self::Xor),
            2 => Some(Self::Not),
            3 => Some(Self::RotateRight),
            4 => Some(Self::RotateLeft),
            5 => Some(Self::AltXor),
            6 => Some(Self::AltNot),
            8 => Some(Self::Terminator),
            _ => None,
        }
    }

    /// The opcode as a program unit.
    #[inline(always)]
    pub fn encode<U: TransformUnit>(self) -> U {
        U::from_u32_truncating(self as u32)
    }

    /// Number of program slots the instruction occupies.
    pub const fn width(self) -> usize {
        match self {
            Self::Push => 2,
            _ => 1,
        }
    }
}
