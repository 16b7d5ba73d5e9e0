// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bytecode generation.
//!
//! Each literal unit `i` picks a [`Strategy`] from `Rand(i) mod 7`. Pair
//! strategies draw their key as `Rand(i) mod U::MAX`, transform the unit
//! forward, and emit `PUSH value, PUSH key, <combinator>`. The rotation
//! strategies emit the opposite-named combinator because the runtime has to
//! undo the build-time rotation.
//!
//! Every operand is masked with `mask[p]`, where `p` is the slot the operand
//! occupies in the generated program, not the index of the source unit.

use log::{debug, trace};

use crate::error::GenerateError;
use crate::opcode::Opcode;
use crate::prng::Sequence;
use crate::program::{PROGRAM_CAPACITY, Program, STACK_CAPACITY};
use crate::tables::KeyTables;
use crate::transform::{not, rotl, rotr, xor};
use crate::unit::TransformUnit;

/// How one literal unit is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A single masked push.
    PlainPush,
    /// XOR with a key, undone by [`Opcode::Xor`].
    Xor,
    /// Complement, undone by [`Opcode::Not`].
    Not,
    /// Rotate right at build time, undone by [`Opcode::RotateLeft`].
    RotateRight,
    /// Rotate left at build time, undone by [`Opcode::RotateRight`].
    RotateLeft,
    /// XOR with a key, undone by [`Opcode::AltXor`].
    AltXor,
    /// Complement, undone by [`Opcode::AltNot`].
    AltNot,
}

impl Strategy {
    /// Number of strategies; the modulus of the selection draw.
    pub const COUNT: u32 = 7;

    /// Maps a sequence draw onto a strategy.
    pub fn select(draw: u32) -> Self {
        match draw % Self::COUNT {
            1 => Self::Xor,
            2 => Self::Not,
            3 => Self::RotateRight,
            4 => Self::RotateLeft,
            5 => Self::AltXor,
            6 => Self::AltNot,
            _ => Self::PlainPush,
        }
    }

    /// The opcode emitted after the operands, if any.
    pub fn combinator(self) -> Option<Opcode> {
        match self {
            Self::PlainPush => None,
            Self::Xor => Some(Opcode::Xor),
            Self::Not => Some(Opcode::Not),
            Self::RotateRight => Some(Opcode::RotateLeft),
            Self::RotateLeft => Some(Opcode::RotateRight),
            Self::AltXor => Some(Opcode::AltXor),
            Self::AltNot => Some(Opcode::AltNot),
        }
    }

    /// Program slots used for one literal unit.
    pub fn footprint(self) -> usize {
        match self {
            Self::PlainPush => 2,
            Self::Not | Self::AltNot => 3,
            Self::Xor | Self::RotateRight | Self::RotateLeft | Self::AltXor => 5,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::PlainPush => 0,
            Self::Xor => 1,
            Self::Not => 2,
            Self::RotateRight => 3,
            Self::RotateLeft => 4,
            Self::AltXor => 5,
            Self::AltNot => 6,
        }
    }
}

/// Sequential writer over a zeroed program buffer.
struct ProgramWriter<'t, U: TransformUnit> {
    units: [U; PROGRAM_CAPACITY],
    cursor: usize,
    mask: &'t [u8; PROGRAM_CAPACITY],
}

impl<'t, U: TransformUnit> ProgramWriter<'t, U> {
    fn new(mask: &'t [u8; PROGRAM_CAPACITY]) -> Self {
        Self {
            units: [U::ZERO; PROGRAM_CAPACITY],
            cursor: 0,
            mask,
        }
    }

    fn opcode(&mut self, opcode: Opcode) {
        self.units[self.cursor] = opcode.encode();
        self.cursor += 1;
    }

    /// Emits `PUSH` followed by `raw` masked with the operand slot's mask.
    fn push(&mut self, raw: U) {
        self.opcode(Opcode::Push);
        self.units[self.cursor] = raw ^ U::from_mask(self.mask[self.cursor]);
        self.cursor += 1;
    }

    fn finish(self) -> Program<U> {
        Program::from_prefix(&self.units[..self.cursor])
    }
}

/// Turns literals into masked programs for one seed.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'t> {
    sequence: Sequence,
    tables: &'t KeyTables,
}

impl<'t> Generator<'t> {
    /// Binds a sequence to the tables generated from it.
    pub fn new(sequence: &Sequence, tables: &'t KeyTables) -> Self {
        Self {
            sequence: *sequence,
            tables,
        }
    }

    /// Strategy chosen for literal unit `index`.
    pub fn strategy_at(&self, index: usize) -> Strategy {
        Strategy::select(self.sequence.draw(index as u32))
    }

    /// Exact slot count for a literal of `len` units, terminator included.
    pub fn required_slots(&self, len: usize) -> usize {
        (0..len)
            .map(|index| self.strategy_at(index).footprint())
            .sum::<usize>()
            + Opcode::Terminator.width()
    }

    /// Checks both capacities for a literal of `len` units.
    pub fn check_capacity(&self, len: usize) -> Result<usize, GenerateError> {
        // Peak depth is `len + 1`: `len - 1` finished units plus two operands,
        // or `len` units plus the terminator.
        if len + 1 > STACK_CAPACITY {
            return Err(GenerateError::StackCapacityExceeded {
                len,
                max_len: STACK_CAPACITY - 1,
                capacity: STACK_CAPACITY,
            });
        }

        let required = self.required_slots(len);
        if required > PROGRAM_CAPACITY {
            return Err(GenerateError::ProgramCapacityExceeded {
                len,
                required,
                capacity: PROGRAM_CAPACITY,
            });
        }

        Ok(required)
    }

    /// Generates the program that reconstructs `literal`.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateError`] when the literal does not fit the stack or
    /// the program capacity. Nothing is truncated.
    pub fn generate<U: TransformUnit>(&self, literal: &[U]) -> Result<Program<U>, GenerateError> {
        let required = self.check_capacity(literal.len())?;

        let mut writer = ProgramWriter::<U>::new(self.tables.mask());
        let mut histogram = [0usize; Strategy::COUNT as usize];

        for (index, &unit) in literal.iter().enumerate() {
            let draw = self.sequence.draw(index as u32);
            let strategy = Strategy::select(draw);
            let key = U::from_u32_truncating(draw % U::MAX.to_u32());

            histogram[strategy.index()] += 1;
            trace!("unit {index}: {strategy:?}");

            match strategy {
                Strategy::PlainPush => writer.push(unit),
                Strategy::Xor | Strategy::AltXor => {
                    writer.push(xor(unit, key));
                    writer.push(key);
                }
                Strategy::RotateRight => {
                    writer.push(rotr(unit, key));
                    writer.push(key);
                }
                Strategy::RotateLeft => {
                    writer.push(rotl(unit, key));
                    writer.push(key);
                }
                Strategy::Not | Strategy::AltNot => writer.push(not(unit)),
            }

            if let Some(combinator) = strategy.combinator() {
                writer.opcode(combinator);
            }
        }

        writer.opcode(Opcode::Terminator);
        debug_assert_eq!(writer.cursor, required);

        debug!(
            "generated {}-bit program: {} units, {} slots, strategies {:?}",
            U::BITS,
            literal.len(),
            required,
            histogram
        );

        Ok(writer.finish())
    }
}
