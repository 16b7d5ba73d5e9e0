// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for seed parsing, generation and interpretation.

use thiserror::Error;

/// Errors raised while deriving a [`Seed`](crate::Seed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeedError {
    /// Clock strings are exactly `HH:MM:SS`.
    #[error("InvalidClockLength[expected 8 bytes (HH:MM:SS), got {len}]")]
    InvalidClockLength {
        /// Length of the rejected string.
        len: usize,
    },

    /// A digit position held something else.
    #[error("InvalidClockDigit[offset {offset}]")]
    InvalidClockDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },

    /// A separator position did not hold `:`.
    #[error("InvalidClockSeparator[offset {offset}]")]
    InvalidClockSeparator {
        /// Byte offset of the offending character.
        offset: usize,
    },

    /// An explicit seed override was not a decimal or `0x` hex `u32`.
    #[error("InvalidSeedOverride")]
    InvalidSeedOverride,
}

/// Build-time rejections. Both variants carry the limits involved so the
/// diagnostic can name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The decoded string plus its terminator would not fit the VM stack.
    #[error(
        "literal has {len} units but the decode stack holds {capacity} units including the terminator (at most {max_len} literal units)"
    )]
    StackCapacityExceeded {
        /// Literal length in transform units.
        len: usize,
        /// Longest accepted literal.
        max_len: usize,
        /// Stack capacity in units.
        capacity: usize,
    },

    /// The generated program would not fit the fixed program capacity.
    ///
    /// Unreachable with the current capacities: the stack check rejects
    /// anything longer than `STACK_CAPACITY - 1` units first, and that many
    /// five-slot units plus the terminator need 996 slots. Kept as a guard
    /// in case either capacity changes.
    #[error(
        "literal has {len} units and needs {required} program slots, but a program holds {capacity}"
    )]
    ProgramCapacityExceeded {
        /// Literal length in transform units.
        len: usize,
        /// Exact slot count the program would need.
        required: usize,
        /// Program capacity in units.
        capacity: usize,
    },
}

/// Interpreter faults. None of these is reachable for a program produced by
/// [`Generator`](crate::Generator) and executed against the matching tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VmFault {
    /// The unit at `position` is not a known opcode.
    #[error("InvalidOpcode[unit {unit:#x} at {position}]")]
    InvalidOpcode {
        /// Raw unit value.
        unit: u32,
        /// Program slot.
        position: usize,
    },

    /// An instruction popped more values than the stack held.
    #[error("StackUnderflow[at {position}]")]
    StackUnderflow {
        /// Program slot of the instruction.
        position: usize,
    },

    /// An instruction pushed past the stack capacity.
    #[error("StackOverflow[at {position}]")]
    StackOverflow {
        /// Program slot of the instruction.
        position: usize,
    },

    /// Execution ran off the end of the program without a terminator.
    #[error("ProgramOverrun")]
    ProgramOverrun,
}
