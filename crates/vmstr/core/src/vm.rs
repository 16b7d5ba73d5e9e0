// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Straight-line stack interpreter.
//!
//! The instruction pointer only moves forward, by each opcode's width, until
//! [`Opcode::Terminator`]. Program slots are read with volatile loads and
//! every step ends in a compiler fence, so a program held in `static` storage
//! cannot be constant-folded back into its plaintext.

use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

use crate::error::VmFault;
use crate::opaque::{opaque_not, opaque_xor};
use crate::opcode::Opcode;
use crate::program::{PROGRAM_CAPACITY, Program, STACK_CAPACITY};
use crate::tables::UnmaskKeys;
use crate::transform::{not, rotl, rotr, xor};
use crate::unit::TransformUnit;

/// Decode stack. Local to one [`Vm::execute`] call and wiped on drop.
pub struct Stack<U: TransformUnit> {
    units: [U; STACK_CAPACITY],
    depth: usize,
}

impl<U: TransformUnit> core::fmt::Debug for Stack<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[REDACTED Stack depth={}]", self.depth)
    }
}

impl<U: TransformUnit> Stack<U> {
    fn new() -> Self {
        Self {
            units: [U::ZERO; STACK_CAPACITY],
            depth: 0,
        }
    }

    #[inline(always)]
    fn push(&mut self, value: U, position: usize) -> Result<(), VmFault> {
        if self.depth >= STACK_CAPACITY {
            return Err(VmFault::StackOverflow { position });
        }

        // SAFETY: `depth < STACK_CAPACITY`.
        unsafe { ptr::write_volatile(&mut self.units[self.depth], value) };
        self.depth += 1;

        Ok(())
    }

    #[inline(always)]
    fn pop(&mut self, position: usize) -> Result<U, VmFault> {
        if self.depth == 0 {
            return Err(VmFault::StackUnderflow { position });
        }

        self.depth -= 1;
        // SAFETY: `depth < STACK_CAPACITY`.
        Ok(unsafe { ptr::read_volatile(&self.units[self.depth]) })
    }

    /// Pops `(value, key)`; the key is on top.
    #[inline(always)]
    fn pop_pair(&mut self, position: usize) -> Result<(U, U), VmFault> {
        let key = self.pop(position)?;
        let value = self.pop(position)?;
        Ok((value, key))
    }

    /// Decoded units, without the terminator.
    pub fn decoded(&self) -> &[U] {
        &self.units[..self.depth.saturating_sub(1)]
    }

    /// Decoded units followed by the zero terminator.
    pub fn with_terminator(&self) -> &[U] {
        &self.units[..self.depth]
    }

    /// Occupied slots, terminator included.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<U: TransformUnit> Drop for Stack<U> {
    fn drop(&mut self) {
        for unit in self.units.iter_mut() {
            // SAFETY: `unit` is a valid exclusive reference.
            unsafe { ptr::write_volatile(unit, U::ZERO) };
        }
        compiler_fence(Ordering::SeqCst);
        self.depth = 0;
    }
}

/// Interpreter bound to one set of unmask keys.
#[derive(Debug, Clone, Copy)]
pub struct Vm<'k> {
    keys: UnmaskKeys<'k>,
}

impl<'k> Vm<'k> {
    /// Creates an interpreter over `keys`.
    pub const fn new(keys: UnmaskKeys<'k>) -> Self {
        Self { keys }
    }

    /// Runs `program` to its terminator.
    ///
    /// # Errors
    ///
    /// Returns a [`VmFault`] for malformed programs. A fault never comes with
    /// a partially decoded stack.
    pub fn execute<U: TransformUnit>(&self, program: &Program<U>) -> Result<Stack<U>, VmFault> {
        let units = program.units();
        let mut stack = Stack::new();
        let mut ip = 0usize;

        while ip < PROGRAM_CAPACITY {
            // SAFETY: `ip < PROGRAM_CAPACITY`.
            let raw = unsafe { ptr::read_volatile(&units[ip]) }.to_u32();
            let opcode = Opcode::decode(raw).ok_or(VmFault::InvalidOpcode {
                unit: raw,
                position: ip,
            })?;
            let zero = U::from_mask(self.keys.opaque_zero(ip));

            match opcode {
                Opcode::Push => {
                    let slot = ip + 1;
                    if slot >= PROGRAM_CAPACITY {
                        return Err(VmFault::ProgramOverrun);
                    }

                    // SAFETY: `slot < PROGRAM_CAPACITY`.
                    let operand = unsafe { ptr::read_volatile(&units[slot]) };
                    let mask = U::from_mask(self.keys.mask_at(slot));
                    stack.push(operand ^ mask, ip)?;
                }
                Opcode::Xor => {
                    let (value, key) = stack.pop_pair(ip)?;
                    stack.push(xor(value, key.wrapping_add(zero)), ip)?;
                }
                Opcode::Not => {
                    let value = stack.pop(ip)?;
                    stack.push(not(value.wrapping_add(zero)), ip)?;
                }
                Opcode::RotateRight => {
                    let (value, key) = stack.pop_pair(ip)?;
                    stack.push(rotr(value, key.wrapping_add(zero)), ip)?;
                }
                Opcode::RotateLeft => {
                    let (value, key) = stack.pop_pair(ip)?;
                    stack.push(rotl(value, key.wrapping_add(zero)), ip)?;
                }
                Opcode::AltXor => {
                    let (value, key) = stack.pop_pair(ip)?;
                    stack.push(opaque_xor(value, key.wrapping_add(zero)), ip)?;
                }
                Opcode::AltNot => {
                    let value = stack.pop(ip)?;
                    stack.push(opaque_not(value.wrapping_add(zero), value), ip)?;
                }
                Opcode::Terminator => {
                    stack.push(U::ZERO, ip)?;
                    compiler_fence(Ordering::SeqCst);
                    return Ok(stack);
                }
            }

            compiler_fence(Ordering::SeqCst);
            ip += opcode.width();
        }

        Err(VmFault::ProgramOverrun)
    }
}
