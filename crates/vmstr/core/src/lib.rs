// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # vmstr-core
//!
//! Build-time bytecode generation and runtime interpretation for string
//! literals that must never appear as contiguous bytes in a compiled artifact.
//!
//! A literal is turned into a small randomized stack program. Every operand of
//! that program is masked with a per-position value from a pseudo-random
//! [`KeyTables::mask`] table. The artifact only carries the
//! [`KeyTables::unmask`] table plus a split [`KeyTables::global_key`], from
//! which the interpreter re-derives each mask while executing.
//!
//! ## Pipeline
//!
//! ```rust
//! use vmstr_core::{Generator, KeyTables, Seed, Sequence, Vm};
//!
//! let sequence = Sequence::new(Seed::new(0));
//! let tables = KeyTables::generate(&sequence);
//!
//! // Build time
//! let program = Generator::new(&sequence, &tables)
//!     .generate::<u8>(b"HI")
//!     .expect("literal fits");
//!
//! // Run time
//! let stack = Vm::new(tables.unmask_keys())
//!     .execute(&program)
//!     .expect("well-formed program");
//!
//! assert_eq!(stack.decoded(), b"HI");
//! ```
//!
//! ## Scope
//!
//! This is not a cipher. It only defeats static inspection of the artifact;
//! decoded bytes are plainly visible to anything that can read process memory.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod generator;
mod opaque;
mod opcode;
mod prng;
mod program;
mod seed;
mod tables;
mod unit;
mod vm;

pub mod transform;

pub use error::{GenerateError, SeedError, VmFault};
pub use generator::{Generator, Strategy};
pub use opaque::{opaque_not, opaque_xor};
pub use opcode::Opcode;
pub use prng::{LCG_INCREMENT, LCG_MULTIPLIER, LCG_RESULT_MASK, Sequence, lcg_next};
pub use program::{PROGRAM_CAPACITY, Program, STACK_CAPACITY};
pub use seed::Seed;
pub use tables::{GLOBAL_KEY_INDEX, KEY_SHARE_INDEX, KeyTables, UnmaskKeys};
pub use unit::TransformUnit;
pub use vm::{Stack, Vm};
