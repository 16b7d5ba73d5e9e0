// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # vmstr
//!
//! String literals that never appear as contiguous bytes in the compiled
//! artifact.
//!
//! Each macro compiles its literal into a small randomized stack program at
//! build time. Every operand is masked per program position, and the masks
//! are only recoverable at runtime from a key table that is itself split
//! from a global key. A tiny interpreter rebuilds the string when the
//! expression is evaluated.
//!
//! ## Quick Start
//!
//! ```rust
//! use vmstr::{vm_cstr, vm_cwstr, vm_str, vm_wstr};
//!
//! let token: String = vm_str!("sk_live_51Hx");
//! assert_eq!(token, "sk_live_51Hx");
//!
//! let library = vm_cstr!("libcrypto.so.3");
//! assert_eq!(library.to_bytes(), b"libcrypto.so.3");
//!
//! let wide = vm_wstr!("Hëllo");
//! assert_eq!(wide.to_string_lossy(), "Hëllo");
//!
//! let units = vm_cwstr!("C:\\Windows");
//! assert_eq!(units.last(), Some(&0));
//! ```
//!
//! ## What's Included
//!
//! - [`vm_str!`]: owned `String`, decoded on every evaluation
//! - [`vm_cstr!`]: `&'static CStr`, decoded once per call site
//! - [`vm_wstr!`]: owned [`WideString`] of UTF-16 units
//! - [`vm_cwstr!`]: NUL-terminated `&'static [u16]`, decoded once per call site
//!
//! ## Seed
//!
//! The seed comes from the UTC wall clock when `vmstr-macros` is built, or
//! from `SOURCE_DATE_EPOCH` for reproducible builds. `VMSTR_SEED` (decimal
//! or `0x` hex) overrides both.
//!
//! ## Scope
//!
//! This hides literals from static inspection of the artifact only. Decoded
//! strings live in ordinary process memory.
//!
//! ## Failure
//!
//! A program that fails to decode aborts the process. See [`AbortCode`].
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate self as vmstr;

#[cfg(test)]
mod tests;

mod abort;
mod decode;
mod keys;
mod slot;
mod wide;

pub use abort::AbortCode;
pub use vmstr_core::{PROGRAM_CAPACITY, STACK_CAPACITY};
pub use vmstr_macros::{vm_cstr, vm_cwstr, vm_str, vm_wstr};
pub use wide::WideString;

/// Expansion support. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use vmstr_core::{PROGRAM_CAPACITY, Program};

    pub use crate::decode::{decode_static_cstr, decode_static_wide, decode_string, decode_wide};
    pub use crate::slot::StaticSlot;
}
