// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process termination for programs that fail to decode.
//!
//! A macro-generated program always decodes against the key material it was
//! generated with, so reaching this is a corrupted artifact. There is no
//! error value a caller could act on.

use vmstr_core::VmFault;

/// Exit codes observable in tests, where aborting is replaced by exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum AbortCode {
    /// An invalid opcode was encountered.
    InvalidOpcode = 71,
    /// The stack underflowed.
    StackUnderflow = 72,
    /// The stack overflowed.
    StackOverflow = 73,
    /// Execution ran past the program without a terminator.
    ProgramOverrun = 74,
    /// A narrow program decoded to bytes that are not UTF-8.
    InvalidUtf8 = 75,
    /// A static narrow program decoded to bytes with an interior NUL.
    InteriorNul = 76,
}

impl From<VmFault> for AbortCode {
    fn from(fault: VmFault) -> Self {
        match fault {
            VmFault::InvalidOpcode { .. } => Self::InvalidOpcode,
            VmFault::StackUnderflow { .. } => Self::StackUnderflow,
            VmFault::StackOverflow { .. } => Self::StackOverflow,
            VmFault::ProgramOverrun => Self::ProgramOverrun,
        }
    }
}

#[cold]
#[inline(never)]
pub(crate) fn abort(code: AbortCode) -> ! {
    #[cfg(test)]
    std::process::exit(code as i32);

    #[cfg(not(test))]
    {
        let _ = code;
        unsafe { libc::abort() }
    }
}
