// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Once-initialized storage for the static macro forms.
//!
//! `UNINIT -> IN_PROGRESS -> DONE`. The first caller decodes into the slot;
//! concurrent callers spin until the state is `DONE`. Decoding never
//! unwinds (faults abort), so a slot cannot be left `IN_PROGRESS`.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU8, Ordering};

use vmstr_core::{STACK_CAPACITY, Stack, TransformUnit};

const STATE_UNINIT: u8 = 0;
const STATE_IN_PROGRESS: u8 = 1;
const STATE_DONE: u8 = 2;

/// Per-call-site cache of a decoded string, terminator included.
pub struct StaticSlot<U: TransformUnit> {
    state: AtomicU8,
    len: UnsafeCell<usize>,
    units: UnsafeCell<[U; STACK_CAPACITY]>,
}

// SAFETY: `len` and `units` are written once by the thread that wins the
// UNINIT -> IN_PROGRESS transition and only read after DONE is observed with
// Acquire ordering.
unsafe impl<U: TransformUnit + Send + Sync> Sync for StaticSlot<U> {}

impl<U: TransformUnit> StaticSlot<U> {
    /// An empty slot.
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(STATE_UNINIT),
            len: UnsafeCell::new(0),
            units: UnsafeCell::new([U::ZERO; STACK_CAPACITY]),
        }
    }

    /// `true` once a value has been published.
    pub fn is_initialized(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_DONE
    }

    /// Returns the cached units, running `decode` on first use.
    #[inline]
    pub fn get_or_init<F>(&'static self, decode: F) -> &'static [U]
    where
        F: FnOnce() -> Stack<U>,
    {
        if !self.is_initialized() {
            self.init_slow(decode);
        }

        // SAFETY: DONE was observed, so the slot is fully written and never
        // written again.
        unsafe { self.published() }
    }

    #[cold]
    #[inline(never)]
    fn init_slow<F>(&self, decode: F)
    where
        F: FnOnce() -> Stack<U>,
    {
        match self.state.compare_exchange(
            STATE_UNINIT,
            STATE_IN_PROGRESS,
            Ordering::Acquire,
            Ordering::Relaxed,
        ) {
            Ok(_) => {
                let stack = decode();
                let decoded = stack.with_terminator();

                // SAFETY: this thread won the transition; nobody reads until DONE.
                let units = unsafe { &mut *self.units.get() };
                units[..decoded.len()].copy_from_slice(decoded);
                // SAFETY: same exclusive window as `units` above.
                unsafe { *self.len.get() = decoded.len() };

                #[cfg(test)]
                std::thread::sleep(std::time::Duration::from_millis(20));
                self.state.store(STATE_DONE, Ordering::Release);
            }
            Err(_) => {
                while self.state.load(Ordering::Acquire) != STATE_DONE {
                    core::hint::spin_loop();
                }
            }
        }
    }

    /// # Safety
    ///
    /// The state must be DONE.
    unsafe fn published(&'static self) -> &'static [U] {
        // SAFETY: guaranteed by the caller; a published slot is never written.
        let units = unsafe { &*self.units.get() };
        // SAFETY: `len` was written before DONE and never changes afterwards.
        let len = unsafe { *self.len.get() };
        &units[..len]
    }
}

impl<U: TransformUnit> Default for StaticSlot<U> {
    fn default() -> Self {
        Self::new()
    }
}
