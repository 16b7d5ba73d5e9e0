// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for vmstr.

use vmstr_core::Program;

use crate::keys::unmask_keys;

/// Runs an ignored test as a subprocess and returns its exit code.
pub fn run_test_as_subprocess(test_name: &str) -> Option<i32> {
    let exe = std::env::current_exe().expect("Failed to current_exe()");
    let status = std::process::Command::new(exe)
        .args([
            "--exact",
            test_name,
            "--ignored",
            "--test-threads=1",
            "--nocapture",
        ])
        .status()
        .expect("Failed to run subprocess");

    status.code()
}

/// Builds a program of plain pushes against this build's key material,
/// without any validation of the decoded bytes.
pub fn plain_program(units: &[u8]) -> &'static Program<u8> {
    let keys = unmask_keys();
    let mut prefix = Vec::with_capacity(units.len() * 2 + 1);

    for &unit in units {
        prefix.push(0);
        prefix.push(unit ^ keys.mask_at(prefix.len()));
    }
    prefix.push(8);

    Box::leak(Box::new(Program::from_prefix(&prefix)))
}

pub fn leak(prefix: &[u8]) -> &'static Program<u8> {
    Box::leak(Box::new(Program::from_prefix(prefix)))
}
