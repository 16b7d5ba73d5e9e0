// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Generator, KeyTables, Program, Seed, Sequence, TransformUnit, Vm};

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn fixture(seed: u32) -> (Sequence, KeyTables) {
    init_logging();

    let sequence = Sequence::new(Seed::new(seed));
    let tables = KeyTables::generate(&sequence);
    (sequence, tables)
}

pub(crate) fn generate<U: TransformUnit>(seed: u32, literal: &[U]) -> (KeyTables, Program<U>) {
    let (sequence, tables) = fixture(seed);
    let program = Generator::new(&sequence, &tables)
        .generate(literal)
        .expect("Failed to generate(..)");
    (tables, program)
}

pub(crate) fn roundtrip<U: TransformUnit>(seed: u32, literal: &[U]) -> Vec<U> {
    let (tables, program) = generate(seed, literal);
    let stack = Vm::new(tables.unmask_keys())
        .execute(&program)
        .expect("Failed to execute(..)");
    stack.decoded().to_vec()
}

pub(crate) fn contains_window(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}

pub(crate) fn program_bytes_u16(program: &Program<u16>) -> Vec<u8> {
    program
        .units()
        .iter()
        .flat_map(|unit| unit.to_le_bytes())
        .collect()
}

pub(crate) fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}
