// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::tests::support::roundtrip;
use crate::{
    GenerateError, Generator, KeyTables, STACK_CAPACITY, Seed, Sequence, opaque_not, opaque_xor,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_roundtrip_narrow(
        seed in any::<u32>(),
        literal in prop::collection::vec(any::<u8>(), 0..STACK_CAPACITY),
    ) {
        prop_assert_eq!(roundtrip(seed, &literal), literal);
    }

    #[test]
    fn prop_roundtrip_wide(
        seed in any::<u32>(),
        literal in prop::collection::vec(any::<u16>(), 0..STACK_CAPACITY),
    ) {
        prop_assert_eq!(roundtrip(seed, &literal), literal);
    }

    #[test]
    fn prop_roundtrip_text(seed in 0u32..86_400, text in "\\PC{0,45}") {
        let narrow = roundtrip(seed, text.as_bytes());
        prop_assert_eq!(String::from_utf8(narrow).ok(), Some(text.clone()));

        let units: Vec<u16> = text.encode_utf16().collect();
        let wide = roundtrip(seed, &units);
        prop_assert_eq!(String::from_utf16(&wide).ok(), Some(text));
    }

    #[test]
    fn prop_oversized_literals_rejected(seed in any::<u32>(), len in STACK_CAPACITY..STACK_CAPACITY * 3) {
        let sequence = Sequence::new(Seed::new(seed));
        let tables = KeyTables::generate(&sequence);
        let literal = vec![0x41u8; len];

        let result = Generator::new(&sequence, &tables).generate(&literal);
        prop_assert_eq!(
            result.map(|program| program.len()),
            Err(GenerateError::StackCapacityExceeded {
                len,
                max_len: STACK_CAPACITY - 1,
                capacity: STACK_CAPACITY,
            })
        );
    }

    #[test]
    fn prop_opaque_identities_u16(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(opaque_xor(a, b), a ^ b);
        prop_assert_eq!(opaque_not(a, b), !a);
    }

    #[test]
    fn prop_unmask_links_mask(seed in any::<u32>()) {
        let tables = KeyTables::generate(&Sequence::new(Seed::new(seed)));
        let keys = tables.unmask_keys();

        for position in (0..tables.mask().len()).step_by(37) {
            prop_assert_eq!(tables.unmask()[position], tables.mask()[position] ^ tables.global_key());
            prop_assert_eq!(keys.mask_at(position), tables.mask()[position]);
        }
    }
}
