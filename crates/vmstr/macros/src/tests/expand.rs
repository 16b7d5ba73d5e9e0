// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use syn::LitStr;
use proc_macro2::Span;

use crate::expand::{OutputKind, expand_key_material, expand_literal, find_root_with_candidates};
use crate::tests::support::{literals, material, pretty_expr, root, suffixed};

fn lit(text: &str) -> LitStr {
    LitStr::new(text, Span::call_site())
}

// === === === === === === === === === ===
// find_root_with_candidates
// === === === === === === === === === ===

#[test]
fn test_find_root_with_candidates_not_found() {
    let ts = find_root_with_candidates(&["a", "b"]);
    assert!(ts.to_string().contains("compile_error"));
}

#[test]
fn test_find_root_with_candidates_itself() {
    let ts = find_root_with_candidates(&["vmstr-macros"]);
    assert_eq!(ts.to_string(), ":: vmstr_macros");
}

#[test]
fn test_find_root_with_candidates_name() {
    let ts = find_root_with_candidates(&["nonexistent", "vmstr-core"]);
    assert_eq!(ts.to_string(), ":: vmstr_core");
}

// === === === === === === === === === ===
// expand_literal
// === === === === === === === === === ===

#[test]
fn test_expand_narrow_golden_program() {
    let material = material("0");
    let ts = expand_literal(&root(), &material, OutputKind::Narrow, &lit("HI"))
        .expect("Failed to expand_literal(..)");

    assert_eq!(
        literals(ts.clone()),
        suffixed(&[0, 189, 0, 93, 3, 0, 87, 0, 168, 3, 8], "u8")
    );

    let pretty = pretty_expr(ts);
    assert!(pretty.contains("static __VMSTR_PROGRAM: ::vmstr::__private::Program<u8>"));
    assert!(pretty.contains("::vmstr::__private::decode_string(&__VMSTR_PROGRAM)"));
    assert!(!pretty.contains("__VMSTR_SLOT"));
}

#[test]
fn test_expand_narrow_utf8_literal() {
    let material = material("0");
    let ts = expand_literal(&root(), &material, OutputKind::Narrow, &lit("é"))
        .expect("Failed to expand_literal(..)");

    assert_eq!(
        literals(ts),
        suffixed(&[0, 170, 0, 93, 3, 0, 75, 0, 168, 3, 8], "u8")
    );
}

#[test]
fn test_expand_wide_golden_program() {
    let material = material("0");
    let ts = expand_literal(&root(), &material, OutputKind::Wide, &lit("HI"))
        .expect("Failed to expand_literal(..)");

    assert_eq!(
        literals(ts.clone()),
        suffixed(&[0, 36_909, 0, 12_301, 3, 0, 36_986, 0, 49_385, 3, 8], "u16")
    );
    assert!(pretty_expr(ts).contains("::vmstr::__private::decode_wide(&__VMSTR_PROGRAM)"));
}

#[test]
fn test_expand_static_forms_use_a_slot() {
    let material = material("0");

    let ts = expand_literal(&root(), &material, OutputKind::StaticNarrow, &lit("HI"))
        .expect("Failed to expand_literal(..)");
    let pretty = pretty_expr(ts);
    assert!(pretty.contains("static __VMSTR_SLOT: ::vmstr::__private::StaticSlot<u8>"));
    assert!(pretty.contains("decode_static_cstr(&__VMSTR_PROGRAM, &__VMSTR_SLOT)"));

    let ts = expand_literal(&root(), &material, OutputKind::StaticWide, &lit("é"))
        .expect("Failed to expand_literal(..)");
    assert_eq!(
        literals(ts.clone()),
        suffixed(&[0, 53_804, 0, 12_301, 3, 8], "u16")
    );
    let pretty = pretty_expr(ts);
    assert!(pretty.contains("static __VMSTR_SLOT: ::vmstr::__private::StaticSlot<u16>"));
    assert!(pretty.contains("decode_static_wide(&__VMSTR_PROGRAM, &__VMSTR_SLOT)"));
}

#[test]
fn test_expand_empty_literal() {
    let material = material("0");
    let ts = expand_literal(&root(), &material, OutputKind::Narrow, &lit(""))
        .expect("Failed to expand_literal(..)");

    assert_eq!(literals(ts), vec!["8u8".to_string()]);
}

#[test]
fn test_expansion_never_contains_the_literal() {
    let material = material("45296");

    for text in ["sk_live_51Hx", "password123", "hello world"] {
        for kind in [
            OutputKind::Narrow,
            OutputKind::StaticNarrow,
            OutputKind::Wide,
            OutputKind::StaticWide,
        ] {
            let ts = expand_literal(&root(), &material, kind, &lit(text))
                .expect("Failed to expand_literal(..)");
            assert!(!ts.to_string().contains(text));
        }
    }
}

#[test]
fn test_static_forms_reject_interior_nul() {
    let material = material("0");

    for kind in [OutputKind::StaticNarrow, OutputKind::StaticWide] {
        let err = expand_literal(&root(), &material, kind, &lit("a\0b"))
            .expect_err("Expected interior NUL rejection");
        assert_eq!(
            err.to_string(),
            format!("{}!: literal contains an interior NUL", kind.macro_name())
        );
    }

    // Owned forms keep embedded NULs.
    let ts = expand_literal(&root(), &material, OutputKind::Narrow, &lit("a\0b"))
        .expect("Failed to expand_literal(..)");
    assert!(!literals(ts).is_empty());
}

#[test]
fn test_oversized_literal_is_a_compile_error() {
    let material = material("0");
    let text = "x".repeat(200);

    let err = expand_literal(&root(), &material, OutputKind::Narrow, &lit(&text))
        .expect_err("Expected capacity rejection");
    let message = err.to_string();

    assert!(message.starts_with("vm_str!: literal has 200 units"));
    assert!(message.contains("at most 199 literal units"));
    assert!(message.contains("\"xxxxxxxxxxxxxxxx...\""));
}

#[test]
fn test_longest_literal_expands() {
    let material = material("0");
    let text = "x".repeat(199);

    let ts = expand_literal(&root(), &material, OutputKind::Wide, &lit(&text))
        .expect("Failed to expand_literal(..)");
    assert_eq!(literals(ts).len(), 797);
}

#[test]
fn test_wide_capacity_counts_utf16_units() {
    let material = material("0");
    // 100 astral characters are 200 UTF-16 units.
    let text = "😀".repeat(100);

    let err = expand_literal(&root(), &material, OutputKind::Wide, &lit(&text))
        .expect_err("Expected capacity rejection");
    assert!(err.to_string().starts_with("vm_wstr!: literal has 200 units"));

    let narrow = expand_literal(&root(), &material, OutputKind::Narrow, &lit(&"😀".repeat(49)));
    assert!(narrow.is_ok());
}

// === === === === === === === === === ===
// expand_key_material
// === === === === === === === === === ===

#[test]
fn test_expand_key_material() {
    let material = material("0");
    let ts = expand_key_material(&root(), &material);
    let values = literals(ts.clone());

    // 1000 unmask entries, then the share and its complement.
    assert_eq!(values.len(), 1002);
    assert_eq!(
        &values[..8],
        suffixed(&[14, 74, 23, 83, 16, 92, 25, 37], "u8").as_slice()
    );
    assert_eq!(&values[1000..], &["119u8".to_string(), "16u8".to_string()]);

    let text = ts.to_string();
    assert!(text.contains("UNMASK_TABLE"));
    assert!(text.contains("KEY_SHARE_COMPLEMENT"));
    assert!(text.contains(":: vmstr :: __private :: PROGRAM_CAPACITY"));
}

#[test]
fn test_key_material_does_not_expose_global_key() {
    let material = material("0");
    let values = literals(expand_key_material(&root(), &material));

    // The global key (103) never appears as a share.
    assert_ne!(values[1000], "103u8");
    assert_ne!(values[1001], "103u8");
}
