// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::quote;

use crate::config::{BuildConfig, KeyMaterial};

pub(crate) fn material(seed: &str) -> KeyMaterial {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = BuildConfig::resolve(Some(seed), None, None).expect("Failed to resolve(..)");
    KeyMaterial::new(&config)
}

pub(crate) fn root() -> TokenStream2 {
    quote!(::vmstr)
}

/// Every literal token in `tokens`, in order, descending into groups.
pub(crate) fn literals(tokens: TokenStream2) -> Vec<String> {
    let mut out = Vec::new();

    for tree in tokens {
        match tree {
            TokenTree::Literal(literal) => out.push(literal.to_string()),
            TokenTree::Group(group) => out.extend(literals(group.stream())),
            TokenTree::Ident(_) | TokenTree::Punct(_) => {}
        }
    }

    out
}

pub(crate) fn suffixed(units: &[u32], suffix: &str) -> Vec<String> {
    units.iter().map(|unit| format!("{unit}{suffix}")).collect()
}

/// Wraps an expression in a function so prettyplease can print it.
pub(crate) fn pretty_expr(expr: TokenStream2) -> String {
    let file: syn::File = syn::parse2(quote! {
        fn __expanded() {
            let _ = #expr;
        }
    })
    .expect("Failed to parse2(..)");

    prettyplease::unparse(&file)
}
