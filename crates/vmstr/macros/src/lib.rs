// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macros for the `vmstr` crate.
//!
//! Each macro takes one string literal, compiles it into a masked bytecode
//! program at build time, and expands to a call into the `vmstr` runtime that
//! interprets the program. The literal itself never reaches the artifact.
//!
//! Use these through `vmstr`, which re-exports them.
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod expand;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use syn::{LitStr, parse_macro_input};

use crate::config::key_material;
use crate::expand::{OutputKind, expand_key_material, expand_literal, find_root_with_candidates};

const ROOT_CANDIDATES: &[&str] = &["vmstr"];

fn config_error(err: impl core::fmt::Display) -> TokenStream2 {
    syn::Error::new(Span::call_site(), format!("vmstr: {err}")).to_compile_error()
}

fn expand(kind: OutputKind, literal: &LitStr) -> TokenStream2 {
    let material = match key_material() {
        Ok(material) => material,
        Err(err) => return config_error(err),
    };
    let root = find_root_with_candidates(ROOT_CANDIDATES);

    expand_literal(&root, material, kind, literal).unwrap_or_else(|e| e.to_compile_error())
}

/// Expands to a `String` holding the literal, decoded on every evaluation.
///
/// ```rust,ignore
/// let greeting: String = vmstr::vm_str!("hello world");
/// assert_eq!(greeting, "hello world");
/// ```
#[proc_macro]
pub fn vm_str(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    expand(OutputKind::Narrow, &literal).into()
}

/// Expands to a `&'static CStr`, decoded once per call site.
///
/// The literal must not contain an interior NUL.
///
/// ```rust,ignore
/// let name: &'static std::ffi::CStr = vmstr::vm_cstr!("libfoo.so");
/// assert_eq!(name.to_bytes(), b"libfoo.so");
/// ```
#[proc_macro]
pub fn vm_cstr(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    expand(OutputKind::StaticNarrow, &literal).into()
}

/// Expands to a `vmstr::WideString` holding the UTF-16 form of the literal.
#[proc_macro]
pub fn vm_wstr(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    expand(OutputKind::Wide, &literal).into()
}

/// Expands to a NUL-terminated `&'static [u16]`, decoded once per call site.
///
/// The literal must not contain an interior NUL.
#[proc_macro]
pub fn vm_cwstr(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    expand(OutputKind::StaticWide, &literal).into()
}

#[doc(hidden)]
#[proc_macro]
pub fn __key_material(input: TokenStream) -> TokenStream {
    let input = TokenStream2::from(input);
    if !input.is_empty() {
        return syn::Error::new_spanned(input, "__key_material! takes no arguments")
            .to_compile_error()
            .into();
    }

    let material = match key_material() {
        Ok(material) => material,
        Err(err) => return config_error(err).into(),
    };
    let root = find_root_with_candidates(ROOT_CANDIDATES);

    expand_key_material(&root, material).into()
}
