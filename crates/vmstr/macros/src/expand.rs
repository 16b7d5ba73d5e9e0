// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Token generation for the literal macros and the key material.

use log::debug;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, Literal, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::LitStr;
use vmstr_core::{GenerateError, Generator, Program, TransformUnit};

use crate::config::KeyMaterial;

const PREVIEW_CHARS: usize = 16;

/// What a macro call site evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputKind {
    /// `String`, decoded on every evaluation.
    Narrow,
    /// `&'static CStr`, decoded once.
    StaticNarrow,
    /// `WideString`, decoded on every evaluation.
    Wide,
    /// NUL-terminated `&'static [u16]`, decoded once.
    StaticWide,
}

impl OutputKind {
    pub(crate) fn macro_name(self) -> &'static str {
        match self {
            Self::Narrow => "vm_str",
            Self::StaticNarrow => "vm_cstr",
            Self::Wide => "vm_wstr",
            Self::StaticWide => "vm_cwstr",
        }
    }

    fn is_static(self) -> bool {
        matches!(self, Self::StaticNarrow | Self::StaticWide)
    }

    fn decoder(self) -> Ident {
        let name = match self {
            Self::Narrow => "decode_string",
            Self::StaticNarrow => "decode_static_cstr",
            Self::Wide => "decode_wide",
            Self::StaticWide => "decode_static_wide",
        };
        Ident::new(name, Span::call_site())
    }
}

/// Resolves the path of the first candidate crate found in the caller's
/// manifest, or a `compile_error!` if none is.
///
/// Paths are always absolute: `vmstr` declares `extern crate self as vmstr`,
/// so `::vmstr` resolves from its own modules and from its tests alike.
pub(crate) fn find_root_with_candidates(candidates: &[&'static str]) -> TokenStream2 {
    for &candidate in candidates {
        let name = match crate_name(candidate) {
            Ok(FoundCrate::Itself) => candidate.replace('-', "_"),
            Ok(FoundCrate::Name(name)) => name,
            Err(_) => continue,
        };

        let id = Ident::new(&name, Span::call_site());
        return quote!(::#id);
    }

    let msg = "vmstr: could not find the vmstr crate. Add vmstr to Cargo.toml.";
    let lit = LitStr::new(msg, Span::call_site());
    quote! { compile_error!(#lit); }
}

fn preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

fn program_tokens<U: TransformUnit>(
    program: &Program<U>,
    literal: fn(U) -> Literal,
) -> TokenStream2 {
    let units = program.instructions().iter().map(|&unit| literal(unit));
    quote! { [#(#units),*] }
}

/// Expands one literal macro invocation.
pub(crate) fn expand_literal(
    root: &TokenStream2,
    material: &KeyMaterial,
    kind: OutputKind,
    literal: &LitStr,
) -> Result<TokenStream2, syn::Error> {
    let text = literal.value();
    let name = kind.macro_name();

    if kind.is_static() && text.contains('\0') {
        return Err(syn::Error::new(
            literal.span(),
            format!("{name}!: literal contains an interior NUL"),
        ));
    }

    let generator = Generator::new(material.sequence(), material.tables());
    let capacity_error = |err: GenerateError| {
        syn::Error::new(
            literal.span(),
            format!("{name}!: {err} (literal {:?})", preview(&text)),
        )
    };

    let (unit_ty, units, len) = match kind {
        OutputKind::Narrow | OutputKind::StaticNarrow => {
            let program = generator
                .generate(text.as_bytes())
                .map_err(capacity_error)?;
            (
                quote!(u8),
                program_tokens(&program, Literal::u8_suffixed),
                program.len(),
            )
        }
        OutputKind::Wide | OutputKind::StaticWide => {
            let wide: Vec<u16> = text.encode_utf16().collect();
            let program = generator.generate(&wide).map_err(capacity_error)?;
            (
                quote!(u16),
                program_tokens(&program, Literal::u16_suffixed),
                program.len(),
            )
        }
    };

    debug!("{name}!: {len} program slots");

    let program_ident = format_ident!("__VMSTR_PROGRAM", span = Span::mixed_site());
    let slot_ident = format_ident!("__VMSTR_SLOT", span = Span::mixed_site());
    let decoder = kind.decoder();

    let program = quote! {
        static #program_ident: #root::__private::Program<#unit_ty> =
            #root::__private::Program::from_prefix(&#units);
    };

    let tokens = if kind.is_static() {
        quote! {
            {
                #program
                static #slot_ident: #root::__private::StaticSlot<#unit_ty> =
                    #root::__private::StaticSlot::new();
                #root::__private::#decoder(&#program_ident, &#slot_ident)
            }
        }
    } else {
        quote! {
            {
                #program
                #root::__private::#decoder(&#program_ident)
            }
        }
    };

    Ok(tokens)
}

/// Expands the runtime key material: the unmask table and both key shares.
pub(crate) fn expand_key_material(root: &TokenStream2, material: &KeyMaterial) -> TokenStream2 {
    let tables = material.tables();
    let (share, complement) = tables.global_key_shares(material.sequence());

    let unmask = tables.unmask().iter().map(|&entry| Literal::u8_suffixed(entry));
    let share = Literal::u8_suffixed(share);
    let complement = Literal::u8_suffixed(complement);

    debug!("vmstr key material expanded");

    quote! {
        pub(crate) static UNMASK_TABLE: [u8; #root::__private::PROGRAM_CAPACITY] = [#(#unmask),*];
        pub(crate) static KEY_SHARE: u8 = #share;
        pub(crate) const KEY_SHARE_COMPLEMENT: u8 = #complement;
    }
}
