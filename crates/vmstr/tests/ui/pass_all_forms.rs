// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use vmstr::{vm_cstr, vm_cwstr, vm_str, vm_wstr};

fn main() {
    let owned: String = vm_str!("owned");
    let cstr: &'static std::ffi::CStr = vm_cstr!("static");
    let wide: vmstr::WideString = vm_wstr!("wide");
    let cwide: &'static [u16] = vm_cwstr!("static wide");

    assert_eq!(owned, "owned");
    assert_eq!(cstr.to_bytes(), b"static");
    assert_eq!(wide.len(), 4);
    assert_eq!(cwide.len(), "static wide".len() + 1);
}
