// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod nested {
    pub fn banner() -> String {
        vmstr::vm_str!("nested module")
    }
}

struct Config {
    endpoint: String,
}

impl Config {
    fn new() -> Self {
        Self {
            endpoint: vmstr::vm_str!("https://example.invalid/api"),
        }
    }
}

fn main() {
    assert_eq!(nested::banner(), "nested module");
    assert_eq!(Config::new().endpoint, "https://example.invalid/api");
}
