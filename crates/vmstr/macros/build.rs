// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Captures the build clock that seeds every expansion of this crate.
//!
//! The clock is read once, when this build script runs. All macro
//! invocations, including the key material expanded inside `vmstr`, are
//! served by the same compiled proc-macro and therefore share one seed.

use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-env-changed=VMSTR_SEED");

    let pinned = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .filter(|value| !value.trim().is_empty());
    let pinned_epoch = pinned.as_deref().and_then(parse_epoch);

    // Forwarded so expansions fail instead of silently using the wall clock.
    let rejected = match (&pinned, pinned_epoch) {
        (Some(value), None) => {
            println!("cargo:warning=SOURCE_DATE_EPOCH={value:?} is not a unix timestamp");
            value.clone()
        }
        _ => String::new(),
    };
    println!("cargo:rustc-env=VMSTR_REJECTED_EPOCH={rejected}");

    let epoch = pinned_epoch.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    });

    let of_day = epoch % SECONDS_PER_DAY;
    let clock = format!(
        "{:02}:{:02}:{:02}",
        of_day / 3_600,
        (of_day / 60) % 60,
        of_day % 60
    );

    println!("cargo:rustc-env=VMSTR_BUILD_CLOCK={clock}");
    println!(
        "cargo:rustc-env=VMSTR_SEED_OVERRIDE={}",
        std::env::var("VMSTR_SEED").unwrap_or_default()
    );
}

/// Reproducible builds pin the clock through `SOURCE_DATE_EPOCH`.
fn parse_epoch(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}
