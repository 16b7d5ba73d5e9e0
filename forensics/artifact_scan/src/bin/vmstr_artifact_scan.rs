// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::process::ExitCode;

use vmstr::{vm_cstr, vm_cwstr, vm_str, vm_wstr};

/// Every needle is produced at runtime. None of them may appear in this file
/// as a plain literal, or the scan finds the literal instead of a leak.
fn needles() -> Vec<(&'static str, Vec<u8>)> {
    let api_key = vm_str!("sk_live_51HxForensicProbe");
    let password = vm_str!("correct horse battery staple");
    let library = vm_cstr!("libforensic_probe.so.7");
    let wide = vm_wstr!("HKLM\\SOFTWARE\\ForensicProbe");
    let cwide = vm_cwstr!("C:\\ForensicProbe\\config.ini");

    let utf16le = |units: &[u16]| -> Vec<u8> {
        units.iter().flat_map(|unit| unit.to_le_bytes()).collect()
    };

    vec![
        ("vm_str (api key)", api_key.into_bytes()),
        ("vm_str (password)", password.into_bytes()),
        ("vm_cstr", library.to_bytes().to_vec()),
        ("vm_wstr as UTF-16LE", utf16le(wide.as_units())),
        ("vm_wstr as UTF-8", wide.to_string_lossy().into_bytes()),
        ("vm_cwstr as UTF-16LE", utf16le(&cwide[..cwide.len() - 1])),
    ]
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn main() -> ExitCode {
    println!("[*] vmstr Artifact Scan - Plaintext Literal Detection");
    println!();

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(err) => {
            eprintln!("[!] Failed to locate current executable: {err}");
            return ExitCode::from(2);
        }
    };

    let artifact = match std::fs::read(&exe) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("[!] Failed to read {}: {err}", exe.display());
            return ExitCode::from(2);
        }
    };

    println!("[*] Artifact: {} ({} bytes)", exe.display(), artifact.len());
    println!();

    let mut hits = 0;
    for (label, needle) in needles() {
        match find(&artifact, &needle) {
            Some(offset) => {
                hits += 1;
                println!("[!] {label}: {} bytes found at offset {offset:#x}", needle.len());
            }
            None => println!("[+] {label}: {} bytes not present", needle.len()),
        }
    }

    println!();
    if hits == 0 {
        println!("[+] No decoded literal appears in the artifact");
        ExitCode::SUCCESS
    } else {
        println!("[!] {hits} decoded literal(s) found in the artifact");
        ExitCode::FAILURE
    }
}
