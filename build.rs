// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Build script for the pool-racer firmware
//!
//! When building for a bare-metal thumb target this script:
//! - Copies the RP2350 memory layout into the build output directory
//! - Adds that directory to the linker search path for cortex-m-rt
//! - Re-runs the build when the memory layout changes
//!
//! Host builds (unit and integration tests of the control library) skip the
//! linker setup entirely, since they link against the host's own runtime.
//!
//! # Memory Layout
//! `memory.x` describes the RP2350's memory regions:
//! - **FLASH**: 4MB starting at 0x10000000
//! - **RAM**: 512KB starting at 0x20000000
//! - **SRAM8** / **SRAM9**: 4KB direct-mapped banks at 0x20080000 and 0x20081000

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    let target = env::var("TARGET").unwrap_or_default();
    if !target.starts_with("thumb") {
        return;
    }

    let out = &PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));

    File::create(out.join("memory.x"))
        .expect("create memory.x in OUT_DIR")
        .write_all(include_bytes!("memory.x"))
        .expect("write memory.x");

    println!("cargo:rustc-link-search={}", out.display());
}
