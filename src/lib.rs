//! Dosimeter console library - testable modules for the dual-channel console.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code
//! (UART setup, embassy tasks).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
