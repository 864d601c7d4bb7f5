//! Fuzz target for desktop-entry parsing.
//!
//! Tests that `parse_desktop_entry` handles arbitrary input without
//! panicking.

#![no_main]

use dps_core::device::local::parse_desktop_entry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // The parser should never panic, only return None for malformed input
    let _ = parse_desktop_entry(data);
});
