//! Shared helpers for layout integration tests.

#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code, unused_imports)] // Not every test binary uses every helper

pub mod measure;
pub mod recording;

pub use measure::FixedAdvance;
pub use recording::{DrawCall, RecordingRenderer};

/// Collect a string into the `char` buffer the engine reads from.
pub fn line(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Install a debug-level subscriber once per test binary.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
