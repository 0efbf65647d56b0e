//! Fuzz target for line layout.
//!
//! Arbitrary text and indices must never panic, and whatever comes back must
//! cover the requested range.

#![no_main]

use arbitrary::Arbitrary;
use bidi_line::{Direction, RunLayoutEngine};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    start: usize,
    len: usize,
    context_end: usize,
    rtl: bool,
}

fuzz_target!(|input: Input| {
    let buf: Vec<char> = input.text.chars().collect();
    let engine = RunLayoutEngine::new();
    let result = engine.layout(
        &buf,
        input.start,
        input.len,
        input.context_end,
        Direction::from_rtl(input.rtl),
    );

    let covered: usize = result.instructions.iter().map(|i| i.len).sum();
    if !result.is_empty() {
        assert_eq!(covered, input.len);
    }
    assert!(result.total_width >= 0.0);
});
