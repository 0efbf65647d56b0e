//! Fuzz target for the shaping gate.
//!
//! `requires_shaping` must agree with a direct per-char scan for any range,
//! including ranges that run off the end of the buffer.

#![no_main]

use bidi_line::unicode::{is_rtl_char, requires_shaping, scan_contains_rtl};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, u16, u16)| {
    let (text, start, len) = data;
    let buf: Vec<char> = text.chars().collect();
    let (start, len) = (usize::from(start), usize::from(len));

    let from = start.min(buf.len());
    let to = start.saturating_add(len).min(buf.len());
    let expected = buf[from..to].iter().any(|&c| is_rtl_char(c));

    assert_eq!(scan_contains_rtl(&buf, start, len), expected);
    assert_eq!(requires_shaping(&buf, start, len), expected);
});
