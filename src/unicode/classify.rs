//! Codepoint classification for RTL and Arabic text.
//!
//! Everything here is a pure, allocation-free lookup. Explicit block ranges
//! are checked first; the Unicode `Bidi_Class` table from `unicode-bidi`
//! covers RTL scripts outside those blocks and the explicit RTL controls.

use bitflags::bitflags;
use unicode_bidi::{BidiClass, bidi_class};

use crate::unicode::bidi::Direction;

bitflags! {
    /// Facts about a single character relevant to shaping and reordering.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CharClass: u8 {
        /// Right-to-left script or explicit RTL control.
        const RTL            = 0x01;
        /// Arabic block character (joins contextually).
        const ARABIC         = 0x02;
        /// Arabic diacritic attached to the preceding base.
        const COMBINING_MARK = 0x04;
        /// Needs contextual shaping before it can be drawn.
        const NEEDS_SHAPING  = 0x08;
    }
}

/// Strong direction of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectionClass {
    Ltr,
    Rtl,
    /// Digits, punctuation, whitespace: direction comes from context.
    Neutral,
}

/// Hebrew block.
const HEBREW: (u32, u32) = (0x0590, 0x05FF);

/// Arabic blocks: base, Supplement, Extended-A, Presentation Forms A and B.
const ARABIC_BLOCKS: [(u32, u32); 5] = [
    (0x0600, 0x06FF),
    (0x0750, 0x077F),
    (0x08A0, 0x08FF),
    (0xFB50, 0xFDFF),
    (0xFE70, 0xFEFF),
];

/// Arabic harakat and Quranic annotation marks.
const COMBINING_MARKS: [(u32, u32); 6] = [
    (0x064B, 0x065F),
    (0x0670, 0x0670),
    (0x06D6, 0x06DC),
    (0x06DF, 0x06E4),
    (0x06E7, 0x06E8),
    (0x06EA, 0x06ED),
];

#[inline]
fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let cp = u32::from(c);
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Check if a character belongs to one of the Arabic blocks.
#[inline]
#[must_use]
pub fn is_arabic_char(c: char) -> bool {
    !c.is_ascii() && in_ranges(c, &ARABIC_BLOCKS)
}

/// Check if a character is right-to-left.
///
/// True for the Hebrew and Arabic blocks, and for anything whose
/// `Bidi_Class` is `R`, `AL`, `RLE` or `RLO`.
#[must_use]
pub fn is_rtl_char(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    if in_ranges(c, &[HEBREW]) || is_arabic_char(c) {
        return true;
    }
    matches!(
        bidi_class(c),
        BidiClass::R | BidiClass::AL | BidiClass::RLE | BidiClass::RLO
    )
}

/// Check if a character is an Arabic combining mark.
///
/// U+06DD and U+06DE sit inside the annotation block but are not marks.
#[inline]
#[must_use]
pub fn is_combining_mark(c: char) -> bool {
    !c.is_ascii() && in_ranges(c, &COMBINING_MARKS)
}

/// Collect all classification facts for a character.
#[must_use]
pub fn classify(c: char) -> CharClass {
    let mut class = CharClass::empty();
    if c.is_ascii() {
        return class;
    }
    if is_rtl_char(c) {
        class |= CharClass::RTL;
    }
    if is_arabic_char(c) {
        class |= CharClass::ARABIC | CharClass::NEEDS_SHAPING;
    }
    if is_combining_mark(c) {
        class |= CharClass::COMBINING_MARK;
    }
    class
}

/// Strong direction of a character from its `Bidi_Class`.
#[must_use]
pub fn direction_class(c: char) -> DirectionClass {
    match bidi_class(c) {
        BidiClass::L => DirectionClass::Ltr,
        BidiClass::R | BidiClass::AL => DirectionClass::Rtl,
        _ => DirectionClass::Neutral,
    }
}

/// Clamp `start..start + len` to the buffer. Out-of-range starts yield an
/// empty slice.
#[inline]
fn clamped(buffer: &[char], start: usize, len: usize) -> &[char] {
    let start = start.min(buffer.len());
    let end = start.saturating_add(len).min(buffer.len());
    &buffer[start..end]
}

/// Check if a range needs the shaping/BiDi path at all.
///
/// Pure ASCII returns `false` after a single scan; only ranges with a
/// non-ASCII character go on to the Arabic and RTL checks.
#[must_use]
pub fn requires_shaping(buffer: &[char], start: usize, len: usize) -> bool {
    let chars = clamped(buffer, start, len);
    if chars.iter().all(char::is_ascii) {
        return false;
    }
    needs_text_shaping(buffer, start, len) || scan_contains_rtl(buffer, start, len)
}

/// Check if a range contains Arabic text that must be joined.
#[must_use]
pub fn needs_text_shaping(buffer: &[char], start: usize, len: usize) -> bool {
    clamped(buffer, start, len)
        .iter()
        .any(|&c| is_arabic_char(c))
}

/// Check if a range contains any right-to-left character.
#[must_use]
pub fn scan_contains_rtl(buffer: &[char], start: usize, len: usize) -> bool {
    clamped(buffer, start, len)
        .iter()
        .any(|&c| is_arabic_char(c) || is_rtl_char(c))
}

/// Check if text has both strong LTR and strong RTL characters.
///
/// Digits and neutrals are ignored.
#[must_use]
pub fn contains_mixed_directions(chars: &[char]) -> bool {
    let mut has_ltr = false;
    let mut has_rtl = false;
    for &c in chars {
        match direction_class(c) {
            DirectionClass::Ltr => has_ltr = true,
            DirectionClass::Rtl => has_rtl = true,
            DirectionClass::Neutral => {}
        }
        if has_ltr && has_rtl {
            return true;
        }
    }
    false
}

/// Direction of the first strong character, if any.
#[must_use]
pub fn first_strong_direction(chars: &[char]) -> Option<Direction> {
    chars.iter().find_map(|&c| match direction_class(c) {
        DirectionClass::Ltr => Some(Direction::Ltr),
        DirectionClass::Rtl => Some(Direction::Rtl),
        DirectionClass::Neutral => None,
    })
}
