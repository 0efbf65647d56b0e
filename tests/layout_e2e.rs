//! End-to-end layout and paint tests for mixed-direction lines.
//!
//! Run with logging:
//!   `RUST_LOG=debug` cargo test --test `layout_e2e` -- --nocapture

#![allow(clippy::float_cmp)] // Fixed advances make widths exact

mod common;

use bidi_line::{
    BidiResolver, CharacterRange, ColumnMeasurer, Direction, Error, LayoutPath,
    ResolvedParagraph, RunLayoutEngine, UnicodeBidiResolver,
};
use common::{FixedAdvance, RecordingRenderer, init_logging, line};

struct Unavailable;

impl BidiResolver for Unavailable {
    fn resolve(&self, _text: &str, _dir: Direction) -> bidi_line::Result<ResolvedParagraph> {
        Err(Error::resolution("resolver unavailable"))
    }
}

fn engine(advance: f32) -> RunLayoutEngine<UnicodeBidiResolver, FixedAdvance> {
    RunLayoutEngine::with_parts(UnicodeBidiResolver, FixedAdvance(advance))
}

#[test]
fn ascii_command_draws_once_with_caller_context() {
    let buf = line("pkg install vim");
    let range = CharacterRange::with_context_end(&buf, 4, 7, buf.len()).unwrap();
    let mut renderer = RecordingRenderer::new();

    let width = engine(10.0).draw(&range, 40.0, 12.0, Direction::Ltr, &mut renderer);

    assert_eq!(width, 70.0);
    assert_eq!(renderer.calls.len(), 1);
    let call = &renderer.calls[0];
    assert_eq!(call.text, "install");
    assert_eq!(call.offset, 4);
    assert_eq!(call.context, 0..buf.len());
    assert_eq!((call.x, call.y), (40.0, 12.0));
    assert!(!call.is_rtl);
}

#[test]
fn arabic_with_digits_is_drawn_right_to_left() {
    let buf = line("اب12");
    let range = CharacterRange::full(&buf);
    let mut renderer = RecordingRenderer::new();

    let width = engine(10.0).draw(&range, 0.0, 0.0, Direction::Ltr, &mut renderer);

    assert_eq!(width, 40.0);
    assert_eq!(renderer.texts(), vec!["اب", "12"]);
    assert_eq!(renderer.calls[0].x, 20.0);
    assert!(renderer.calls[0].is_rtl);
    assert_eq!(renderer.calls[1].x, 0.0);
    assert!(!renderer.calls[1].is_rtl);
    // Reordered runs are shaped on their own.
    assert_eq!(renderer.calls[0].context, 0..2);
    assert_eq!(renderer.calls[1].context, 2..4);
}

#[test]
fn greeting_draws_latin_then_arabic() {
    let buf = line("Hello مرحبا");
    let range = CharacterRange::full(&buf);
    let mut renderer = RecordingRenderer::new();

    engine(1.0).draw(&range, 5.0, 0.0, Direction::Ltr, &mut renderer);

    assert_eq!(renderer.texts(), vec!["Hello ", "مرحبا"]);
    assert_eq!(renderer.calls[0].x, 5.0);
    assert_eq!(renderer.calls[1].x, 11.0);
    assert!(renderer.calls[1].is_rtl);
}

#[test]
fn hebrew_sentence_is_one_rtl_run() {
    let buf = line("שלום עולם");
    let result = engine(1.0).layout(&buf, 0, buf.len(), buf.len(), Direction::Ltr);

    assert_eq!(result.path, LayoutPath::Reordered);
    assert_eq!(result.instructions.len(), 1);
    assert!(result.instructions[0].is_rtl);
    assert_eq!(result.instructions[0].x, 0.0);
    assert_eq!(result.total_width, 9.0);
}

#[test]
fn isolated_latin_does_not_set_base_direction() {
    // Hebrew is the first strong char outside the isolate, so the line is RTL.
    let buf = line("\u{2067}abc\u{2069}שלום");
    let result = engine(1.0).layout(&buf, 0, buf.len(), buf.len(), Direction::Ltr);

    assert_eq!(result.path, LayoutPath::Reordered);
    assert_eq!(result.total_width, 9.0);
    assert_eq!(result.instructions[0].offset, 0);
    assert_eq!(result.instructions[0].right(), 9.0);
    let last = result.instructions.last().unwrap();
    assert_eq!(last.x, 0.0);
    assert!(last.is_rtl);
}

#[test]
fn prompt_prefix_outside_range_is_not_reordered() {
    // Only the argument is laid out; the prompt stays in the shaping context.
    let buf = line("$ cat ملف.txt");
    let range = CharacterRange::new(&buf, 6, 7).unwrap();
    let result = engine(1.0).layout_range(&range, 6.0, Direction::Ltr);

    assert_eq!(result.path, LayoutPath::Reordered);
    assert_eq!(result.total_width, 7.0);
    let first = result.instructions[0];
    // The full stop sits between Arabic and Latin, so it joins the RTL run.
    assert_eq!(first.offset, 0);
    assert_eq!(first.len, 4);
    assert!(first.is_rtl);
    assert_eq!(first.x, 9.0);
    let rest = result.instructions[1];
    assert_eq!(rest.offset, 4);
    assert_eq!(rest.len, 3);
    assert!(!rest.is_rtl);
    assert_eq!(rest.x, 6.0);
}

#[test]
fn resolver_failure_draws_unshaped_every_time() {
    init_logging();
    let e = RunLayoutEngine::with_parts(Unavailable, ColumnMeasurer::default());
    let buf = line("ls مجلد");
    let range = CharacterRange::full(&buf);

    let mut first = RecordingRenderer::new();
    let mut second = RecordingRenderer::new();
    let w1 = e.draw(&range, 0.0, 0.0, Direction::Rtl, &mut first);
    let w2 = e.draw(&range, 0.0, 0.0, Direction::Rtl, &mut second);

    assert_eq!(w1, w2);
    assert_eq!(first.calls, second.calls);
    assert_eq!(first.calls.len(), 1);
    assert_eq!(first.calls[0].text, "ls مجلد");
    assert!(first.calls[0].is_rtl);
}

#[test]
fn invalid_indices_draw_nothing() {
    let buf = line("مرحبا");
    let mut renderer = RecordingRenderer::new();
    let result = engine(1.0).layout(&buf, 3, 10, 13, Direction::Ltr);
    assert!(result.is_empty());
    assert_eq!(result.total_width, 0.0);

    let range = CharacterRange::new(&buf, 5, 0).unwrap();
    let width = engine(1.0).draw(&range, 0.0, 0.0, Direction::Ltr, &mut renderer);
    assert_eq!(width, 0.0);
    assert!(renderer.calls.is_empty());
}

#[test]
fn shared_engine_across_threads() {
    let e = RunLayoutEngine::new();
    let buf = line("abc שלום 123 مرحبا");
    let expected = e.layout(&buf, 0, buf.len(), buf.len(), Direction::Ltr);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let got = e.layout(&buf, 0, buf.len(), buf.len(), Direction::Ltr);
                assert_eq!(got, expected);
            });
        }
    });
}
