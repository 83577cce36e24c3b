//! Benchmarks for keymap decoding
//!
//! Run with: cargo bench decode

use reaper_keymap::keymap::{decode_input, split_preserving_quotes, KeymapDecoder};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const SAMPLE_KEYMAP: &str = include_str!("../samples/reaper-kb.ini");

/// Build a keymap text with roughly `line_count` entry lines
fn make_keymap(line_count: usize) -> String {
    let sample_lines = SAMPLE_KEYMAP.lines().count().max(1);
    SAMPLE_KEYMAP.repeat(line_count / sample_lines + 1)
}

// ============================================================================
// Whole-file decoding
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn decode_keymap(bencher: divan::Bencher, line_count: usize) {
    let text = make_keymap(line_count);
    let decoder = KeymapDecoder::default();

    bencher.bench(|| decoder.decode_str(divan::black_box(&text)));
}

// ============================================================================
// Hot paths
// ============================================================================

#[divan::bench]
fn tokenize_action_body() {
    let body = r#"0 0 "_d7f0f3a1e2b44c1f8d2a" "Custom: Render stems" 40289 40290 _SWS_SAVESEL 42230"#;
    divan::black_box(split_preserving_quotes(divan::black_box(body)));
}

#[divan::bench]
fn classify_all_modifiers() {
    for modifier in 0..=255i64 {
        divan::black_box(decode_input(modifier, divan::black_box(0x1234)));
    }
}
