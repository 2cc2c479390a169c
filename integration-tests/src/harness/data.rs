//! Reference input for the trim scenarios.
//!
//! The scenarios address the content by byte offset, so the layout below is
//! load-bearing: 193 bytes total, a 12-byte header token at the front, a
//! 12-byte footer token at the back, and the word "Dew" at bytes 94..97.
//! `reference_layout_holds` in tests/trim_bytes.rs pins these invariants.

pub const HEADER: &[u8] = b"<<<HEADER>>>";
pub const FOOTER: &[u8] = b"<<<FOOTER>>>";

pub fn reference_input() -> Vec<u8> {
    let mut data = Vec::with_capacity(193);
    data.extend_from_slice(HEADER);
    data.push(b'\n');
    data.extend_from_slice(&filler(81)); // bytes 13..94
    data.extend_from_slice(b"Dew"); // bytes 94..97
    data.extend_from_slice(&filler(83)); // bytes 97..180
    data.push(b'\n');
    data.extend_from_slice(FOOTER);
    data
}

fn filler(n: usize) -> Vec<u8> {
    b"softly falling morning mist gathers on the glass "
        .iter()
        .copied()
        .cycle()
        .take(n)
        .collect()
}
