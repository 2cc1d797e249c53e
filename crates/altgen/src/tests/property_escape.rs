use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::utils::{cpp, parse_literal_call, unescape};
use crate::escape::{escape_byte, escape_into};

#[test]
fn every_byte_round_trips() {
    for b in 0..=255u8 {
        let escaped = escape_byte(b);
        assert_eq!(unescape(escaped.as_bytes()), [b], "byte {b:#04x}");
    }
}

/// Property: input without an opening marker becomes exactly one literal
/// write whose length is the input length and whose body unescapes to the
/// input.
#[test]
fn marker_free_input_is_one_literal_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Vec<u8>) -> bool {
        if input.is_empty() || input.windows(2).any(|w| w == b"/*") {
            return true;
        }
        let out = cpp(&input);
        if out.lines().count() != 1 {
            return false;
        }
        let (body, len) = parse_literal_call(out.as_bytes());
        len == input.len() && unescape(&body) == input
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: escaped output never contains a raw quote, newline or
/// non-printable byte, so it always stays inside one string literal.
#[test]
fn escaped_output_is_printable_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Vec<u8>) -> bool {
        let mut out = Vec::new();
        escape_into(&input, &mut out);
        let mut prev_backslash = false;
        for &b in &out {
            if !(0x20..=0x7e).contains(&b) {
                return false;
            }
            if b == b'"' && !prev_backslash {
                return false;
            }
            prev_backslash = b == b'\\' && !prev_backslash;
        }
        true
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[quickcheck_macros::quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn escaped_length_is_bounded(input: Vec<u8>) -> bool {
    let mut out = Vec::new();
    escape_into(&input, &mut out);
    out.len() >= input.len() && out.len() <= input.len() * 4
}

fn tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
