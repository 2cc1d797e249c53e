use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{ProcessOptions, Transpiler};

/// Transpile to C++ with default options, as text.
pub fn cpp(input: &[u8]) -> String {
    let out = Transpiler::new(ProcessOptions::default())
        .process_to_vec(input, "t.tmpl")
        .unwrap();
    String::from_utf8(out).unwrap()
}

/// Inverse of the escaper, following the byte-string grammar: `\xHH` takes
/// exactly two hex digits.
pub fn unescape(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        if body[i] != b'\\' {
            out.push(body[i]);
            i += 1;
            continue;
        }
        match body[i + 1] {
            b'"' => out.push(b'"'),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'\\' => out.push(b'\\'),
            b'x' => {
                let hex = core::str::from_utf8(&body[i + 2..i + 4]).unwrap();
                out.push(u8::from_str_radix(hex, 16).unwrap());
                i += 2;
            }
            other => panic!("unknown escape \\{}", other as char),
        }
        i += 2;
    }
    out
}

/// Splits the C++ output of a single literal write into its escaped body and
/// length argument.
pub fn parse_literal_call(line: &[u8]) -> (Vec<u8>, usize) {
    let body = line
        .strip_prefix(b"  emit(\"")
        .expect("literal call prefix");
    let close = body
        .windows(3)
        .rposition(|w| w == b"\", ")
        .expect("closing quote");
    let len = core::str::from_utf8(&body[close + 3..])
        .unwrap()
        .trim_end_matches(");\n");
    (body[..close].to_vec(), len.parse().unwrap())
}

/// Template bytes biased towards markers, whitespace and newlines so that
/// generated inputs exercise every scanner path.
#[derive(Debug, Clone)]
pub struct Template(pub Vec<u8>);

const PIECES: &[&[u8]] = &[
    b"/*", b"/*-", b"*/", b"-*/", b"-", b"*", b"/", b"\n", b"\r\n", b" ", b"\t", b"\x0b", b"x",
    b"emit(", b"\"", b"\\", b"\x00", b"\xff",
];

impl Arbitrary for Template {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % (g.size() + 1);
        let mut bytes = Vec::new();
        for _ in 0..n {
            if bool::arbitrary(g) {
                bytes.push(u8::arbitrary(g));
            } else {
                bytes.extend_from_slice(g.choose(PIECES).unwrap());
            }
        }
        Template(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Template))
    }
}
