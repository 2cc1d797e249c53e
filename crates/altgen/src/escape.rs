//! Escaping of template bytes into double-quoted string literal bodies.
//!
//! The mapping is fixed and shared by every dialect:
//!
//! | byte | output |
//! |---|---|
//! | `"` | `\"` |
//! | `\n` | `\n` |
//! | `\r` | `\r` |
//! | `\t` | `\t` |
//! | `\` | `\\` |
//! | `0x20..=0x7e` | the byte itself |
//! | anything else | `\xHH`, two lowercase hex digits |
//!
//! "Printable" is the ASCII range, independent of any locale, so the output
//! for a given template is the same on every machine.

const HEX: &[u8; 16] = b"0123456789abcdef";

/// The escaped form of a single byte: between one and four output bytes,
/// kept inline so escaping never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaped {
    buffer: [u8; 4],
    len: u8,
}

impl Escaped {
    const fn one(b: u8) -> Self {
        Self {
            buffer: [b, 0, 0, 0],
            len: 1,
        }
    }

    const fn two(b: u8) -> Self {
        Self {
            buffer: [b'\\', b, 0, 0],
            len: 2,
        }
    }

    const fn hex(b: u8) -> Self {
        Self {
            buffer: [b'\\', b'x', HEX[(b >> 4) as usize], HEX[(b & 0x0f) as usize]],
            len: 4,
        }
    }

    /// The escaped bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len as usize]
    }
}

/// Returns `true` for bytes that may appear unescaped inside a literal.
#[must_use]
pub const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e)
}

/// Escapes one byte.
#[must_use]
pub const fn escape_byte(byte: u8) -> Escaped {
    match byte {
        b'"' => Escaped::two(b'"'),
        b'\n' => Escaped::two(b'n'),
        b'\r' => Escaped::two(b'r'),
        b'\t' => Escaped::two(b't'),
        b'\\' => Escaped::two(b'\\'),
        b if is_printable(b) => Escaped::one(b),
        b => Escaped::hex(b),
    }
}

/// Escapes `bytes` and appends the result to `out`.
///
/// Convenience for callers that want the literal body as one buffer; the
/// emitter itself streams [`escape_byte`] output straight into its sink.
pub fn escape_into(bytes: &[u8], out: &mut alloc::vec::Vec<u8>) {
    out.reserve(bytes.len());
    for &b in bytes {
        out.extend_from_slice(escape_byte(b).as_bytes());
    }
}
