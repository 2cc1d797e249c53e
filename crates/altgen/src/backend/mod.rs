//! Host-language renderings of the generated code.
//!
//! A [`Dialect`] decides how a literal write, a line-marker directive and a
//! print call look in the target language. The lexer and the shape of the
//! output (what gets emitted when, and in which order) are shared.
//!
//! The generated code calls two functions the host program must provide:
//! one that writes raw bytes and takes their length, and one that prints a
//! computed value of any type used in expression blocks.

mod cpp;
mod rust;

pub use cpp::Cpp;
pub use rust::Rust;

use crate::{escape::escape_byte, sink::Sink};

/// Renders the pieces of generated code for one host language.
pub trait Dialect {
    /// Writes everything a literal write emits before the escaped bytes.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    fn literal_open<S: Sink>(&self, out: &mut S) -> Result<(), S::Error>;

    /// Writes everything after the escaped bytes; `len` is the number of
    /// template bytes, not the length of their escaped form.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    fn literal_close<S: Sink>(&self, out: &mut S, len: usize) -> Result<(), S::Error>;

    /// Writes a full line-marker directive, newline included.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    fn line_directive<S: Sink>(
        &self,
        out: &mut S,
        line: usize,
        file_name: &[u8],
    ) -> Result<(), S::Error>;

    /// Writes the start of a print call around an expression block.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    fn expr_open<S: Sink>(&self, out: &mut S) -> Result<(), S::Error>;

    /// Writes the end of a print call, newline included.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    fn expr_close<S: Sink>(&self, out: &mut S) -> Result<(), S::Error>;
}

/// Writes `bytes` escaped for a double-quoted literal.
pub(crate) fn write_escaped<S: Sink>(out: &mut S, bytes: &[u8]) -> Result<(), S::Error> {
    for &b in bytes {
        out.write_bytes(escape_byte(b).as_bytes())?;
    }
    Ok(())
}
