use super::{Dialect, write_escaped};
use crate::sink::Sink;

/// Rust output.
///
/// Literal runs become byte-string literals, which accept every escape the
/// escaper produces. Rust has no `#line`, so directives are kept as comments
/// for tools that map generated lines back to the template.
///
/// The host provides `fn emit(bytes: &[u8], len: usize)` and a generic
/// `emit_expr`, typically bounded on `Display`.
///
/// ```text
///     emit(b"Hello ", 6);
/// // #line 1 "hello.tmpl"
///     emit_expr( name );
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rust;

impl Dialect for Rust {
    fn literal_open<S: Sink>(&self, out: &mut S) -> Result<(), S::Error> {
        out.write_bytes(b"    emit(b\"")
    }

    fn literal_close<S: Sink>(&self, out: &mut S, len: usize) -> Result<(), S::Error> {
        write!(out, "\", {len});\n")
    }

    fn line_directive<S: Sink>(
        &self,
        out: &mut S,
        line: usize,
        file_name: &[u8],
    ) -> Result<(), S::Error> {
        write!(out, "// #line {line} \"")?;
        write_escaped(out, file_name)?;
        out.write_bytes(b"\"\n")
    }

    fn expr_open<S: Sink>(&self, out: &mut S) -> Result<(), S::Error> {
        out.write_bytes(b"    emit_expr(")
    }

    fn expr_close<S: Sink>(&self, out: &mut S) -> Result<(), S::Error> {
        out.write_bytes(b");\n")
    }
}
