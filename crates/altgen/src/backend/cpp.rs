use super::{Dialect, write_escaped};
use crate::sink::Sink;

/// C++ output, using `#line` so compiler diagnostics point into the
/// template.
///
/// The host provides `emit(const char*, int)` and an overload set of
/// `emit_expr` covering every type printed by expression blocks.
///
/// ```text
///   emit("Hello ", 6);
/// #line 1 "hello.tmpl"
///   emit_expr( name );
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cpp;

impl Dialect for Cpp {
    fn literal_open<S: Sink>(&self, out: &mut S) -> Result<(), S::Error> {
        out.write_bytes(b"  emit(\"")
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
        write!(out, "#line {line} \"")?;
        write_escaped(out, file_name)?;
        out.write_bytes(b"\"\n")
    }

    fn expr_open<S: Sink>(&self, out: &mut S) -> Result<(), S::Error> {
        out.write_bytes(b"  emit_expr(")
    }

    fn expr_close<S: Sink>(&self, out: &mut S) -> Result<(), S::Error> {
        out.write_bytes(b");\n")
    }
}
