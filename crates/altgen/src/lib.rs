//! A single-pass template transpiler.
//!
//! A template is literal text interleaved with escape blocks written as
//! block comments. [`Transpiler::process`] turns it into host-language
//! source where every literal run becomes a call that writes raw bytes and
//! every escape block becomes either injected code or a call that prints a
//! computed value:
//!
//! | marker | meaning |
//! |---|---|
//! | `/* code */` | statement, copied verbatim |
//! | `/* code -*/` | statement, eats whitespace through the next newline |
//! | `/*- expr */` | expression, wrapped in `emit_expr(...)` |
//! | `/*- expr -*/` | expression, eats whitespace through the next newline |
//!
//! ```rust
//! use altgen::{ProcessOptions, Transpiler};
//!
//! let out = Transpiler::new(ProcessOptions::default())
//!     .process_to_vec(b"Hello /*- name */!", "hello.tmpl")
//!     .unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     concat!(
//!         "  emit(\"Hello \", 6);\n",
//!         "#line 1 \"hello.tmpl\"\n",
//!         "  emit_expr( name );\n",
//!         "  emit(\"!\", 1);\n",
//!     )
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod backend;
mod emit;
mod error;
pub mod escape;
mod lexer;
mod options;
mod sink;
mod transpiler;

#[cfg(test)]
mod tests;

pub use backend::{Cpp, Dialect, Rust};
pub use error::ProcessError;
pub use lexer::{Block, BlockKind, Cursor, Lexer, Literal, Segment};
pub use options::{ProcessOptions, UnterminatedBlock};
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::Sink;
pub use transpiler::{Summary, Transpiler};
