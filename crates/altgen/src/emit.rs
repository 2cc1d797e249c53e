//! Rendering of segments into generated source.

use crate::{
    backend::{Dialect, write_escaped},
    lexer::{Block, BlockKind, Literal},
    sink::Sink,
};

pub(crate) struct Emitter<'a, D, S> {
    dialect: &'a D,
    sink: &'a mut S,
    file_name: &'a [u8],
    line_directives: bool,
}

impl<'a, D: Dialect, S: Sink> Emitter<'a, D, S> {
    pub(crate) fn new(
        dialect: &'a D,
        sink: &'a mut S,
        file_name: &'a [u8],
        line_directives: bool,
    ) -> Self {
        Self {
            dialect,
            sink,
            file_name,
            line_directives,
        }
    }

    /// One literal write: escaped bytes plus the unescaped length.
    pub(crate) fn literal_run(&mut self, literal: &Literal<'_>) -> Result<(), S::Error> {
        debug_assert!(!literal.bytes.is_empty());
        self.dialect.literal_open(self.sink)?;
        write_escaped(self.sink, literal.bytes)?;
        self.dialect.literal_close(self.sink, literal.bytes.len())
    }

    pub(crate) fn block(&mut self, block: &Block<'_>) -> Result<(), S::Error> {
        if self.line_directives {
            self.dialect
                .line_directive(self.sink, block.line, self.file_name)?;
        }
        match block.kind {
            BlockKind::Expression => {
                self.dialect.expr_open(self.sink)?;
                self.sink.write_bytes(block.code)?;
                self.dialect.expr_close(self.sink)
            }
            BlockKind::Statement => {
                self.sink.write_bytes(block.code)?;
                // Keeps the next directive at the start of a line.
                if block.code.last() != Some(&b'\n') {
                    self.sink.write_bytes(b"\n")?;
                }
                Ok(())
            }
        }
    }
}
