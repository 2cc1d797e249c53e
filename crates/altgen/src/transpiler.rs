use alloc::vec::Vec;
use core::convert::Infallible;

use tracing::{debug, trace, warn};

use crate::{
    backend::{Cpp, Dialect},
    emit::Emitter,
    error::ProcessError,
    lexer::{BlockKind, Lexer, Segment},
    options::{ProcessOptions, UnterminatedBlock},
    sink::Sink,
};

/// Counts describing one [`Transpiler::process`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Literal writes emitted.
    pub literal_runs: usize,
    /// Template bytes covered by literal writes.
    pub literal_bytes: usize,
    /// Statement blocks emitted.
    pub statement_blocks: usize,
    /// Expression blocks emitted.
    pub expression_blocks: usize,
    /// Blocks closed with `-*/`.
    pub trimmed_blocks: usize,
    /// Line the scan ended on.
    pub lines: usize,
}

/// Turns templates into host-language source.
///
/// A `Transpiler` is only configuration; every [`process`](Self::process)
/// call makes its own single pass over the input.
#[derive(Debug, Clone)]
pub struct Transpiler<D = Cpp> {
    dialect: D,
    options: ProcessOptions,
}

impl Transpiler<Cpp> {
    /// A transpiler producing C++.
    #[must_use]
    pub fn new(options: ProcessOptions) -> Self {
        Self::with_dialect(Cpp, options)
    }
}

impl Default for Transpiler<Cpp> {
    fn default() -> Self {
        Self::new(ProcessOptions::default())
    }
}

impl<D: Dialect> Transpiler<D> {
    /// A transpiler producing code for `dialect`.
    #[must_use]
    pub fn with_dialect(dialect: D, options: ProcessOptions) -> Self {
        Self { dialect, options }
    }

    /// The options in use.
    #[must_use]
    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Transpiles `input` into `sink`.
    ///
    /// `file_name` is what line-marker directives refer to. Output is written
    /// as the input is scanned; on error the sink holds a prefix of the
    /// generated source.
    ///
    /// # Errors
    ///
    /// - [`ProcessError::Sink`] when the sink fails.
    /// - [`ProcessError::UnterminatedBlock`] when a block is never closed and
    ///   [`UnterminatedBlock::Reject`] is configured. Nothing is written for
    ///   that block.
    pub fn process<S: Sink>(
        &self,
        input: &[u8],
        file_name: &str,
        sink: &mut S,
    ) -> Result<Summary, ProcessError<S::Error>> {
        let mut emitter = Emitter::new(
            &self.dialect,
            sink,
            file_name.as_bytes(),
            self.options.line_directives,
        );
        let mut summary = Summary::default();
        let mut lexer = Lexer::new(input);

        for segment in lexer.by_ref() {
            trace!(?segment, "segment");
            match segment {
                Segment::Literal(literal) => {
                    emitter.literal_run(&literal).map_err(ProcessError::Sink)?;
                    summary.literal_runs += 1;
                    summary.literal_bytes += literal.bytes.len();
                }
                Segment::Block(block) => {
                    if !block.terminated {
                        match self.options.unterminated_block {
                            UnterminatedBlock::Reject => {
                                return Err(ProcessError::UnterminatedBlock {
                                    line: block.line,
                                    offset: block.span.start,
                                });
                            }
                            UnterminatedBlock::Tolerate => warn!(
                                file = file_name,
                                line = block.line,
                                "escape block not closed before end of input"
                            ),
                        }
                    }
                    emitter.block(&block).map_err(ProcessError::Sink)?;
                    match block.kind {
                        BlockKind::Statement => summary.statement_blocks += 1,
                        BlockKind::Expression => summary.expression_blocks += 1,
                    }
                    if block.trim {
                        summary.trimmed_blocks += 1;
                    }
                }
            }
        }

        summary.lines = lexer.cursor().line;
        debug!(file = file_name, ?summary, "template processed");
        Ok(summary)
    }

    /// Transpiles `input` into a new buffer.
    ///
    /// # Errors
    ///
    /// Only [`ProcessError::UnterminatedBlock`], see [`process`](Self::process).
    pub fn process_to_vec(
        &self,
        input: &[u8],
        file_name: &str,
    ) -> Result<Vec<u8>, ProcessError<Infallible>> {
        let mut out = Vec::with_capacity(input.len() * 2);
        self.process(input, file_name, &mut out)?;
        Ok(out)
    }
}
