use thiserror::Error;

/// Failure of [`Transpiler::process`](crate::Transpiler::process).
///
/// `E` is the error type of the [`Sink`](crate::Sink) being written to;
/// for `Vec<u8>` it is [`Infallible`](core::convert::Infallible).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProcessError<E> {
    /// The sink rejected a write.
    #[error("failed to write generated source: {0}")]
    Sink(E),
    /// An escape block was still open at end of input and the options ask
    /// for this to be rejected.
    #[error("unterminated escape block opened at line {line} (byte offset {offset})")]
    UnterminatedBlock {
        /// Line of the opening `/*`.
        line: usize,
        /// Byte offset of the opening `/*`.
        offset: usize,
    },
}
