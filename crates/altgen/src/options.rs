/// What to do with an escape block whose closing marker never appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnterminatedBlock {
    /// Treat everything up to end of input as the block body.
    ///
    /// This is the historical behavior of the tool; a warning is logged.
    #[default]
    Tolerate,
    /// Fail with [`ProcessError::UnterminatedBlock`](crate::ProcessError).
    Reject,
}

/// Configuration for [`Transpiler`](crate::Transpiler).
///
/// # Examples
///
/// ```rust
/// use altgen::{ProcessOptions, Transpiler, UnterminatedBlock};
///
/// let options = ProcessOptions {
///     unterminated_block: UnterminatedBlock::Reject,
///     ..Default::default()
/// };
/// assert!(Transpiler::new(options).process_to_vec(b"/* open", "t").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Policy for escape blocks missing their closing marker.
    ///
    /// # Default
    ///
    /// [`UnterminatedBlock::Tolerate`]
    pub unterminated_block: UnterminatedBlock,

    /// Whether to emit a line-marker directive before every escape block.
    ///
    /// Turning this off does not change anything else about the output; in
    /// particular statement blocks still end with a newline.
    ///
    /// # Default
    ///
    /// `true`
    pub line_directives: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            unterminated_block: UnterminatedBlock::default(),
            line_directives: true,
        }
    }
}
