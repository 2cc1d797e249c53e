//! Lexer: the single forward pass over a template.
//!
//! The input is split into [`Segment`]s, each either a literal run or an
//! escape block. Segments are produced lazily, in input order, and their
//! spans partition the input: every byte belongs to exactly one segment,
//! markers and trimmed whitespace included.
//!
//! Scanning rules
//! - `/*` opens a block anywhere outside a block. There is no way to write a
//!   literal `/*`.
//! - A `-` directly after `/*` marks an expression block.
//! - Inside a block, `-*/` closes with trimming and `*/` closes plainly.
//!   `-*/` wins when both could match at the same position.
//! - After a trimming close, whitespace is skipped up to and including the
//!   first newline; the next line's indentation is kept.
//! - A block with no closing marker runs to end of input and is reported
//!   with `terminated == false`. The lexer itself never fails.
//!
//! Line numbers start at 1 and count every `\n` consumed, in literal text,
//! block code and trimmed whitespace alike.

use core::{iter::FusedIterator, ops::Range};

use bstr::BStr;


const OPEN: &[u8] = b"/*";
const CLOSE: &[u8] = b"*/";
const TRIM_CLOSE: &[u8] = b"-*/";

/// Scan position and current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Byte offset of the next unread byte.
    pub pos: usize,
    /// 1-based line of the next unread byte.
    pub line: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { pos: 0, line: 1 }
    }
}

impl Cursor {
    fn bump(&mut self, byte: u8) {
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
        }
    }
}

/// Whether an escape block injects code or prints a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `/* ... */`: the code is copied verbatim.
    Statement,
    /// `/*- ... */`: the code is wrapped in a print call.
    Expression,
}

/// A maximal run of bytes outside any escape block. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal<'src> {
    /// Location in the input.
    pub span: Range<usize>,
    /// The bytes at `span`.
    pub bytes: &'src BStr,
    /// Line of the first byte.
    pub line: usize,
}

/// One escape block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'src> {
    /// Location in the input, from the opening `/` through the closing
    /// marker and any whitespace eaten by a trimming close.
    pub span: Range<usize>,
    /// The code between the markers, without the expression `-`.
    pub code: &'src BStr,
    /// Statement or expression.
    pub kind: BlockKind,
    /// Closed with `-*/`.
    pub trim: bool,
    /// Line of the opening marker.
    pub line: usize,
    /// `false` when input ended before a closing marker.
    pub terminated: bool,
}

/// A piece of the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'src> {
    /// Literal text.
    Literal(Literal<'src>),
    /// An escape block.
    Block(Block<'src>),
}

impl Segment<'_> {
    /// Location of this segment in the input.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            Segment::Literal(lit) => lit.span.clone(),
            Segment::Block(block) => block.span.clone(),
        }
    }
}

/// Lazy iterator over the [`Segment`]s of a template.
///
/// ```rust
/// use altgen::{BlockKind, Lexer, Segment};
///
/// let segments: Vec<_> = Lexer::new(b"a/*- b */c").collect();
/// assert_eq!(segments.len(), 3);
/// let Segment::Block(block) = &segments[1] else { panic!() };
/// assert_eq!(block.kind, BlockKind::Expression);
/// assert_eq!(block.code, " b ");
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    input: &'src [u8],
    cursor: Cursor,
}

impl<'src> Lexer<'src> {
    /// Starts a lexer at the beginning of `input`, on line 1.
    #[must_use]
    pub fn new(input: &'src [u8]) -> Self {
        Self {
            input,
            cursor: Cursor::default(),
        }
    }

    /// Position and line of the next unread byte.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn rest(&self) -> &'src [u8] {
        &self.input[self.cursor.pos..]
    }

    fn at_open(&self) -> bool {
        self.rest().starts_with(OPEN)
    }

    fn literal(&mut self) -> Literal<'src> {
        let start = self.cursor.pos;
        let line = self.cursor.line;
        while let Some(&b) = self.input.get(self.cursor.pos) {
            if self.at_open() {
                break;
            }
            self.cursor.bump(b);
        }
        Literal {
            span: start..self.cursor.pos,
            bytes: BStr::new(&self.input[start..self.cursor.pos]),
            line,
        }
    }

    fn block(&mut self) -> Block<'src> {
        let start = self.cursor.pos;
        let line = self.cursor.line;
        self.cursor.pos += OPEN.len();

        let kind = if self.rest().first() == Some(&b'-') {
            self.cursor.pos += 1;
            BlockKind::Expression
        } else {
            BlockKind::Statement
        };

        let code_start = self.cursor.pos;
        let mut terminated = false;
        let mut trim = false;
        let mut code_end = self.input.len();
        while let Some(&b) = self.input.get(self.cursor.pos) {
            let rest = self.rest();
            if rest.starts_with(TRIM_CLOSE) {
                code_end = self.cursor.pos;
                self.cursor.pos += TRIM_CLOSE.len();
                terminated = true;
                trim = true;
                break;
            }
            if rest.starts_with(CLOSE) {
                code_end = self.cursor.pos;
                self.cursor.pos += CLOSE.len();
                terminated = true;
                break;
            }
            self.cursor.bump(b);
        }

        if trim {
            self.skip_trailing_whitespace();
        }

        Block {
            span: start..self.cursor.pos,
            code: BStr::new(&self.input[code_start..code_end]),
            kind,
            trim,
            line,
            terminated,
        }
    }

    fn skip_trailing_whitespace(&mut self) {
        while let Some(&b) = self.input.get(self.cursor.pos) {
            if !is_space(b) {
                break;
            }
            self.cursor.bump(b);
            if b == b'\n' {
                break;
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Segment<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.pos >= self.input.len() {
            return None;
        }
        if self.at_open() {
            Some(Segment::Block(self.block()))
        } else {
            Some(Segment::Literal(self.literal()))
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// The C-locale `isspace` set.
const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
