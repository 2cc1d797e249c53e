//! `alt --lex`: one JSON object per template segment.

use std::io::Write;

use altgen::{BlockKind, Lexer, Segment};
use anyhow::Result;
use bstr::ByteSlice;
use serde_json::{Value, json};

pub fn segment_json(segment: &Segment<'_>) -> Value {
    match segment {
        Segment::Literal(lit) => json!({
            "kind": "literal",
            "start": lit.span.start,
            "end": lit.span.end,
            "line": lit.line,
            "text": lit.bytes.to_str_lossy(),
        }),
        Segment::Block(block) => json!({
            "kind": match block.kind {
                BlockKind::Statement => "statement",
                BlockKind::Expression => "expression",
            },
            "start": block.span.start,
            "end": block.span.end,
            "line": block.line,
            "trim": block.trim,
            "terminated": block.terminated,
            "code": block.code.to_str_lossy(),
        }),
    }
}

pub fn write_segments<W: Write>(input: &[u8], mut out: W) -> Result<()> {
    for segment in Lexer::new(input) {
        serde_json::to_writer(&mut out, &segment_json(&segment))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
