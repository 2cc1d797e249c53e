#![no_main]

use altgen::{
    Cpp, Lexer, ProcessError, ProcessOptions, Rust, Segment, Transpiler, UnterminatedBlock,
};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// Template bytes plus the knobs that change how they are processed.
#[derive(Debug, Arbitrary)]
struct Input<'a> {
    rust: bool,
    reject_unterminated: bool,
    line_directives: bool,
    template: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let template = input.template;

    // Spans partition the input.
    let mut pos = 0;
    let mut unterminated = None;
    for segment in Lexer::new(template) {
        let span = segment.span();
        assert_eq!(span.start, pos, "gap or overlap at {pos}");
        assert!(span.end > span.start, "empty segment at {pos}");
        if let Segment::Block(block) = &segment {
            if !block.terminated {
                unterminated = Some((block.line, block.span.start));
            }
        }
        pos = span.end;
    }
    assert_eq!(pos, template.len());

    let options = ProcessOptions {
        unterminated_block: if input.reject_unterminated {
            UnterminatedBlock::Reject
        } else {
            UnterminatedBlock::Tolerate
        },
        line_directives: input.line_directives,
    };
    let result = if input.rust {
        Transpiler::with_dialect(Rust, options).process_to_vec(template, "fuzz.tmpl")
    } else {
        Transpiler::with_dialect(Cpp, options).process_to_vec(template, "fuzz.tmpl")
    };

    match (result, unterminated) {
        (Ok(_), None) => {}
        (Ok(_), Some(_)) => assert!(!input.reject_unterminated),
        (Err(ProcessError::UnterminatedBlock { line, offset }), Some(expected)) => {
            assert!(input.reject_unterminated);
            assert_eq!((line, offset), expected);
        }
        (Err(err), _) => panic!("unexpected error: {err}"),
    }
});
