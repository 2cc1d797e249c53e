#![allow(dead_code)]

use core::fmt::Write;

use altgen::{Dialect, ProcessOptions, Transpiler};

/// Transpiles `input` and numbers the output lines, with a `|` marking the
/// end of each line so trailing whitespace stays visible in snapshots.
pub fn render<D: Dialect>(dialect: D, options: ProcessOptions, input: &[u8], name: &str) -> String {
    let out = Transpiler::with_dialect(dialect, options)
        .process_to_vec(input, name)
        .expect("transpile");
    let text = String::from_utf8(out).expect("generated source is UTF-8");
    let mut rendered = String::new();
    for (n, line) in text.lines().enumerate() {
        writeln!(rendered, "{:02}|{line}|", n + 1).unwrap();
    }
    rendered
}
