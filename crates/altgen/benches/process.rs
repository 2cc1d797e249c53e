//! Benchmark – `altgen::Transpiler::process`
#![allow(missing_docs)]

use altgen::{Cpp, Dialect, ProcessOptions, Rust, Transpiler};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// A deterministic template of at least `target_len` bytes: repeated table
/// rows mixing literal markup, control blocks and expressions.
fn make_template(target_len: usize) -> Vec<u8> {
    const ROW: &str = concat!(
        "/* for (const auto& row : rows) { -*/\n",
        "  <tr><td>/*- row.name */</td><td class=\"n\">/*- row.count */</td></tr>\n",
        "/* } -*/\n",
    );
    let mut out = String::with_capacity(target_len + ROW.len());
    out.push_str("<table>\n");
    while out.len() < target_len {
        out.push_str(ROW);
    }
    out.push_str("</table>\n");
    out.into_bytes()
}

/// Literal text only: measures the escaper.
fn make_literal(target_len: usize) -> Vec<u8> {
    (0..target_len)
        .map(|i| match i % 64 {
            63 => b'\n',
            7 => b'"',
            13 => 0xc3,
            _ => b'a' + (i % 26) as u8,
        })
        .collect()
}

fn run<D: Dialect>(transpiler: &Transpiler<D>, input: &[u8], out: &mut Vec<u8>) -> usize {
    out.clear();
    transpiler
        .process(input, "bench.tmpl", out)
        .expect("vec sink cannot fail");
    out.len()
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    let cpp = Transpiler::with_dialect(Cpp, ProcessOptions::default());
    let rust = Transpiler::with_dialect(Rust, ProcessOptions::default());
    let mut out = Vec::new();

    for &size in &[1_000usize, 100_000, 1_000_000] {
        let template = make_template(size);
        let literal = make_literal(size);
        group.throughput(Throughput::Bytes(template.len() as u64));

        group.bench_with_input(BenchmarkId::new("template_cpp", size), &template, |b, t| {
            b.iter(|| black_box(run(&cpp, black_box(t), &mut out)));
        });
        group.bench_with_input(BenchmarkId::new("template_rust", size), &template, |b, t| {
            b.iter(|| black_box(run(&rust, black_box(t), &mut out)));
        });
        group.bench_with_input(BenchmarkId::new("literal_cpp", size), &literal, |b, t| {
            b.iter(|| black_box(run(&cpp, black_box(t), &mut out)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
