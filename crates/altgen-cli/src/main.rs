//! `alt` – template transpiler CLI.
//!
//! ```text
//! alt <INPUT> <OUTPUT> [--dialect cpp|rust] [--strict] [--no-line-directives]
//! ```

mod args;
mod lex;
mod logging;

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::Path,
    process::ExitCode,
};

use altgen::{Cpp, Dialect, IoSink, ProcessOptions, Rust, Summary, Transpiler};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::args::{CliArgs, DialectArg};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let input = fs::read(&args.input)
        .with_context(|| format!("failed to read template `{}`", args.input.display()))?;

    if args.lex {
        return lex::write_segments(&input, io::stdout().lock());
    }

    let output = args
        .output
        .as_deref()
        .context("an output path is required")?;
    let file_name = args.directive_file_name();
    let options = args.process_options();

    let summary = match args.dialect {
        DialectArg::Cpp => transpile(Cpp, options, &input, &file_name, output)?,
        DialectArg::Rust => transpile(Rust, options, &input, &file_name, output)?,
    };

    info!(
        input = %args.input.display(),
        output = %output.display(),
        literal_runs = summary.literal_runs,
        statement_blocks = summary.statement_blocks,
        expression_blocks = summary.expression_blocks,
        lines = summary.lines,
        "generated source"
    );
    Ok(())
}

fn transpile<D: Dialect>(
    dialect: D,
    options: ProcessOptions,
    input: &[u8],
    file_name: &str,
    output: &Path,
) -> Result<Summary> {
    let file = File::create(output)
        .with_context(|| format!("failed to create `{}`", output.display()))?;
    let mut sink = IoSink::new(BufWriter::new(file));

    let summary = Transpiler::with_dialect(dialect, options)
        .process(input, file_name, &mut sink)
        .with_context(|| format!("failed to transpile `{file_name}`"))?;

    sink.into_inner()
        .with_context(|| format!("failed to write `{}`", output.display()))?;
    Ok(summary)
}
