use std::path::PathBuf;

use altgen::{ProcessOptions, UnterminatedBlock};
use clap::{Parser, ValueEnum};

/// CLI arguments for the `alt` binary.
#[derive(Parser, Debug)]
#[command(
    name = "alt",
    version,
    about = "Turn a template of literal text and /* */ escape blocks into C++ or Rust source"
)]
pub struct CliArgs {
    /// Template file to read.
    pub input: PathBuf,

    /// Source file to write.
    #[arg(required_unless_present = "lex")]
    pub output: Option<PathBuf>,

    /// Language of the generated source.
    #[arg(long, value_enum, default_value_t = DialectArg::Cpp, ignore_case = true)]
    pub dialect: DialectArg,

    /// Fail on an escape block that is never closed instead of running it
    /// to end of file.
    #[arg(long)]
    pub strict: bool,

    /// Do not emit line-marker directives.
    #[arg(long = "no-line-directives")]
    pub no_line_directives: bool,

    /// File name to put in line-marker directives (default: INPUT as given).
    #[arg(long, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Print the template's segments as JSON lines instead of generating
    /// source.
    #[arg(long)]
    pub lex: bool,

    /// Log at debug level to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Target language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// C++ with `#line` directives.
    Cpp,
    /// Rust with `// #line` comments.
    Rust,
}

impl CliArgs {
    pub fn process_options(&self) -> ProcessOptions {
        ProcessOptions {
            unterminated_block: if self.strict {
                UnterminatedBlock::Reject
            } else {
                UnterminatedBlock::Tolerate
            },
            line_directives: !self.no_line_directives,
        }
    }

    /// Name written into directives.
    pub fn directive_file_name(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| self.input.to_string_lossy().into_owned())
    }
}
