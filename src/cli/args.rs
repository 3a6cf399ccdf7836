//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use toolforge::config::CONFIG_FILE;
use toolforge::image::ImageFormatKind;
use toolforge::text::CaseKind;

/// ToolForge text, data and image utilities
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (optional, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Count words, characters, sentences, paragraphs and lines
    #[command(visible_alias = "s")]
    Stats {
        /// Input file, `-` or omitted for stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,

        /// Print metrics as JSON
        #[arg(short, long)]
        json: bool,

        /// Reading speed in words per minute (overrides config)
        #[arg(short, long)]
        wpm: Option<usize>,
    },

    /// Convert text between letter cases
    #[command(visible_alias = "c")]
    Case {
        /// Target case, or `all` to print every conversion
        #[arg(value_parser = parse_case_target)]
        kind: CaseTarget,

        /// Input file, `-` or omitted for stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,
    },

    /// Format, minify or validate JSON
    #[command(visible_alias = "j")]
    Json {
        #[command(subcommand)]
        action: JsonCommand,
    },

    /// Encode or decode Base64 text
    #[command(visible_alias = "b")]
    Base64 {
        #[command(subcommand)]
        action: Base64Command,
    },

    /// Generate or check UUIDs
    #[command(visible_alias = "u")]
    Uuid {
        /// Number of UUIDs to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Check whether a value is a valid UUID instead of generating
        #[arg(long, conflicts_with = "count")]
        check: Option<String>,
    },

    /// Compress, resize or convert images
    #[command(visible_alias = "i")]
    Image {
        #[command(subcommand)]
        action: ImageCommand,
    },

    /// Format a byte count for humans
    Size {
        /// Number of bytes
        bytes: u64,

        /// Fixed number of decimals (default: up to two, trailing zeros trimmed)
        #[arg(short, long)]
        decimals: Option<usize>,
    },
}

/// `case` target: a single kind or every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTarget {
    Kind(CaseKind),
    All,
}

fn parse_case_target(value: &str) -> Result<CaseTarget, String> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(CaseTarget::All);
    }
    CaseKind::from_str(value, true).map(CaseTarget::Kind)
}

#[derive(Subcommand, Debug, Clone)]
pub enum JsonCommand {
    /// Pretty-print JSON
    Format {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,

        /// Spaces per indentation level (overrides config, 0 minifies)
        #[arg(short, long)]
        indent: Option<usize>,
    },
    /// Strip all insignificant whitespace
    Minify {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,
    },
    /// Check that the input parses
    Validate {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum Base64Command {
    /// UTF-8 text to Base64
    Encode {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,
    },
    /// Base64 to UTF-8 text
    Decode {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ImageCommand {
    /// Re-encode images at a lower quality
    Compress {
        #[command(flatten)]
        batch: ImageBatchArgs,

        /// Quality between 0.0 and 1.0 (overrides config)
        #[arg(short, long)]
        quality: Option<f32>,
    },

    /// Scale images to new dimensions
    Resize {
        #[command(flatten)]
        batch: ImageBatchArgs,

        /// Target width in pixels
        #[arg(short = 'W', long, value_parser = clap::value_parser!(u32).range(1..))]
        width: Option<u32>,

        /// Target height in pixels
        #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
        height: Option<u32>,

        /// Keep the source aspect ratio when only one side is given (overrides config)
        #[arg(short = 'a', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        keep_aspect: Option<bool>,
    },

    /// Convert images to another format
    Convert {
        #[command(flatten)]
        batch: ImageBatchArgs,

        /// Target format
        #[arg(short, long)]
        to: ImageFormatKind,
    },
}

/// Shared arguments for image batch commands
#[derive(clap::Args, Debug, Clone)]
pub struct ImageBatchArgs {
    /// Image files to process
    #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Output directory (default: next to each input)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}
