//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read text from a file, or from stdin for `None` / `-`.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Like [`read_input`], minus one trailing line ending.
///
/// `echo hello | toolforge ...` then sees `hello`, matching what was typed.
pub fn read_text(input: Option<&Path>) -> Result<String> {
    let mut text = read_input(input)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Write a result line to stdout.
pub fn print_output(output: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{output}")?;
    out.flush()?;
    Ok(())
}

/// Output path for a processed image.
///
/// `prefix_stem` is prepended to the file stem; the extension is replaced by
/// `extension`. Files land in `output_dir` when given, else next to `input`.
pub fn output_path(
    input: &Path,
    output_dir: Option<&Path>,
    prefix_stem: &str,
    extension: &str,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| "image".into());
    let file_name = format!("{prefix_stem}{stem}.{extension}");

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
