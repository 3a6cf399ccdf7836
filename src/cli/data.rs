//! `json`, `base64`, `uuid` and `size` commands.

use anyhow::{Result, bail};
use toolforge::codec::{
    decode_base64, encode_base64, generate_multiple_uuids, generate_uuid, is_valid_uuid,
};
use toolforge::config::ToolConfig;
use toolforge::image::format_file_size;
use toolforge::json::{format_json, minify_json, validate_json};
use toolforge::logger;
use toolforge::utils::plural::plural_count;

use super::args::{Base64Command, JsonCommand};
use super::common::{print_output, read_input, read_text};

pub fn run_json(action: &JsonCommand, config: &ToolConfig) -> Result<()> {
    match action {
        JsonCommand::Format { input, indent } => {
            let text = read_input(input.as_deref())?;
            let indent = indent.unwrap_or(config.json.indent);
            print_output(&format_json(&text, indent)?)
        }
        JsonCommand::Minify { input } => {
            let text = read_input(input.as_deref())?;
            print_output(&minify_json(&text)?)
        }
        JsonCommand::Validate { input } => {
            let text = read_input(input.as_deref())?;
            match validate_json(&text).into_result() {
                Ok(()) => {
                    logger::success("valid JSON");
                    Ok(())
                }
                Err(message) => {
                    logger::failure("invalid JSON", &message);
                    bail!("validation failed")
                }
            }
        }
    }
}

pub fn run_base64(action: &Base64Command) -> Result<()> {
    match action {
        Base64Command::Encode { input } => {
            let text = read_text(input.as_deref())?;
            print_output(&encode_base64(&text))
        }
        Base64Command::Decode { input } => {
            let text = read_input(input.as_deref())?;
            print_output(&decode_base64(&strip_whitespace(&text))?)
        }
    }
}

/// Drop line wrapping and indentation from pasted Base64.
fn strip_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect()
}

pub fn run_uuid(count: usize, check: Option<&str>, config: &ToolConfig) -> Result<()> {
    if let Some(value) = check {
        if is_valid_uuid(value) {
            logger::success(&format!("{value} is a valid UUID"));
            return Ok(());
        }
        logger::failure(&format!("{value} is not a valid UUID"), "");
        bail!("validation failed");
    }

    let max = config.uuid.max_batch;
    if count > max {
        bail!(
            "cannot generate {} at once (limit is {max}, see [uuid] max_batch)",
            plural_count(count, "UUID")
        );
    }

    if count == 1 {
        return print_output(&generate_uuid());
    }
    for id in generate_multiple_uuids(count) {
        print_output(&id)?;
    }
    Ok(())
}

pub fn run_size(bytes: u64, decimals: Option<usize>) -> Result<()> {
    print_output(&format_file_size(bytes, decimals))
}
