//! ToolForge command-line front-end.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use toolforge::config::ToolConfig;
use toolforge::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ToolConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Stats { input, json, wpm } => {
            cli::text::run_stats(input.as_deref(), *json, *wpm, &config)
        }
        Commands::Case { kind, input } => cli::text::run_case(*kind, input.as_deref()),
        Commands::Json { action } => cli::data::run_json(action, &config),
        Commands::Base64 { action } => cli::data::run_base64(action),
        Commands::Uuid { count, check } => cli::data::run_uuid(*count, check.as_deref(), &config),
        Commands::Image { action } => cli::image::run_image(action, &config),
        Commands::Size { bytes, decimals } => cli::data::run_size(*bytes, *decimals),
    }
}
