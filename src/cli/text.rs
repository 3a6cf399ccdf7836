//! `stats` and `case` commands.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use toolforge::config::ToolConfig;
use toolforge::text::{TextMetrics, convert_all};

use super::args::CaseTarget;
use super::common::{print_output, read_text};

/// Print text statistics, as a table or as JSON.
pub fn run_stats(
    input: Option<&Path>,
    json: bool,
    wpm: Option<usize>,
    config: &ToolConfig,
) -> Result<()> {
    let text = read_text(input)?;
    let wpm = wpm.unwrap_or(config.text.words_per_minute);
    let metrics = TextMetrics::from_text(&text, wpm);

    if json {
        return print_output(&serde_json::to_string_pretty(&metrics)?);
    }
    print_output(&render_metrics(&metrics))
}

fn render_metrics(metrics: &TextMetrics) -> String {
    let rows = [
        ("words", metrics.words.to_string()),
        ("characters", metrics.characters.to_string()),
        ("characters (no spaces)", metrics.characters_no_spaces.to_string()),
        ("sentences", metrics.sentences.to_string()),
        ("paragraphs", metrics.paragraphs.to_string()),
        ("lines", metrics.lines.to_string()),
        ("reading time", metrics.reading_time_label()),
    ];

    rows.iter()
        .map(|(label, value)| format!("{:<24}{}", label.dimmed(), value.bold()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print one conversion, or every conversion with its label.
pub fn run_case(target: CaseTarget, input: Option<&Path>) -> Result<()> {
    let text = read_text(input)?;

    match target {
        CaseTarget::Kind(kind) => print_output(&kind.apply(&text)),
        CaseTarget::All => {
            for (kind, converted) in convert_all(&text) {
                print_output(&format!("{:<16}{converted}", kind.label().cyan()))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_metrics_lists_every_metric() {
        let metrics = TextMetrics::from_text("One two. Three!", 200);
        let rendered = render_metrics(&metrics);

        assert_eq!(rendered.lines().count(), 7);
        assert!(rendered.lines().next().unwrap().contains("words"));
        assert!(rendered.contains("paragraphs"));
        assert!(rendered.contains("1 min"));
    }
}
