use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::scoring::{ScoreResult, MATCH_THRESHOLD};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a total score. Capped totals get an asterisk so the reader knows a
/// deal-breaker pulled the number down.
pub fn format_score(total: u8, capped: bool) -> String {
    if capped {
        format!("{}*", total)
    } else {
        total.to_string()
    }
}

fn match_label(result: &ScoreResult) -> &'static str {
    if result.is_match() {
        "match"
    } else {
        "no match"
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked results as a table with columns: Index, Score, Match, Address
/// No headers.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column: 4 chars (fits "100*"), right-aligned
/// Match column: 8 chars (fits "no match"), left-aligned
pub fn format_scored_table(results: &[ScoreResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No houses to show.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 4;
    let match_width = 8;
    let separator = "  ";

    results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format_score(result.total_score, result.capped);
            let score_padded = format!("{:>width$}", score_str, width = score_width);
            let match_padded = format!("{:<width$}", match_label(result), width = match_width);

            let fixed_width = index_width + 1 + score_width + match_width + separator.len() * 2;
            let address = result.house.display_address();
            let address = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_text(&address, width - fixed_width)
                } else {
                    truncate_text(&address, 20)
                }
            } else {
                address
            };

            if use_colors {
                let match_colored = if result.is_match() {
                    match_padded.green().to_string()
                } else {
                    match_padded.red().to_string()
                };
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    match_colored,
                    separator,
                    address
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, match_padded, separator, address
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single result with detailed multi-line output
pub fn format_house_detail(result: &ScoreResult, use_colors: bool) -> String {
    let address = result.house.display_address();
    let score = format_score(result.total_score, result.capped);

    let dimensions = result
        .dimensions
        .iter()
        .map(|d| format!("  {:<8}{:>4}", format!("{}:", d.dimension), d.score))
        .collect::<Vec<_>>()
        .join("\n");

    if use_colors {
        let verdict = if result.is_match() {
            match_label(result).green().to_string()
        } else {
            match_label(result).red().to_string()
        };
        format!(
            "{}\n  Mode: {}\n{}\n  Total: {} ({})\n  {}",
            address.bold(),
            result.priority_mode.cyan(),
            dimensions,
            score.bold(),
            verdict,
            result.summary.dimmed()
        )
    } else {
        format!(
            "{}\n  Mode: {}\n{}\n  Total: {} ({})\n  {}",
            address,
            result.priority_mode,
            dimensions,
            score,
            match_label(result),
            result.summary
        )
    }
}

/// Format results as tab-separated values for scripting
/// Columns: total, match, price, space, safety, schools, address (no headers, no colors)
pub fn format_tsv(results: &[ScoreResult]) -> String {
    if results.is_empty() {
        return String::new();
    }

    results
        .iter()
        .map(|result| {
            let dims = result
                .dimensions
                .iter()
                .map(|d| d.score.to_string())
                .collect::<Vec<_>>()
                .join("\t");
            format!(
                "{}\t{}\t{}\t{}",
                result.total_score,
                result.total_score >= MATCH_THRESHOLD,
                dims,
                result.house.display_address()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format results as a pretty-printed JSON array
pub fn format_json(results: &[ScoreResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
