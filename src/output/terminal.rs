//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::{FactorReport, ItemStats, ReliabilityRating};

/// Format a [`FactorReport`] for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing. The alpha headline is
/// colored by its interpretation band; items whose item-rest correlation
/// falls below the screening threshold are flagged.
pub fn format_report(report: &FactorReport) -> String {
    let mut output = String::new();

    let header = match report.rating {
        ReliabilityRating::Excellent | ReliabilityRating::Good | ReliabilityRating::Acceptable => {
            format!("{} {}", "\u{2713}".green().bold(), "RELIABLE SCALE".green().bold())
        }
        ReliabilityRating::Questionable => format!(
            "{} {}",
            "\u{26A0}".yellow().bold(),
            "QUESTIONABLE RELIABILITY".yellow().bold()
        ),
        ReliabilityRating::Poor | ReliabilityRating::Unacceptable => format!(
            "{} {}",
            "\u{26A0}".yellow().bold(),
            "LOW RELIABILITY".red().bold()
        ),
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let alpha_str = format!(
        "Cronbach's alpha: {:.3} ({})",
        report.alpha,
        report.rating.label()
    );
    let alpha_colored = match report.rating {
        ReliabilityRating::Excellent | ReliabilityRating::Good => alpha_str.green(),
        ReliabilityRating::Acceptable | ReliabilityRating::Questionable => alpha_str.yellow(),
        ReliabilityRating::Poor | ReliabilityRating::Unacceptable => alpha_str.red(),
    };
    output.push_str(&format_box_line(&alpha_colored.to_string()));

    output.push_str(&format_box_line(&format!("Items: {}", report.n_items)));
    output.push_str(&format_box_line(&format!(
        "Complete observations: {}",
        report.n_observations
    )));

    output.push_str(&format_box_separator());
    output.push_str(&format_box_line(
        &"Inter-item correlations:".bold().to_string(),
    ));
    output.push_str(&format_box_line(&format!(
        "  mean={}  min={}  max={}",
        fmt_stat(report.correlations.mean),
        fmt_stat(report.correlations.min),
        fmt_stat(report.correlations.max)
    )));

    output.push_str(&format_box_separator());
    output.push_str(&format_box_line(&"Item screening:".bold().to_string()));

    let name_width = report
        .item_analysis
        .items
        .iter()
        .map(|s| s.item.chars().count())
        .max()
        .unwrap_or(0);
    for stats in &report.item_analysis.items {
        output.push_str(&format_box_line(&format_item_line(stats, name_width)));
    }

    output.push_str(&format_box_bottom());

    output.push_str(&format!(
        "\n{}\n",
        "Note: item-rest correlation below 0.30 suggests the item measures a different construct."
            .dimmed()
            .italic()
    ));

    output
}

/// Format one item's screening line, flagging weak items.
fn format_item_line(stats: &ItemStats, name_width: usize) -> String {
    let line = format!(
        "  {:<width$}  r.total={}  r.rest={}  mean={}  sd={}",
        stats.item,
        fmt_stat(stats.item_total),
        fmt_stat(stats.item_rest),
        fmt_stat(stats.mean),
        fmt_stat(stats.std_dev),
        width = name_width
    );
    if stats.item_rest.is_nan() {
        format!("{}  {}", line, "n/a".dimmed())
    } else if stats.is_weak() {
        format!("{}  {}", line, "weak".yellow().bold())
    } else {
        line
    }
}

/// Format a statistic, rendering undefined values as "n/a".
fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.3}", value)
    }
}

// Box drawing helpers

const BOX_WIDTH: usize = 72;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
