//! Human-readable rendering of diff results.
//!
//! The report starts with one line comparing object counts, followed by one
//! section per compared source object:
//!
//! ```text
//! len(src) == len(dst): 1
//! [service] name: foo ==========
//! >>item: timeout
//! <<item: retries
//! ```
//!
//! `>>` marks a value found in the source and `<<` a value found in the
//! destination.
//!
//! # Examples
//!
//! ```
//! use sdldiff::{compute_diff, format_diff, parse_str, DiffConfig, OutputFormat, OutputOptions};
//!
//! let src = parse_str("service foo {\nport\ntimeout\n}").unwrap();
//! let dst = parse_str("service foo {\nport\nretries\n}").unwrap();
//! let diff = compute_diff(&src, &dst, &DiffConfig::default());
//!
//! let output = format_diff(&diff, &OutputFormat::Plain, &OutputOptions::default());
//! assert!(output.contains(">>item: timeout"));
//! assert!(output.contains("<<item: retries"));
//! ```

use crate::diff::{Diff, DiffStats, Difference, Entry, ObjectDiff, Side};
use colored::*;

/// Placeholder printed for the missing side of an incompatible entry.
pub const ABSENT: &str = "<absent>";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// Plain text, no colors (suitable for piping)
    Plain,
}

/// Options for controlling output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Hide the header of objects that have no differences
    pub compact: bool,
    /// Append a summary line with difference counts
    pub summary: bool,
}

/// Formats a diff according to the specified format and options.
///
/// Every line, including the last, is terminated by a newline.
pub fn format_diff(diff: &Diff, format: &OutputFormat, options: &OutputOptions) -> String {
    let colorize = matches!(format, OutputFormat::Terminal);
    let mut output = String::new();

    push_line(&mut output, format_counts(diff));

    for entry in &diff.entries {
        match entry {
            Entry::Compared(object) => {
                if options.compact && object.is_empty() {
                    continue;
                }
                format_object(&mut output, object, colorize);
            }
            Entry::Incompatible {
                source,
                destination,
            } => {
                let line = format_incompatible(source.as_deref(), destination.as_deref());
                if colorize {
                    push_line(&mut output, line.yellow().to_string());
                } else {
                    push_line(&mut output, line);
                }
            }
        }
    }

    if options.summary {
        push_line(&mut output, format_summary(&diff.stats));
    }

    output
}

fn push_line(output: &mut String, line: String) {
    output.push_str(&line);
    output.push('\n');
}

fn format_counts(diff: &Diff) -> String {
    if diff.counts_match() {
        format!("len(src) == len(dst): {}", diff.source_count)
    } else {
        format!(
            "len(src) != len(dst): {} != {}",
            diff.source_count, diff.destination_count
        )
    }
}

fn format_object(output: &mut String, object: &ObjectDiff, colorize: bool) {
    let header = format_header(object);
    if colorize {
        push_line(output, header.bold().to_string());
    } else {
        push_line(output, header);
    }

    for difference in &object.differences {
        let line = format_difference(difference);
        if !colorize {
            push_line(output, line);
            continue;
        }
        let colored = match difference.side {
            Side::Source => line.red(),
            Side::Destination => line.green(),
        };
        push_line(output, colored.to_string());
    }
}

fn format_header(object: &ObjectDiff) -> String {
    format!("[{}] name: {} ==========", object.kind, object.name)
}

fn format_difference(difference: &Difference) -> String {
    let marker = match difference.side {
        Side::Source => ">>",
        Side::Destination => "<<",
    };
    format!("{}{}: {}", marker, difference.field.label(), difference.value)
}

fn format_incompatible(source: Option<&str>, destination: Option<&str>) -> String {
    format!(
        "incompatible object: {}, {}",
        source.unwrap_or(ABSENT),
        destination.unwrap_or(ABSENT)
    )
}

fn count_of(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Formats summary statistics.
fn format_summary(stats: &DiffStats) -> String {
    if stats.is_empty() {
        return "Summary: No differences".to_string();
    }

    let mut parts = Vec::new();
    if stats.kind_mismatches > 0 {
        parts.push(count_of(stats.kind_mismatches, "kind mismatch", "kind mismatches"));
    }
    if stats.name_mismatches > 0 {
        parts.push(count_of(stats.name_mismatches, "name mismatch", "name mismatches"));
    }
    if stats.source_only_items > 0 {
        parts.push(count_of(
            stats.source_only_items,
            "source-only item",
            "source-only items",
        ));
    }
    if stats.destination_only_items > 0 {
        parts.push(count_of(
            stats.destination_only_items,
            "destination-only item",
            "destination-only items",
        ));
    }
    if stats.incompatible > 0 {
        parts.push(count_of(
            stats.incompatible,
            "incompatible object",
            "incompatible objects",
        ));
    }

    format!("Summary: {}", parts.join(", "))
}
