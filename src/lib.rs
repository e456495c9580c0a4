//! SDLDIFF - Structural diff tool for SDL files.
//!
//! SDL is a minimal block-structured description language: a flat sequence of
//! named blocks, each holding a set of opaque item lines. This library parses
//! two such files and reports, per object name, kind mismatches, name
//! mismatches and item-set differences.
//!
//! # Example
//!
//! ```no_run
//! use sdldiff::{parse_file, compute_diff, DiffConfig, format_diff, OutputFormat, OutputOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse two files
//! let src = parse_file(Path::new("old.sdl"))?;
//! let dst = parse_file(Path::new("new.sdl"))?;
//!
//! // Compare them by object name
//! let diff = compute_diff(&src, &dst, &DiffConfig::default());
//!
//! // Format the report
//! let output = format_diff(&diff, &OutputFormat::Plain, &OutputOptions::default());
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod document;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;

// Re-export commonly used types for convenience
pub use diff::{
    compute_diff, diff_objects, Diff, DiffConfig, DiffStats, Difference, Entry, Field, ObjectDiff,
    Side,
};
pub use document::{Document, Object, SkippedLine, UNKNOWN_KIND};
pub use error::ParseError;
pub use output::{format_diff, OutputFormat, OutputOptions};
pub use parser::{parse_file, parse_file_with, parse_str, parse_str_with, ParseConfig};
