//! Line-oriented parsing of SDL files.
//!
//! An SDL file is a flat sequence of blocks:
//!
//! ```text
//! <kind> <name> {
//! <item-line>
//! <item-line>
//! }
//! ```
//!
//! Lines are trimmed before they are classified and blank lines are ignored.
//! Blocks do not nest. Text outside a block is recorded as skipped.
//!
//! # Examples
//!
//! ```
//! use sdldiff::parser::parse_str;
//!
//! let doc = parse_str("service foo {\nport\ntimeout\n}\n").unwrap();
//! let foo = doc.get("foo").unwrap();
//! assert_eq!(foo.kind, "service");
//! assert!(foo.has_item("timeout"));
//! ```

use crate::document::{Document, Object};
use crate::error::ParseError;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const BLOCK_OPEN: char = '{';
const BLOCK_CLOSE: &str = "}";

/// Parser options.
#[derive(Debug, Clone, Default)]
pub struct ParseConfig {
    /// Fail on a block still open at end of input instead of discarding it.
    pub strict: bool,
}

/// Reads and parses a file with the default configuration.
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The content is not well-formed SDL (see [`parse_str`])
///
/// # Examples
///
/// ```no_run
/// use sdldiff::parser::parse_file;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = parse_file(Path::new("schema.sdl"))?;
/// println!("{} objects", doc.len());
/// # Ok(())
/// # }
/// ```
pub fn parse_file(path: &Path) -> Result<Document, ParseError> {
    parse_file_with(path, &ParseConfig::default())
}

/// Reads and parses a file.
pub fn parse_file_with(path: &Path, config: &ParseConfig) -> Result<Document, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let bytes = fs::read(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    // Items are opaque; invalid UTF-8 is replaced rather than rejected.
    let content = String::from_utf8_lossy(&bytes);
    let doc = parse_str_with(&content, config)?;
    info!(path = %path.display(), objects = doc.len(), "loaded document");
    Ok(doc)
}

/// Parses SDL text with the default configuration.
///
/// # Errors
///
/// - `ParseError::NestedBlock` when a block opens while another is open
/// - `ParseError::UnexpectedClose` when `}` appears with no open block
/// - `ParseError::DuplicateItem` when a block repeats an item line
///
/// No partial document is returned on failure.
pub fn parse_str(content: &str) -> Result<Document, ParseError> {
    parse_str_with(content, &ParseConfig::default())
}

/// Parses SDL text.
///
/// With `config.strict` set, a block left open at end of input fails with
/// `ParseError::UnterminatedBlock`; otherwise the block is dropped.
pub fn parse_str_with(content: &str, config: &ParseConfig) -> Result<Document, ParseError> {
    let mut doc = Document::new();
    let mut open: Option<Object> = None;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_suffix(BLOCK_OPEN) {
            if open.is_some() {
                return Err(ParseError::nested_block(line_no));
            }
            let object = Object::from_header(header, line_no);
            debug!(line = line_no, kind = %object.kind, name = %object.name, "block opened");
            open = Some(object);
            continue;
        }

        if line == BLOCK_CLOSE {
            let object = open
                .take()
                .ok_or_else(|| ParseError::unexpected_close(line_no))?;
            debug!(line = line_no, kind = %object.kind, name = %object.name, "block closed");
            if let Some(previous) = doc.insert(object) {
                warn!(
                    name = %previous.name,
                    first = previous.line,
                    "duplicate object name, keeping the later block"
                );
            }
            continue;
        }

        match open.as_mut() {
            Some(object) => {
                if !object.insert_item(line) {
                    return Err(ParseError::duplicate_item(
                        line_no,
                        object.kind.as_str(),
                        object.name.as_str(),
                        line,
                    ));
                }
            }
            None => {
                debug!(line = line_no, text = line, "skipping line outside of any block");
                doc.record_skipped(line_no, line);
            }
        }
    }

    if let Some(object) = open {
        if config.strict {
            return Err(ParseError::unterminated_block(
                object.line,
                object.kind,
                object.name,
            ));
        }
        warn!(
            line = object.line,
            kind = %object.kind,
            name = %object.name,
            "discarding unterminated block"
        );
    }

    Ok(doc)
}
