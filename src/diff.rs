//! Structural comparison of two parsed documents.
//!
//! Objects are matched by name. The source document drives the walk: every
//! source object is either compared field by field with its destination
//! counterpart, or reported as incompatible when no counterpart exists.
//!
//! # Examples
//!
//! ```
//! use sdldiff::{compute_diff, parse_str, DiffConfig};
//!
//! let src = parse_str("service foo {\nport\ntimeout\n}").unwrap();
//! let dst = parse_str("service foo {\nport\nretries\n}").unwrap();
//!
//! let diff = compute_diff(&src, &dst, &DiffConfig::default());
//!
//! assert!(diff.counts_match());
//! assert_eq!(diff.stats.source_only_items, 1);
//! assert_eq!(diff.stats.destination_only_items, 1);
//! ```

use crate::document::{Document, Object};

/// Which document a reported value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Present in the source (`>>`)
    Source,
    /// Present in the destination (`<<`)
    Destination,
}

/// The part of an object a difference refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Kind,
    Name,
    Item,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Kind => "kind",
            Field::Name => "name",
            Field::Item => "item",
        }
    }
}

/// A single value that differs between two matched objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    pub side: Side,
    pub field: Field,
    pub value: String,
}

impl Difference {
    fn source(field: Field, value: impl Into<String>) -> Self {
        Self {
            side: Side::Source,
            field,
            value: value.into(),
        }
    }

    fn destination(field: Field, value: impl Into<String>) -> Self {
        Self {
            side: Side::Destination,
            field,
            value: value.into(),
        }
    }
}

/// Comparison result for one source object and its destination counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDiff {
    /// Kind of the source object
    pub kind: String,
    /// Name of the source object
    pub name: String,
    pub differences: Vec<Difference>,
}

impl ObjectDiff {
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Returns the differences reported for one side and field.
    pub fn values(&self, side: Side, field: Field) -> Vec<&str> {
        self.differences
            .iter()
            .filter(|d| d.side == side && d.field == field)
            .map(|d| d.value.as_str())
            .collect()
    }
}

/// One record of the diff report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The object exists on both sides and was compared.
    Compared(ObjectDiff),
    /// A name present on one side only; `None` marks the absent side.
    Incompatible {
        source: Option<String>,
        destination: Option<String>,
    },
}

/// Counts of reported differences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub kind_mismatches: usize,
    pub name_mismatches: usize,
    pub source_only_items: usize,
    pub destination_only_items: usize,
    pub incompatible: usize,
}

impl DiffStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.kind_mismatches
            + self.name_mismatches
            + self.source_only_items
            + self.destination_only_items
            + self.incompatible
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn record(&mut self, entry: &Entry) {
        match entry {
            Entry::Incompatible { .. } => self.incompatible += 1,
            Entry::Compared(object) => {
                for difference in &object.differences {
                    match (difference.field, difference.side) {
                        // A mismatch is reported once per side; count it once.
                        (Field::Kind, Side::Source) => self.kind_mismatches += 1,
                        (Field::Name, Side::Source) => self.name_mismatches += 1,
                        (Field::Item, Side::Source) => self.source_only_items += 1,
                        (Field::Item, Side::Destination) => self.destination_only_items += 1,
                        (Field::Kind | Field::Name, Side::Destination) => {}
                    }
                }
            }
        }
    }
}

/// The complete diff result.
#[derive(Debug, Clone, Default)]
pub struct Diff {
    pub source_count: usize,
    pub destination_count: usize,
    pub entries: Vec<Entry>,
    pub stats: DiffStats,
}

impl Diff {
    pub fn counts_match(&self) -> bool {
        self.source_count == self.destination_count
    }

    /// Returns true if no difference or incompatibility was found.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Looks up the comparison result for a source object name.
    pub fn object(&self, name: &str) -> Option<&ObjectDiff> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Compared(object) if object.name == name => Some(object),
            _ => None,
        })
    }
}

/// Configuration for the diff algorithm.
#[derive(Debug, Clone, Default)]
pub struct DiffConfig {
    /// Also report destination names that have no source counterpart.
    pub include_destination_only: bool,
}

/// Compares two documents by object name.
///
/// Source objects are visited in name order. Destination-only objects only
/// show up in the object counts unless `config.include_destination_only` is
/// set, in which case each one is appended as an incompatible entry.
pub fn compute_diff(src: &Document, dst: &Document, config: &DiffConfig) -> Diff {
    let mut entries = Vec::new();

    for (key, lhs) in src {
        match dst.get(key) {
            Some(rhs) => entries.push(Entry::Compared(diff_objects(lhs, rhs))),
            None => entries.push(Entry::Incompatible {
                source: Some(lhs.name.clone()),
                destination: None,
            }),
        }
    }

    if config.include_destination_only {
        for (key, rhs) in dst {
            if !src.contains(key) {
                entries.push(Entry::Incompatible {
                    source: None,
                    destination: Some(rhs.name.clone()),
                });
            }
        }
    }

    let mut stats = DiffStats::new();
    for entry in &entries {
        stats.record(entry);
    }

    Diff {
        source_count: src.len(),
        destination_count: dst.len(),
        entries,
        stats,
    }
}

/// Compares two matched objects.
///
/// Kind and name mismatches come first, then source-only items, then
/// destination-only items, each in lexicographic order.
pub fn diff_objects(lhs: &Object, rhs: &Object) -> ObjectDiff {
    let mut differences = Vec::new();

    if lhs.kind != rhs.kind {
        differences.push(Difference::source(Field::Kind, &lhs.kind));
        differences.push(Difference::destination(Field::Kind, &rhs.kind));
    }

    if lhs.name != rhs.name {
        differences.push(Difference::source(Field::Name, &lhs.name));
        differences.push(Difference::destination(Field::Name, &rhs.name));
    }

    for item in lhs.items.difference(&rhs.items) {
        differences.push(Difference::source(Field::Item, item));
    }

    for item in rhs.items.difference(&lhs.items) {
        differences.push(Difference::destination(Field::Item, item));
    }

    ObjectDiff {
        kind: lhs.kind.clone(),
        name: lhs.name.clone(),
        differences,
    }
}
