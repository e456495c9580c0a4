//! In-memory representation of a parsed SDL file.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

/// Kind given to a block whose opening line carries no tokens before `{`.
pub const UNKNOWN_KIND: &str = "unknown";

/// A single parsed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub kind: String,
    pub name: String,
    pub items: BTreeSet<String>,
    /// Line of the opening `{`, 1-based. Not part of comparison.
    pub line: usize,
}

impl Object {
    /// Builds an object from the text of an opening line with the trailing `{` removed.
    ///
    /// The first whitespace-separated token is the kind and the second is the
    /// name. Any further tokens are ignored.
    pub fn from_header(header: &str, line: usize) -> Self {
        let mut tokens = header.split_whitespace();
        let kind = tokens.next().unwrap_or(UNKNOWN_KIND).to_string();
        let name = tokens.next().unwrap_or_default().to_string();

        Self {
            kind,
            name,
            items: BTreeSet::new(),
            line,
        }
    }

    /// Adds an item, returning false if the block already holds it.
    pub fn insert_item(&mut self, item: impl Into<String>) -> bool {
        self.items.insert(item.into())
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.contains(item)
    }
}

/// A non-empty line found outside of any block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub text: String,
}

/// All blocks of one file, keyed by object name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    objects: BTreeMap<String, Object>,
    skipped: Vec<SkippedLine>,
    overwritten: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a finalized object under its name.
    ///
    /// A later block with the same name replaces the earlier one; the replaced
    /// object is returned.
    pub fn insert(&mut self, object: Object) -> Option<Object> {
        let previous = self.objects.insert(object.name.clone(), object);
        if previous.is_some() {
            self.overwritten += 1;
        }
        previous
    }

    pub fn record_skipped(&mut self, line: usize, text: impl Into<String>) {
        self.skipped.push(SkippedLine {
            line,
            text: text.into(),
        });
    }

    pub fn get(&self, name: &str) -> Option<&Object> {
        self.objects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates objects in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Object> {
        self.objects.iter()
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Number of blocks that were replaced by a later block of the same name.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Object);
    type IntoIter = btree_map::Iter<'a, String, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
