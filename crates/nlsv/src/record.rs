//! Data model: records and the parsed document.

use std::fmt;

use crate::validation::LengthMismatch;

/// One logical row: the trimmed field values of consecutive non-blank lines.
///
/// A `Record` always holds at least one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(Vec<String>);

impl Record {
    /// Builds a record, or returns `None` for an empty field list.
    #[must_use]
    pub fn new(fields: Vec<String>) -> Option<Self> {
        if fields.is_empty() { None } else { Some(Self(fields)) }
    }

    /// Field values in input order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Number of fields (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_fields(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Result of one parse pass: records in the order they were closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub(crate) records: Vec<Record>,
    pub(crate) expected_len: Option<usize>,
    pub(crate) mismatches: Vec<LengthMismatch>,
}

impl Document {
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field count set by the first record; `None` for an empty document.
    #[must_use]
    pub fn expected_len(&self) -> Option<usize> {
        self.expected_len
    }

    /// Records whose field count differed from [`expected_len`](Self::expected_len).
    #[must_use]
    pub fn mismatches(&self) -> &[LengthMismatch] {
        &self.mismatches
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
