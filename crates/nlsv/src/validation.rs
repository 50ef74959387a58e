//! Soft record-length consistency checks.

use std::fmt;

use crate::record::Record;

/// A record whose field count differs from the one set by the first record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthMismatch {
    /// 1-based number of the blank line that closed the record;
    /// `None` if the record was closed by end of input.
    pub line: Option<usize>,
    /// Field count of the first record.
    pub expected: usize,
    /// Field count of this record.
    pub actual: usize,
    /// The offending record's fields.
    pub fields: Vec<String>,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Inconsistent record length at line {line}")?,
            None => write!(f, "Inconsistent record length at the end of file")?,
        }
        write!(f, " (expected {}, got {}), record: {:?}", self.expected, self.actual, self.fields)
    }
}

/// Tracks the expected field count across a parse.
///
/// The first observed record fixes the expected length for the rest of the
/// run; later records are compared against it and it is never updated, even
/// if most records share some other length.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthTracker {
    expected: Option<usize>,
}

impl LengthTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expected field count, once the first record has been seen.
    #[must_use]
    pub fn expected(&self) -> Option<usize> {
        self.expected
    }

    /// Checks a closed record. `line` is where the record was closed
    /// (`None` for end of input).
    pub fn observe(&mut self, record: &Record, line: Option<usize>) -> Option<LengthMismatch> {
        let actual = record.len();
        match self.expected {
            None => {
                self.expected = Some(actual);
                None
            }
            Some(expected) if expected != actual => Some(LengthMismatch {
                line,
                expected,
                actual,
                fields: record.fields().to_vec(),
            }),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> Record {
        Record::new(fields.iter().map(|f| f.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_first_record_sets_expected() {
        let mut tracker = LengthTracker::new();
        assert_eq!(tracker.expected(), None);
        assert_eq!(tracker.observe(&record(&["a", "b"]), Some(3)), None);
        assert_eq!(tracker.expected(), Some(2));
    }

    #[test]
    fn test_expected_never_changes() {
        let mut tracker = LengthTracker::new();
        tracker.observe(&record(&["x"]), Some(2));

        for line in [5, 8, 11] {
            let mismatch = tracker.observe(&record(&["a", "b", "c"]), Some(line)).unwrap();
            assert_eq!(mismatch.expected, 1);
            assert_eq!(mismatch.actual, 3);
            assert_eq!(mismatch.line, Some(line));
        }
        assert_eq!(tracker.expected(), Some(1));
        assert_eq!(tracker.observe(&record(&["y"]), None), None);
    }

    #[test]
    fn test_mismatch_message() {
        let mut tracker = LengthTracker::new();
        tracker.observe(&record(&["x"]), Some(2));

        let at_line = tracker.observe(&record(&["y", "z"]), Some(5)).unwrap();
        assert_eq!(
            at_line.to_string(),
            r#"Inconsistent record length at line 5 (expected 1, got 2), record: ["y", "z"]"#
        );

        let at_eof = tracker.observe(&record(&["y", "z"]), None).unwrap();
        assert!(at_eof.to_string().starts_with("Inconsistent record length at the end of file"));
    }
}
