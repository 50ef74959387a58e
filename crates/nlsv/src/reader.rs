//! Streaming NLSV reader.
//!
//! Provides [`RecordReader`], an iterator that groups lines into records,
//! and [`parse_document`], which drains it into a [`Document`].

use std::{
    io::{self, BufRead, BufReader, Read},
    str,
};

use tracing::warn;

use crate::{
    error::ConvertResult,
    record::{Document, Record},
    validation::{LengthMismatch, LengthTracker},
};

/// Line-grouping reader for NLSV input.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. Each non-blank line (after
/// trimming surrounding whitespace) becomes a field of the current record.
/// A blank line closes the record; blank lines with no open record are
/// ignored. A record still open at end of input is yielded as well.
///
/// Records whose field count differs from the first record's are logged
/// with `tracing::warn!` and counted in
/// [`mismatch_count`](Self::mismatch_count), but still yielded unchanged.
/// The mismatches themselves are only retained after
/// [`keep_mismatches`](Self::keep_mismatches).
///
/// # Example
///
/// ```
/// use nlsv::reader::RecordReader;
///
/// let mut reader = RecordReader::new("x\n\ny\nz".as_bytes());
/// let records: Vec<_> = reader.by_ref().collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(reader.mismatch_count(), 1);
/// assert!(reader.mismatches().is_empty());
/// ```
pub struct RecordReader<R> {
    inner: BufReader<R>,
    /// Current line, without its terminator.
    line: Vec<u8>,
    /// Previous line ended in `\r`; a `\n` right after it belongs to it.
    after_cr: bool,
    /// Lines consumed so far.
    lines_read: usize,
    /// Records yielded so far.
    records_read: usize,
    tracker: LengthTracker,
    mismatch_count: usize,
    keep_mismatches: bool,
    mismatches: Vec<LengthMismatch>,
    /// Set at EOF or after an I/O error.
    finished: bool,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new reader; the input is wrapped in a [`BufReader`].
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            line: Vec::new(),
            after_cr: false,
            lines_read: 0,
            records_read: 0,
            tracker: LengthTracker::new(),
            mismatch_count: 0,
            keep_mismatches: false,
            mismatches: Vec::new(),
            finished: false,
        }
    }

    /// Retains every [`LengthMismatch`] for [`mismatches`](Self::mismatches).
    ///
    /// Memory then grows with the number of inconsistent records.
    #[must_use]
    pub fn keep_mismatches(mut self) -> Self {
        self.keep_mismatches = true;
        self
    }

    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Field count set by the first record, if one has been read.
    #[must_use]
    pub fn expected_len(&self) -> Option<usize> {
        self.tracker.expected()
    }

    /// Number of records whose length differed from the expected one.
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.mismatch_count
    }

    /// Retained mismatches; empty unless [`keep_mismatches`](Self::keep_mismatches) was set.
    #[must_use]
    pub fn mismatches(&self) -> &[LengthMismatch] {
        &self.mismatches
    }

    pub fn into_mismatches(self) -> Vec<LengthMismatch> {
        self.mismatches
    }

    /// Reads the next line into `self.line`. Returns `false` at EOF.
    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();

        if self.after_cr {
            self.after_cr = false;
            if self.inner.fill_buf()?.first() == Some(&b'\n') {
                self.inner.consume(1);
            }
        }

        loop {
            let available = self.inner.fill_buf()?;
            if available.is_empty() {
                return Ok(!self.line.is_empty());
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.after_cr = available[end] == b'\r';
                    self.line.extend_from_slice(&available[..end]);
                    self.inner.consume(end + 1);
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    self.line.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }
    }

    /// Finishes a record. Returns `None` if no fields were collected.
    fn close(&mut self, fields: Vec<String>, line: Option<usize>) -> Option<Record> {
        let record = Record::new(fields)?;
        self.records_read += 1;

        if let Some(mismatch) = self.tracker.observe(&record, line) {
            warn!(
                line = ?mismatch.line,
                expected = mismatch.expected,
                actual = mismatch.actual,
                "{mismatch}"
            );
            self.mismatch_count += 1;
            if self.keep_mismatches {
                self.mismatches.push(mismatch);
            }
        }
        Some(record)
    }
}

/// Characters trimmed from both ends of a line: Unicode whitespace plus the
/// information separators U+001C..=U+001F.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = ConvertResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut fields = Vec::new();
        loop {
            match self.read_line() {
                Ok(false) => {
                    self.finished = true;
                    return self.close(fields, None).map(Ok);
                }
                Ok(true) => {
                    self.lines_read += 1;
                    let value = match str::from_utf8(&self.line) {
                        Ok(line) => line.trim_matches(is_blank),
                        Err(e) => {
                            self.finished = true;
                            return Some(Err(io::Error::new(io::ErrorKind::InvalidData, e).into()));
                        }
                    };
                    if !value.is_empty() {
                        fields.push(value.to_string());
                    } else if !fields.is_empty() {
                        let line = self.lines_read;
                        return self.close(fields, Some(line)).map(Ok);
                    }
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Reads the whole input into a [`Document`].
///
/// Fails only on I/O errors (including invalid UTF-8); inconsistent record
/// lengths end up in [`Document::mismatches`].
pub fn parse_document<R: Read>(input: R) -> ConvertResult<Document> {
    let mut reader = RecordReader::new(input).keep_mismatches();
    let records = reader.by_ref().collect::<ConvertResult<Vec<_>>>()?;
    let expected_len = reader.expected_len();

    Ok(Document { records, expected_len, mismatches: reader.into_mismatches() })
}
