//! TSV writer.
//!
//! Provides [`TsvWriter`] for writing records to any type implementing
//! [`Write`].

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{
    error::ConvertResult,
    record::{Document, Record},
};

/// Writes records as tab-joined lines terminated by `\n`.
///
/// Fields are written verbatim: no quoting or escaping, and records of
/// different lengths are accepted. Output is buffered by the underlying
/// [`csv::Writer`]; call [`flush`](Self::flush) before dropping.
///
/// # Example
///
/// ```
/// use nlsv::{record::Record, writer::TsvWriter};
///
/// let mut output = Vec::new();
/// let mut writer = TsvWriter::new(&mut output);
/// writer.write(&Record::new(vec!["a".into(), "b".into()]).unwrap()).unwrap();
/// writer.flush().unwrap();
/// drop(writer);
///
/// assert_eq!(output, b"a\tb\n");
/// ```
pub struct TsvWriter<W: Write> {
    inner: csv::Writer<W>,
    /// Records written so far.
    records_written: usize,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(Terminator::Any(b'\n'))
            .quote_style(QuoteStyle::Never)
            .flexible(true)
            .has_headers(false)
            .from_writer(writer);

        Self { inner, records_written: 0 }
    }

    /// Writes one record as a single line.
    pub fn write(&mut self, record: &Record) -> ConvertResult<()> {
        self.inner.write_record(record.fields())?;
        self.records_written += 1;
        Ok(())
    }

    /// Writes records in order.
    pub fn write_all(&mut self, records: &[Record]) -> ConvertResult<()> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> ConvertResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> ConvertResult<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

/// Writes every record of `document` to `output` and flushes it.
///
/// Returns the number of records written.
pub fn write_document<W: Write>(document: &Document, output: W) -> ConvertResult<usize> {
    let mut writer = TsvWriter::new(output);
    writer.write_all(document.records())?;
    writer.flush()?;
    Ok(writer.records_written())
}
