//! Conversion entry points.
//!
//! [`convert`] runs the batch pipeline (parse everything, then write),
//! [`convert_streaming`] writes each record as soon as it closes, and
//! [`convert_files`] opens an input/output pair and runs the batch pipeline
//! over it.

use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    error::{ConvertError, ConvertResult},
    reader::{RecordReader, parse_document},
    writer::{TsvWriter, write_document},
};

/// Outcome of one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Records written to the output.
    pub records: usize,
    /// Field count set by the first record.
    pub expected_len: Option<usize>,
    /// Records whose field count differed from `expected_len`.
    pub mismatches: usize,
}

/// Parses the whole input into memory, then writes it as TSV.
pub fn convert<R: Read, W: Write>(input: R, output: W) -> ConvertResult<Summary> {
    let document = parse_document(input)?;
    let records = write_document(&document, output)?;

    let summary = Summary {
        records,
        expected_len: document.expected_len(),
        mismatches: document.mismatches().len(),
    };
    debug!(?summary, "conversion finished");
    Ok(summary)
}

/// Same output as [`convert`], without buffering the whole document.
pub fn convert_streaming<R: Read, W: Write>(input: R, output: W) -> ConvertResult<Summary> {
    let mut reader = RecordReader::new(input);
    let mut writer = TsvWriter::new(output);

    for record in reader.by_ref() {
        writer.write(&record?)?;
    }
    writer.flush()?;

    let summary = Summary {
        records: writer.records_written(),
        expected_len: reader.expected_len(),
        mismatches: reader.mismatch_count(),
    };
    debug!(?summary, "streaming conversion finished");
    Ok(summary)
}

/// Which side of the conversion a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Input,
    Output,
}

/// Converts the NLSV file at `input` into a TSV file at `output`.
///
/// The input is opened first, so a missing input never creates or truncates
/// the output. Both files are closed on every return path.
///
/// # Errors
///
/// - [`ConvertError::InputNotFound`] if `input` does not exist.
/// - [`ConvertError::PermissionDenied`] if either file is not accessible.
/// - [`ConvertError::Open`] for any other open failure.
/// - [`ConvertError::Io`] / [`ConvertError::Csv`] for failures mid-run;
///   whatever was written before the failure stays in `output`.
pub fn convert_files(input: &Path, output: &Path) -> ConvertResult<Summary> {
    let source = File::open(input).map_err(|e| open_error(input, Side::Input, e))?;
    debug!(path = %input.display(), "opened input");

    let sink = File::create(output).map_err(|e| open_error(output, Side::Output, e))?;
    debug!(path = %output.display(), "created output");

    convert(source, sink)
}

fn open_error(path: &Path, side: Side, err: io::Error) -> ConvertError {
    match err.kind() {
        io::ErrorKind::NotFound if side == Side::Input => {
            ConvertError::InputNotFound { path: path.to_path_buf() }
        }
        io::ErrorKind::PermissionDenied => {
            ConvertError::PermissionDenied { path: path.to_path_buf() }
        }
        _ => ConvertError::Open { path: path.to_path_buf(), source: err },
    }
}
