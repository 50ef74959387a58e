//! NLSV to TSV conversion library.
//!
//! NLSV ("New Line Separated Values") keeps one field value per line. A line
//! that is empty after trimming closes the current record; runs of blank
//! lines are absorbed. This crate groups such input into records, checks
//! (softly) that every record has the field count of the first one, and
//! writes each record as a tab-joined line.
//!
//! # Quick start
//!
//! ```
//! use nlsv::prelude::*;
//!
//! let input = "a\nb\n\nc\nd\n";
//! let mut output = Vec::new();
//!
//! let summary = convert(input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(summary.records, 2);
//! assert_eq!(String::from_utf8(output).unwrap(), "a\tb\nc\td\n");
//! ```

pub mod convert;
pub mod error;
pub mod reader;
pub mod record;
pub mod validation;
pub mod writer;

/// Commonly used types, re-exported for `use nlsv::prelude::*`.
pub mod prelude {
    pub use crate::{
        convert::{Summary, convert, convert_files, convert_streaming},
        error::{ConvertError, ConvertResult},
        reader::{RecordReader, parse_document},
        record::{Document, Record},
        validation::{LengthMismatch, LengthTracker},
        writer::{TsvWriter, write_document},
    };
}
