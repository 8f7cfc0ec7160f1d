//! Row tokenizer: reads the whole input into rows of tokens.
//!
//! Quoting, escaping and record delimiters are handled by the `csv` crate.
//! Every row is returned, including the first, so header handling stays
//! with the binder.

use csv::StringRecord;
use std::io::Read;
use tracing::debug;

use crate::config::ReaderConfig;
use crate::{Error, Result};

/// Read all rows from `input` using the configured dialect.
///
/// The input is drained before tokenizing, so stream failures surface as
/// [`Error::Io`] and never as tokenizer errors.
pub fn read_all_rows<R: Read>(mut input: R, config: &ReaderConfig) -> Result<Vec<StringRecord>> {
    let mut content = Vec::new();
    input
        .read_to_end(&mut content)
        .map_err(|e| Error::io("Failed to read input", e))?;

    let mut reader = config.reader_builder().from_reader(content.as_slice());

    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

    debug!("Tokenized {} rows", rows.len());
    Ok(rows)
}
