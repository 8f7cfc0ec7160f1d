//! Reader configuration and validation.
//!
//! Covers the tokenizer dialect handed to the `csv` crate and the policy
//! for fields whose declared kind the coercer cannot handle.

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_QUOTE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Whitespace trimming applied by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrimMode {
    /// Tokens are passed through verbatim
    #[default]
    None,
    /// Trim the header row only
    Headers,
    /// Trim data rows only
    Fields,
    /// Trim every token
    All,
}

impl TrimMode {
    /// Convert to the tokenizer's trim setting
    pub fn to_csv_trim(self) -> csv::Trim {
        match self {
            TrimMode::None => csv::Trim::None,
            TrimMode::Headers => csv::Trim::Headers,
            TrimMode::Fields => csv::Trim::Fields,
            TrimMode::All => csv::Trim::All,
        }
    }
}

/// What to do with a field whose declared kind is not a supported scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnsupportedKindPolicy {
    /// Fail the bind with `Error::UnsupportedKind`
    #[default]
    Reject,
    /// Leave the field unset and keep going (legacy behaviour)
    Skip,
}

/// Configuration for a [`crate::CsvReader`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Field delimiter byte
    pub delimiter: u8,

    /// Quote byte, or `None` to disable quoting
    pub quote: Option<u8>,

    /// Whitespace trimming
    pub trim: TrimMode,

    /// Allow rows with differing token counts
    pub flexible: bool,

    /// Lines starting with this byte are skipped
    pub comment: Option<u8>,

    /// Handling of unsupported field kinds
    pub unsupported_kinds: UnsupportedKindPolicy,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: Some(DEFAULT_QUOTE),
            trim: TrimMode::None,
            flexible: false,
            comment: None,
            unsupported_kinds: UnsupportedKindPolicy::Reject,
        }
    }
}

impl ReaderConfig {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_quote(mut self, quote: Option<u8>) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_trim(mut self, trim: TrimMode) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_unsupported_kinds(mut self, policy: UnsupportedKindPolicy) -> Self {
        self.unsupported_kinds = policy;
        self
    }

    /// Check the dialect for settings the tokenizer cannot honour
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "delimiter must be an ASCII byte, got 0x{:02x}",
                self.delimiter
            )));
        }

        if let Some(quote) = self.quote {
            if quote == self.delimiter {
                return Err(Error::configuration(format!(
                    "quote and delimiter must differ, both are '{}'",
                    quote as char
                )));
            }
        }

        if let Some(comment) = self.comment {
            if comment == self.delimiter {
                return Err(Error::configuration(format!(
                    "comment and delimiter must differ, both are '{}'",
                    comment as char
                )));
            }
        }

        Ok(())
    }

    /// Build a tokenizer for this dialect. Header handling is left to the binder.
    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(false)
            .delimiter(self.delimiter)
            .trim(self.trim.to_csv_trim())
            .flexible(self.flexible)
            .comment(self.comment);

        match self.quote {
            Some(quote) => {
                builder.quote(quote).quoting(true);
            }
            None => {
                builder.quoting(false);
            }
        }

        builder
    }
}
