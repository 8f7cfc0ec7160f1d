//! Constants shared by the tokenizer, coercer and schema parser.

// =============================================================================
// Boolean Literals
// =============================================================================

/// Tokens accepted as `true` by the boolean coercer
pub const TRUE_LITERALS: &[&str] = &["1", "t", "T", "true", "TRUE", "True"];

/// Tokens accepted as `false` by the boolean coercer
pub const FALSE_LITERALS: &[&str] = &["0", "f", "F", "false", "FALSE", "False"];

// =============================================================================
// Tokenizer Defaults
// =============================================================================

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Default quote character
pub const DEFAULT_QUOTE: u8 = b'"';

// =============================================================================
// Column Specifications
// =============================================================================

/// Separator between column name and kind in a `name:kind` spec
pub const COLUMN_SPEC_SEPARATOR: char = ':';

/// Suffix marking a column spec as read-only
pub const READ_ONLY_SUFFIX: char = '!';
