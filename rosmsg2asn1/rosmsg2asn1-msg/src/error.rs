//! Error type for .msg definition parsing.

use rosmsg2asn1_core::SchemaError;

/// Error produced while parsing one .msg definition.
#[derive(Debug, thiserror::Error)]
pub enum MsgParseError {
    /// A line was neither blank, a comment, a constant, nor a
    /// `<type> <name>` field declaration.
    #[error("line {line}: malformed field declaration '{text}'")]
    Syntax { line: usize, text: String },

    /// A field declaration parsed but its type failed classification.
    #[error("line {line}: {source}")]
    Field {
        line: usize,
        #[source]
        source: SchemaError,
    },
}
