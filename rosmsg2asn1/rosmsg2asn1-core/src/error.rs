//! Error type for field classification.

/// Error produced while deriving field attributes from a raw type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The bracket suffix of an array type did not contain an unsigned
    /// integer literal (e.g. `int32[x]`, or an unterminated `int32[4`).
    #[error("malformed array bound in field type '{raw_type}'")]
    MalformedArrayBound { raw_type: String },
}
