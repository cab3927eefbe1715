//! Error types for record translation.

/// Error produced while translating one record into an ASN.1 module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// A non-primitive field type carried no `package/` qualifier, so no
    /// import library can be derived for it.
    #[error(
        "field '{field}' of '{record}' has composed type '{base_type}' without a package qualifier"
    )]
    UnqualifiedType {
        record: String,
        field: String,
        base_type: String,
    },

    /// A single-field record still held an array field after rewriting.
    /// Array rewriting turns every field scalar, so this indicates an
    /// inconsistent schema rather than valid input.
    #[error("field '{field}' of '{record}' did not reduce to a scalar type")]
    UnreducedField { record: String, field: String },
}
