//! The schema lookup boundary between the generator and its schema source.

use crate::schema::RecordSchema;

/// Resolves a requested record name to its schema.
///
/// A qualified `"pkg/Name"` must look up exactly that record; an unqualified
/// `"Name"` must be disambiguated against every known package, reporting
/// [`ResolveError::Ambiguous`] when several packages define it.
pub trait SchemaResolver {
    fn resolve(&self, name: &str) -> Result<RecordSchema, ResolveError>;
}

/// Error returned by [`SchemaResolver`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No known package defines the record.
    #[error("could not find the message '{name}'")]
    NotFound { name: String },

    /// More than one package defines the record; the request must be
    /// qualified with a package name.
    #[error("found several messages named '{name}': {candidates:?}; qualify the request with a package name")]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },

    /// The record was located but its definition could not be read into a
    /// [`RecordSchema`].
    #[error("could not load the definition of '{name}': {source}")]
    Metadata {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
