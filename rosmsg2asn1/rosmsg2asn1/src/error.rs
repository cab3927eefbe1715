//! Error type for the generation driver.

use rosmsg2asn1_asn1::TranslateError;
use rosmsg2asn1_core::ResolveError;

/// Error attached to one failed worklist entry.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// The translated module could not be written out.
    #[error("could not persist the module for '{name}': {source}")]
    Persist {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
