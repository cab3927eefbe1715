//! ASN.1 translation engine for ROS message schemas.
//!
//! Key components:
//! - [`map_primitive`] — primitive type → (ASN.1 type, import library)
//! - [`ImportMap`] — per-record aggregation of import clauses
//! - [`translate`] — one [`RecordSchema`](rosmsg2asn1_core::RecordSchema) →
//!   ASN.1 module text plus the record dependencies it references

mod error;
mod imports;
mod mapping;
mod translate;

pub use error::TranslateError;
pub use imports::ImportMap;
pub use mapping::{Asn1Primitive, BASIC_TYPES, EXTENDED_TYPES, TIME_TYPES, map_primitive};
pub use translate::{Translation, VARIABLE_ARRAY_CAP, translate};
