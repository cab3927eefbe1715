//! ROS message → ASN.1 module generation.
//!
//! [`Generator`] drives translation across the transitive closure of
//! referenced records: each requested name is resolved through a
//! [`SchemaResolver`](rosmsg2asn1_core::SchemaResolver), translated into an
//! ASN.1 module, persisted through an [`OutputSink`], and any newly
//! discovered record dependencies are queued until the closure is exhausted.
//!
//! # Pipeline
//!
//! ```text
//! requested names
//!   └─ SchemaResolver::resolve     – name → RecordSchema
//!       └─ asn1::translate         – RecordSchema → module text + dependencies
//!           └─ OutputSink::persist – module text → <Name>.asn
//! ```

mod error;
mod generator;
mod sink;

pub use error::GenerateError;
pub use generator::{GenerateFailure, GenerateReport, Generator};
pub use rosmsg2asn1_asn1 as asn1;
pub use rosmsg2asn1_core as core;
pub use rosmsg2asn1_msg as msg;
pub use sink::{FsSink, OutputSink};
