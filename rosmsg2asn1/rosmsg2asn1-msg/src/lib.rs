//! Filesystem-backed schema resolver for ROS .msg definitions.
//!
//! [`PackageIndex`] scans package roots for `<package>/msg/<Name>.msg` files
//! and implements [`SchemaResolver`](rosmsg2asn1_core::SchemaResolver):
//! a qualified `pkg/Name` looks up exactly one message, an unqualified name
//! is searched across every indexed package and rejected when ambiguous.
//! [`parse_msg`] turns one .msg definition into a
//! [`RecordSchema`](rosmsg2asn1_core::RecordSchema).

mod error;
mod index;
mod parser;

pub use error::MsgParseError;
pub use index::PackageIndex;
pub use parser::parse_msg;
