//! Line-oriented parser for ROS .msg definitions, built on nom combinators.
//!
//! A .msg definition is a sequence of lines: `#` starts a comment, blank
//! lines are ignored, lines containing `=` declare constants (which
//! contribute no field), and every remaining line is a `<type> <name>` field
//! declaration. Array suffixes stay part of the raw type; splitting them off
//! is the classifier's job.

use nom::{
    IResult,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::space1,
    combinator::{opt, recognize},
    sequence::{pair, preceded, tuple},
};
use rosmsg2asn1_core::{FieldSpec, PrimitiveType, RecordSchema};

use crate::error::MsgParseError;

/// Parse the text of one .msg definition into a [`RecordSchema`].
///
/// Field order in the result is declaration order.
pub fn parse_msg(package: &str, name: &str, text: &str) -> Result<RecordSchema, MsgParseError> {
    let mut fields = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        // Constants (`int32 FOO=0`, `string GREETING=hello`) define no field.
        if line.contains('=') {
            continue;
        }
        let (field_type, field_name) =
            parse_field_line(line).ok_or_else(|| MsgParseError::Syntax {
                line: line_no,
                text: line.to_string(),
            })?;
        fields.push(
            FieldSpec::new(field_name, qualify_raw_type(package, field_type))
                .map_err(|source| MsgParseError::Field { line: line_no, source })?,
        );
    }
    Ok(RecordSchema::new(package, name, fields))
}

/// Qualify a bare complex type with the package that declares it.
///
/// .msg definitions may reference types from their own package without a
/// qualifier; `Header` is the historical exception and lives in `std_msgs`.
/// Primitives and already-qualified types pass through unchanged.
fn qualify_raw_type(package: &str, raw: &str) -> String {
    let (base, suffix) = match raw.find('[') {
        Some(idx) => raw.split_at(idx),
        None => (raw, ""),
    };
    if base.contains('/') || PrimitiveType::from_name(base).is_some() {
        return raw.to_string();
    }
    if base == "Header" {
        format!("std_msgs/Header{suffix}")
    } else {
        format!("{package}/{base}{suffix}")
    }
}

/// Truncate `line` at the first `#`.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parse `<type> <name>` with nothing else on the (already trimmed) line.
fn parse_field_line(line: &str) -> Option<(&str, &str)> {
    match field_line(line) {
        Ok(("", parsed)) => Some(parsed),
        _ => None,
    }
}

fn field_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, field_type) = raw_type(input)?;
    let (input, field_name) = preceded(space1, identifier)(input)?;
    Ok((input, (field_type, field_name)))
}

/// `pkg/Name`, `Name`, or a primitive name, with an optional `[...]` suffix
/// kept in the raw type for later classification.
fn raw_type(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        recognize(pair(identifier, opt(preceded(tag("/"), identifier)))),
        opt(array_suffix),
    ))(input)
}

fn array_suffix(input: &str) -> IResult<&str, &str> {
    recognize(tuple((tag("["), take_while(|c: char| c != ']'), tag("]"))))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}
