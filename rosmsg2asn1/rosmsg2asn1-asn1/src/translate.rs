//! Translation of one [`RecordSchema`] into an ASN.1 module definition.
//!
//! The emitted module contains, in order: the `<Name>-Types DEFINITIONS`
//! header, one `IMPORTS` clause, one bounded `SEQUENCE OF` wrapper per array
//! field, the record's own `SEQUENCE` body, and the `END` terminator. Array
//! fields are rewritten to reference their wrapper because ASN.1 has no
//! anonymous unbounded array usable directly as a field type.

use rosmsg2asn1_core::{Arity, FieldSpec, RecordSchema};

use crate::{error::TranslateError, imports::ImportMap, mapping::map_primitive};

/// Size cap applied to variable-size arrays, which ASN.1 requires to be
/// declared with an explicit range.
pub const VARIABLE_ARRAY_CAP: usize = 256;

/// Result of translating one record.
#[derive(Debug, Clone)]
pub struct Translation {
    /// Complete ASN.1 module text.
    pub module_text: String,
    /// Non-primitive base types the record references, deduplicated in
    /// first-seen order. Each entry names a record that must be generated
    /// for the module's imports to resolve.
    pub dependencies: Vec<String>,
}

/// One field after type resolution, ready for emission.
struct EmitField {
    name: String,
    asn1_type: String,
    arity: Arity,
}

/// Translate `record` into an ASN.1 module and its record dependencies.
pub fn translate(record: &RecordSchema) -> Result<Translation, TranslateError> {
    let mut imports = ImportMap::new();
    let mut dependencies: Vec<String> = Vec::new();
    let mut fields: Vec<EmitField> = Vec::with_capacity(record.fields.len());

    for field in &record.fields {
        let asn1_type = match field.primitive {
            Some(primitive) => {
                let mapped = map_primitive(primitive);
                imports.add(mapped.library, mapped.asn1_type);
                mapped.asn1_type.to_string()
            }
            None => {
                let type_name = composed_type_name(record, field)?;
                imports.add(&format!("{type_name}-Types"), &type_name);
                if !dependencies.contains(&field.base_type) {
                    dependencies.push(field.base_type.clone());
                }
                type_name
            }
        };
        fields.push(EmitField {
            name: field.name.clone(),
            asn1_type,
            arity: field.arity,
        });
    }

    let mut out = format!("{}-Types DEFINITIONS ::=\nBEGIN\n", record.name);
    out.push_str(&imports.render());

    // Wrapper definitions: fixed-size fields first, then variable-size
    // fields, each group in field order.
    for field in &mut fields {
        if let Arity::Fixed(len) = field.arity {
            let wrapper = format!("L{}", hyphenate(&field.name));
            out.push_str(&format!(
                "{wrapper}::= SEQUENCE (SIZE(0..{len})) OF {}\n",
                field.asn1_type
            ));
            field.asn1_type = wrapper;
            field.arity = Arity::Scalar;
        }
    }
    for field in &mut fields {
        if field.arity == Arity::Variable {
            let wrapper = format!("V{}", hyphenate(&field.name));
            out.push_str(&format!(
                "{wrapper}::= SEQUENCE (SIZE(0..{VARIABLE_ARRAY_CAP})) OF {}\n",
                field.asn1_type
            ));
            field.asn1_type = wrapper;
            field.arity = Arity::Scalar;
        }
    }

    // Rewriting leaves every field scalar; a single-field record where that
    // failed to hold would otherwise emit no usable body at all.
    if let [field] = fields.as_slice() {
        if field.arity != Arity::Scalar {
            return Err(TranslateError::UnreducedField {
                record: record.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    out.push_str(&format!("{}::=\nSEQUENCE\n{{\n", record.name));
    let rows: Vec<String> = fields.iter().map(field_row).collect();
    out.push_str(&rows.join(",\n"));
    out.push_str("\n}\n");
    out.push_str("END");

    Ok(Translation {
        module_text: out,
        dependencies,
    })
}

/// Type name of a composed (non-primitive) field: the last component of its
/// `package/Name` base type.
fn composed_type_name(record: &RecordSchema, field: &FieldSpec) -> Result<String, TranslateError> {
    match field.base_type.rsplit_once('/') {
        Some((_, name)) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(TranslateError::UnqualifiedType {
            record: record.name.clone(),
            field: field.name.clone(),
            base_type: field.base_type.clone(),
        }),
    }
}

/// Render one `\t<name>\t<type>` body row, applying the collision renames:
/// a field named `type` collides with the ASN.1 keyword and gets the type
/// name appended; a field whose name equals its type case-insensitively gets
/// `-field` appended.
fn field_row(field: &EmitField) -> String {
    let mut name = field.name.clone();
    if name == "type" {
        name = format!("{name}-{}", field.asn1_type);
    }
    if name.eq_ignore_ascii_case(&field.asn1_type) {
        name.push_str("-field");
    }
    format!("\t{}\t{}", hyphenate(&name), field.asn1_type)
}

/// ASN.1 identifiers use hyphens where .msg names use underscores.
fn hyphenate(name: &str) -> String {
    name.replace('_', "-")
}
