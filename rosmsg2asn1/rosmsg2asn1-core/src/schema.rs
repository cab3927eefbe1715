//! Record and field model for ROS .msg schemas.
//!
//! A [`RecordSchema`] is a read-only view of one message definition, built by
//! a [`SchemaResolver`](crate::SchemaResolver) implementation and consumed by
//! the ASN.1 translator. [`classify`] splits a raw field type such as
//! `"int32[4]"` into its base type and [`Arity`].

use crate::error::SchemaError;

/// Primitive field types of the ROS .msg format.
///
/// `Byte` and `Char` are kept as distinct variants rather than folded into
/// the 8-bit integers: they map to different ASN.1 types downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    String,
    Time,
    Duration,
    /// Deprecated alias for `int8` still present in older message definitions.
    Byte,
    /// Deprecated alias for `uint8`.
    Char,
}

impl PrimitiveType {
    /// Every member of the enumeration, in declaration order.
    pub const ALL: [PrimitiveType; 16] = [
        PrimitiveType::Bool,
        PrimitiveType::Int8,
        PrimitiveType::UInt8,
        PrimitiveType::Int16,
        PrimitiveType::UInt16,
        PrimitiveType::Int32,
        PrimitiveType::UInt32,
        PrimitiveType::Int64,
        PrimitiveType::UInt64,
        PrimitiveType::Float32,
        PrimitiveType::Float64,
        PrimitiveType::String,
        PrimitiveType::Time,
        PrimitiveType::Duration,
        PrimitiveType::Byte,
        PrimitiveType::Char,
    ];

    /// Look up a primitive by its .msg spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bool" => Self::Bool,
            "int8" => Self::Int8,
            "uint8" => Self::UInt8,
            "int16" => Self::Int16,
            "uint16" => Self::UInt16,
            "int32" => Self::Int32,
            "uint32" => Self::UInt32,
            "int64" => Self::Int64,
            "uint64" => Self::UInt64,
            "float32" => Self::Float32,
            "float64" => Self::Float64,
            "string" => Self::String,
            "time" => Self::Time,
            "duration" => Self::Duration,
            "byte" => Self::Byte,
            "char" => Self::Char,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Byte => "byte",
            Self::Char => "char",
        }
    }
}

/// Whether a field is a scalar, a fixed-size array, or a variable-size array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Scalar,
    /// `T[N]` — exactly `n` elements.
    Fixed(usize),
    /// `T[]` — no declared bound.
    Variable,
}

/// Split a raw field type into its base type and array arity.
///
/// `"int32"` → `("int32", Scalar)`, `"int32[4]"` → `("int32", Fixed(4))`,
/// `"string[]"` → `("string", Variable)`. Bracket content that is not an
/// unsigned integer literal is rejected rather than coerced.
pub fn classify(raw_type: &str) -> Result<(&str, Arity), SchemaError> {
    let Some(idx) = raw_type.find('[') else {
        return Ok((raw_type, Arity::Scalar));
    };
    let malformed = || SchemaError::MalformedArrayBound {
        raw_type: raw_type.to_string(),
    };
    let bound = raw_type[idx + 1..].strip_suffix(']').ok_or_else(malformed)?;
    let arity = if bound.is_empty() {
        Arity::Variable
    } else {
        Arity::Fixed(bound.parse().map_err(|_| malformed())?)
    };
    Ok((&raw_type[..idx], arity))
}

/// One field of a record, with the attributes derived from its raw type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, unique within its record.
    pub name: String,
    /// Type exactly as declared, e.g. `"int32[4]"` or `"geometry_msgs/Pose"`.
    pub raw_type: String,
    /// [`raw_type`](Self::raw_type) with any array suffix removed.
    pub base_type: String,
    pub arity: Arity,
    /// `Some` when [`base_type`](Self::base_type) is a primitive.
    pub primitive: Option<PrimitiveType>,
}

impl FieldSpec {
    /// Build a field from its declared name and raw type, classifying the
    /// raw type on the way in.
    pub fn new(
        name: impl Into<String>,
        raw_type: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        let raw_type = raw_type.into();
        let (base_type, arity) = classify(&raw_type)?;
        let base_type = base_type.to_string();
        let primitive = PrimitiveType::from_name(&base_type);
        Ok(Self {
            name: name.into(),
            raw_type,
            base_type,
            arity,
            primitive,
        })
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive.is_some()
    }
}

/// A named message type with its fields in declaration order.
///
/// Field order is semantically meaningful: it becomes the field order of the
/// generated ASN.1 SEQUENCE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    /// Package the record belongs to, e.g. `"geometry_msgs"`.
    pub package: String,
    /// Unqualified record name, e.g. `"Pose"`.
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    pub fn new(
        package: impl Into<String>,
        name: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            fields,
        }
    }

    /// The `"package/Name"` form used for lookups and worklist keys.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.package, self.name)
    }
}
