use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Doctrine DBAL logical type a raw column type is classified into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MappedType {
    String,
    Text,
    Integer,
    SmallInt,
    BigInt,
    Boolean,
    Decimal,
    Float,
    Date,
    Time,
    DateTime,
    DateTimeTz,
    Blob,
    Binary,
    Guid,
    Array,
    SimpleArray,
    JsonArray,
    Object,
    Custom(String),
}

impl MappedType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::SmallInt => "smallint",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::DateTimeTz => "datetimetz",
            Self::Blob => "blob",
            Self::Binary => "binary",
            Self::Guid => "guid",
            Self::Array => "array",
            Self::SimpleArray => "simple_array",
            Self::JsonArray => "json_array",
            Self::Object => "object",
            Self::Custom(name) => name,
        }
    }

    /// Storage type name written into the `@Column` annotation.
    pub fn annotation_type(&self) -> &str {
        match self {
            Self::Array => "json_array",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for MappedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MappedType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "string" => Self::String,
            "text" => Self::Text,
            "integer" => Self::Integer,
            "smallint" => Self::SmallInt,
            "bigint" => Self::BigInt,
            "boolean" => Self::Boolean,
            "decimal" => Self::Decimal,
            "float" => Self::Float,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime" => Self::DateTime,
            "datetimetz" => Self::DateTimeTz,
            "blob" => Self::Blob,
            "binary" => Self::Binary,
            "guid" => Self::Guid,
            "array" => Self::Array,
            "simple_array" => Self::SimpleArray,
            "json_array" => Self::JsonArray,
            "object" => Self::Object,
            _ => Self::Custom(s.to_string()),
        })
    }
}

impl From<String> for MappedType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(mapped) => mapped,
            Err(never) => match never {},
        }
    }
}

impl From<MappedType> for String {
    fn from(value: MappedType) -> Self {
        value.as_str().to_string()
    }
}

/// PHP type a property holds at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NativeType {
    String,
    Integer,
    Boolean,
    Float,
    Array,
    Object,
    /// Fully qualified class name, e.g. `\DateTime`.
    Class(String),
}

impl NativeType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Array => "array",
            Self::Object => "object",
            Self::Class(name) => name,
        }
    }

    /// Scalar types the generated setter casts its argument to.
    pub fn is_castable(&self) -> bool {
        matches!(self, Self::Float | Self::Integer | Self::Boolean)
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
