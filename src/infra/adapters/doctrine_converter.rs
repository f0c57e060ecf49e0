use std::collections::HashMap;

use crate::app::config::FormatterConfig;
use crate::app::ports::{ConvertError, DatatypeConverter};
use crate::domain::{Column, MappedType, NativeType};

const RAW_TYPES: &[(&str, &str)] = &[
    ("char", "string"),
    ("varchar", "string"),
    ("enum", "string"),
    ("set", "string"),
    ("tinytext", "text"),
    ("text", "text"),
    ("mediumtext", "text"),
    ("longtext", "text"),
    ("tinyint", "smallint"),
    ("smallint", "smallint"),
    ("year", "smallint"),
    ("mediumint", "integer"),
    ("int", "integer"),
    ("integer", "integer"),
    ("bigint", "bigint"),
    ("bool", "boolean"),
    ("boolean", "boolean"),
    ("decimal", "decimal"),
    ("numeric", "decimal"),
    ("float", "float"),
    ("double", "float"),
    ("real", "float"),
    ("date", "date"),
    ("time", "time"),
    ("datetime", "datetime"),
    ("timestamp", "datetime"),
    ("tinyblob", "blob"),
    ("blob", "blob"),
    ("mediumblob", "blob"),
    ("longblob", "blob"),
    ("binary", "binary"),
    ("varbinary", "binary"),
    ("json", "array"),
];

/// MySQL Workbench types to Doctrine DBAL types to PHP types.
#[derive(Debug, Clone)]
pub struct Doctrine2Converter {
    raw_types: HashMap<String, MappedType>,
}

impl Doctrine2Converter {
    pub fn new() -> Self {
        let raw_types = RAW_TYPES
            .iter()
            .map(|(raw, mapped)| (raw.to_string(), MappedType::from(mapped.to_string())))
            .collect();
        Self { raw_types }
    }

    /// Built-in table plus the formatter's `type_mappings`.
    pub fn from_config(config: &FormatterConfig) -> Self {
        config
            .type_mappings
            .iter()
            .fold(Self::new(), |converter, (raw, mapped)| {
                converter.with_mapping(raw, mapped.clone())
            })
    }

    /// Registers or overrides the mapping for one raw type.
    pub fn with_mapping(mut self, raw_type: &str, mapped: MappedType) -> Self {
        self.raw_types.insert(normalize_raw_type(raw_type).0, mapped);
        self
    }
}

impl Default for Doctrine2Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl DatatypeConverter for Doctrine2Converter {
    fn mapped_type(&self, column: &Column) -> Result<MappedType, ConvertError> {
        let (raw, inline_length) = normalize_raw_type(&column.raw_type);

        // MySQL has no boolean column; workbench stores BOOL as TINYINT(1).
        let length = inline_length.or(column.parameters.length);
        if raw == "tinyint" && length == Some(1) {
            return Ok(MappedType::Boolean);
        }

        self.raw_types
            .get(&raw)
            .cloned()
            .ok_or_else(|| ConvertError::UnknownRawType {
                column: column.name.clone(),
                raw_type: column.raw_type.clone(),
            })
    }

    fn native_type(&self, mapped: &MappedType) -> Result<NativeType, ConvertError> {
        Ok(match mapped {
            MappedType::Integer | MappedType::SmallInt | MappedType::BigInt => NativeType::Integer,
            MappedType::Boolean => NativeType::Boolean,
            MappedType::Decimal | MappedType::Float => NativeType::Float,
            MappedType::Date | MappedType::Time | MappedType::DateTime | MappedType::DateTimeTz => {
                NativeType::Class("\\DateTime".to_string())
            }
            MappedType::Array | MappedType::SimpleArray | MappedType::JsonArray => {
                NativeType::Array
            }
            MappedType::Object => NativeType::Object,
            MappedType::String
            | MappedType::Text
            | MappedType::Blob
            | MappedType::Binary
            | MappedType::Guid
            | MappedType::Custom(_) => NativeType::String,
        })
    }
}

/// `com.mysql.rdbms.mysql.datatype.varchar`, `VARCHAR(45)` and `varchar`
/// all normalize to `varchar`; an inline length is returned alongside.
fn normalize_raw_type(raw: &str) -> (String, Option<i64>) {
    let raw = raw.trim();
    let (name, args) = match raw.split_once('(') {
        Some((name, rest)) => (name, Some(rest.trim_end_matches(')'))),
        None => (raw, None),
    };
    let name = name.rsplit('.').next().unwrap_or(name).trim().to_lowercase();
    let length = args
        .and_then(|a| a.split(',').next())
        .and_then(|a| a.trim().parse().ok());
    (name, length)
}
