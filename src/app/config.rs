use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::MappedType;

/// When an identifier gets back-quoted in the `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStrategy {
    /// Only MySQL reserved words.
    #[default]
    Auto,
    Always,
    None,
}

impl fmt::Display for QuoteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteStrategy::Auto => write!(f, "auto"),
            QuoteStrategy::Always => write!(f, "always"),
            QuoteStrategy::None => write!(f, "none"),
        }
    }
}

impl FromStr for QuoteStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(QuoteStrategy::Auto),
            "always" => Ok(QuoteStrategy::Always),
            "none" => Ok(QuoteStrategy::None),
            _ => Err(format!("Unknown quote strategy: {}", s)),
        }
    }
}

/// When `nullable` must be written into `@Column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullableAttribute {
    /// Only for nullable columns, since Doctrine defaults to `nullable=false`.
    #[default]
    Auto,
    Always,
}

impl NullableAttribute {
    pub fn requires(self, nullable: bool) -> bool {
        match self {
            NullableAttribute::Auto => nullable,
            NullableAttribute::Always => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Written upper-cased into `@GeneratedValue(strategy=...)`.
    pub generated_value_strategy: String,
    /// Type-hint setter parameters whose native type is a known class.
    pub property_typehint: bool,
    pub annotation_prefix: String,
    pub quote_identifier_strategy: QuoteStrategy,
    pub nullable_attribute: NullableAttribute,
    pub entity_namespace: String,
    pub indentation: usize,
    /// Classes accepted as type hints on top of the built-in date classes.
    pub typehint_classes: Vec<String>,
    /// Raw workbench type to Doctrine type, overriding the built-in table.
    pub type_mappings: BTreeMap<String, MappedType>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            generated_value_strategy: "auto".to_string(),
            property_typehint: false,
            annotation_prefix: "ORM\\".to_string(),
            quote_identifier_strategy: QuoteStrategy::default(),
            nullable_attribute: NullableAttribute::default(),
            entity_namespace: "App\\Entity".to_string(),
            indentation: 4,
            typehint_classes: Vec::new(),
            type_mappings: BTreeMap::new(),
        }
    }
}

impl FormatterConfig {
    pub fn generated_value_strategy_name(&self) -> String {
        self.generated_value_strategy.to_uppercase()
    }
}
