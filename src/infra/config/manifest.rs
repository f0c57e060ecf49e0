use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::app::config::FormatterConfig;
use crate::domain::{Column, ColumnParameters, Table, pascal_case};

/// Flat TOML description of the tables to render.
#[derive(Debug, Deserialize)]
pub struct ManifestFile {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub tables: Vec<TableEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TableEntry {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub raw_type: String,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub ignore: bool,
    #[serde(default)]
    pub unsigned: bool,
    #[serde(default)]
    pub nullable: bool,
    /// Overrides the formatter's `nullable_attribute` for this column.
    #[serde(default)]
    pub nullable_required: Option<bool>,
    #[serde(default)]
    pub length: Option<i64>,
    #[serde(default)]
    pub precision: Option<i64>,
    #[serde(default)]
    pub scale: Option<i64>,
}

impl ColumnEntry {
    pub fn to_column(&self, config: &FormatterConfig) -> Column {
        Column {
            name: self.name.clone(),
            raw_type: self.raw_type.clone(),
            default_value: self.default.clone(),
            comment: self.comment.clone(),
            is_primary: self.primary,
            is_auto_increment: self.auto_increment,
            is_ignored: self.ignore,
            is_unsigned: self.unsigned,
            nullable: self.nullable,
            nullable_required: self
                .nullable_required
                .unwrap_or_else(|| config.nullable_attribute.requires(self.nullable)),
            parameters: ColumnParameters {
                length: self.length,
                precision: self.precision,
                scale: self.scale,
            },
        }
    }
}

impl ManifestFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read manifest {}", path.display()))?;
        let manifest: ManifestFile = toml::from_str(&content)
            .wrap_err_with(|| format!("Invalid manifest {}", path.display()))?;
        log::debug!(
            "Loaded {} table(s) from {}",
            manifest.tables.len(),
            path.display()
        );
        Ok(manifest)
    }

    pub fn to_tables(&self, config: &FormatterConfig) -> Vec<Table> {
        let namespace = self
            .namespace
            .clone()
            .unwrap_or_else(|| config.entity_namespace.clone());

        self.tables
            .iter()
            .map(|entry| Table {
                name: entry.name.clone(),
                model_name: entry
                    .model
                    .clone()
                    .unwrap_or_else(|| pascal_case(&entry.name)),
                namespace: namespace.clone(),
                columns: entry.columns.iter().map(|c| c.to_column(config)).collect(),
                comment: entry.comment.clone(),
            })
            .collect()
    }
}
