use thiserror::Error;

use crate::app::config::FormatterConfig;
use crate::app::ports::{ConvertError, DatatypeConverter, RenderLog, SourceWriter, TableContext};
use crate::app::type_hint::{TypehintRegistry, native_type_to_display_type};
use crate::domain::{AnnotationAttributes, Column, NativeType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Collaborators shared by every column of one table.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub table: &'a dyn TableContext,
    pub converter: &'a dyn DatatypeConverter,
    pub config: &'a FormatterConfig,
    pub typehints: &'a TypehintRegistry,
    pub log: &'a dyn RenderLog,
}

/// Renders one column as a Doctrine annotated property with its accessors.
pub struct ColumnRenderer<'a> {
    column: &'a Column,
    ctx: RenderContext<'a>,
}

impl<'a> ColumnRenderer<'a> {
    pub fn new(column: &'a Column, ctx: RenderContext<'a>) -> Self {
        Self { column, ctx }
    }

    /// Doc block with ORM annotations, the property itself and a blank line.
    pub fn write_declaration<W: SourceWriter>(&self, writer: &mut W) -> Result<&Self, RenderError> {
        if self.column.is_ignored {
            return Ok(self);
        }

        let native = self.native_type()?;
        let table = self.ctx.table;
        let default_value = normalize_default_value(&native, self.column.default_value.as_deref());
        let column_annotation = table.annotation("Column", Some(&self.as_annotation()?));

        writer
            .write("/**")
            .write_all(self.column.comment_lines())
            .write_if(
                self.column.is_primary,
                &format!(" * {}", table.annotation("Id", None)),
            )
            .write(&format!(" * {}", column_annotation));

        if self.column.is_auto_increment {
            let strategy = AnnotationAttributes::new().with(
                "strategy",
                self.ctx.config.generated_value_strategy_name(),
            );
            writer.write(&format!(
                " * {}",
                table.annotation("GeneratedValue", Some(&strategy))
            ));
        }

        // Presence follows the stored default, the literal follows the normalized one.
        let initializer = match self.column.default_value {
            Some(_) => format!(" = {}", default_value),
            None => String::new(),
        };

        writer
            .write(" */")
            .write(&format!("protected ${}{};", self.column.name, initializer))
            .write("");

        Ok(self)
    }

    /// Setter (never for a column named `id`) and getter.
    pub fn write_accessors<W: SourceWriter>(&self, writer: &mut W) -> Result<&Self, RenderError> {
        if self.column.is_ignored {
            return Ok(self);
        }

        let name = &self.column.name;
        self.ctx.log.add_log(&format!(
            "  Writing setter/getter for column \"{}\"",
            name
        ));

        let native = self.native_type()?;
        let typehint = if self.ctx.config.property_typehint
            && self.ctx.typehints.is_known_class(&native)
        {
            format!("{} ", native)
        } else {
            String::new()
        };
        let beautified = self.column.beautified_name();

        writer.write("");

        if name != "id" {
            let default_null = if self.column.nullable { " = null" } else { "" };
            // Cast coerces silently; `(integer) "abc"` yields 0 rather than an error.
            let cast = if native.is_castable() {
                format!("({}) ", native)
            } else {
                String::new()
            };

            writer
                .write("/**")
                .write(&format!(" * Set the value of {}.", name))
                .write(" *")
                .write(&format!(" * @param {} ${}", native, name))
                .write(" *")
                .write(&format!(" * @return {}", self.ctx.table.namespace()))
                .write(" */")
                .write(&format!(
                    "public function set{}({}${}{})",
                    beautified, typehint, name, default_null
                ))
                .write("{")
                .indent()
                .write(&format!("$this->{} = {}${};", name, cast, name))
                .write("")
                .write("return $this;")
                .outdent()
                .write("}")
                .write("");
        }

        writer
            .write("/**")
            .write(&format!(" * Get the value of {}.", name))
            .write(" *")
            .write(&format!(" * @return {}", native))
            .write(" */")
            .write(&format!(
                "public function get{}(): {}",
                beautified,
                native_type_to_display_type(&native, self.column.nullable)
            ))
            .write("{")
            .indent()
            .write(&format!("return $this->{};", name))
            .outdent()
            .write("}");

        Ok(self)
    }

    /// Attributes of the `@Column` annotation, in emission order.
    pub fn as_annotation(&self) -> Result<AnnotationAttributes, RenderError> {
        let column = self.column;
        let mut attributes = AnnotationAttributes::new();

        let quoted = self.ctx.table.quote_identifier(&column.name);
        if quoted != column.name {
            attributes.insert("name", quoted);
        }

        let mapped = self.ctx.converter.mapped_type(column)?;
        attributes.insert("type", mapped.annotation_type());

        if let Some(length) = column.parameters.length() {
            attributes.insert("length", length);
        }
        if let Some((precision, scale)) = column.parameters.precision_scale() {
            attributes.insert("precision", precision);
            attributes.insert("scale", scale);
        }
        if column.nullable_required {
            attributes.insert("nullable", column.nullable);
        }
        if column.is_unsigned {
            attributes.insert(
                "options",
                AnnotationAttributes::new().with("unsigned", true),
            );
        }

        Ok(attributes)
    }

    fn native_type(&self) -> Result<NativeType, ConvertError> {
        let converter = self.ctx.converter;
        let mapped = converter.mapped_type(self.column)?;
        converter.native_type(&mapped)
    }
}

/// PHP literal for a stored default, shaped by the property's native type.
pub fn normalize_default_value(native: &NativeType, stored: Option<&str>) -> String {
    let value = stored.unwrap_or("");
    match native {
        NativeType::Boolean => {
            if is_truthy(stored) {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        NativeType::Array => strip_single_quotes(value).to_string(),
        NativeType::Float if !value.contains('.') => format!("{}.0", value),
        _ => value.to_string(),
    }
}

// Workbench stores flags as text; only "" and "0" read as false.
fn is_truthy(value: Option<&str>) -> bool {
    !matches!(value, None | Some("") | Some("0"))
}

fn strip_single_quotes(value: &str) -> &str {
    if value.starts_with('\'') && value.ends_with('\'') {
        value.get(1..value.len() - 1).unwrap_or("")
    } else {
        value
    }
}
