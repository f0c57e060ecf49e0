use crate::app::code_buffer::CodeBuffer;
use crate::app::column_renderer::{ColumnRenderer, RenderContext, RenderError};
use crate::domain::Table;

/// Every property of the table first, then every accessor, in column order.
pub fn render_entity_body(table: &Table, ctx: RenderContext<'_>) -> Result<String, RenderError> {
    let indentation = ctx.config.indentation;
    let mut declarations = CodeBuffer::new(indentation);
    let mut accessors = CodeBuffer::new(indentation);

    for column in table.rendered_columns() {
        ColumnRenderer::new(column, ctx)
            .write_declaration(&mut declarations)?
            .write_accessors(&mut accessors)?;
    }

    let mut body = CodeBuffer::new(indentation);
    body.splice(&declarations).splice(&accessors);
    Ok(body.into_string())
}
