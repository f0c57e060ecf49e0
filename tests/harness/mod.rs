pub mod fixtures;

use mwb_doctrine::app::code_buffer::CodeBuffer;
use mwb_doctrine::app::column_renderer::{ColumnRenderer, RenderContext, RenderError};
use mwb_doctrine::app::config::FormatterConfig;
use mwb_doctrine::app::entity::render_entity_body;
use mwb_doctrine::app::type_hint::TypehintRegistry;
use mwb_doctrine::domain::{Column, Table};
use mwb_doctrine::infra::adapters::{Doctrine2Converter, DoctrineTable, MemoryLog};

pub struct Rendered {
    pub declaration: String,
    pub accessors: String,
    pub log: Vec<String>,
}

/// Runs both column operations against the real adapters.
pub fn render_column(table: &Table, column: &Column, config: &FormatterConfig) -> Rendered {
    let converter = Doctrine2Converter::from_config(config);
    let doctrine_table = DoctrineTable::new(table, config);
    let typehints = TypehintRegistry::new(config.typehint_classes.iter().cloned());
    let log = MemoryLog::new();
    let ctx = RenderContext {
        table: &doctrine_table,
        converter: &converter,
        config,
        typehints: &typehints,
        log: &log,
    };

    let mut declaration = CodeBuffer::new(config.indentation);
    let mut accessors = CodeBuffer::new(config.indentation);
    ColumnRenderer::new(column, ctx)
        .write_declaration(&mut declaration)
        .unwrap()
        .write_accessors(&mut accessors)
        .unwrap();

    Rendered {
        declaration: trim_blank_lines(declaration.into_string()),
        accessors: trim_blank_lines(accessors.into_string()),
        log: log.messages(),
    }
}

pub fn render_table(table: &Table, config: &FormatterConfig) -> Result<String, RenderError> {
    let converter = Doctrine2Converter::from_config(config);
    let doctrine_table = DoctrineTable::new(table, config);
    let typehints = TypehintRegistry::new(config.typehint_classes.iter().cloned());
    let log = MemoryLog::new();
    let ctx = RenderContext {
        table: &doctrine_table,
        converter: &converter,
        config,
        typehints: &typehints,
        log: &log,
    };

    render_entity_body(table, ctx).map(trim_blank_lines)
}

fn trim_blank_lines(text: String) -> String {
    text.trim_matches('\n').to_string()
}
