pub mod converter;
pub mod render_log;
pub mod source_writer;
pub mod table_context;

#[cfg(test)]
pub use converter::MockDatatypeConverter;
pub use converter::{ConvertError, DatatypeConverter};
pub use render_log::RenderLog;
pub use source_writer::SourceWriter;
pub use table_context::TableContext;
