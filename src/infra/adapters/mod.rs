pub mod doctrine_converter;
pub mod doctrine_table;
pub mod render_log;

pub use doctrine_converter::Doctrine2Converter;
pub use doctrine_table::DoctrineTable;
pub use render_log::{LogCrateSink, MemoryLog};
