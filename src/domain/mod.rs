pub mod annotation;
pub mod column;
pub mod datatype;
pub mod table;

pub use annotation::{AnnotationAttributes, AnnotationValue};
pub use column::{Column, ColumnParameters, UNSET, pascal_case};
pub use datatype::{MappedType, NativeType};
pub use table::Table;
