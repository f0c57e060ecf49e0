use thiserror::Error;

use crate::domain::{Column, MappedType, NativeType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Unknown raw type `{raw_type}` for column `{column}`")]
    UnknownRawType { column: String, raw_type: String },
    #[error("No native type for mapped type `{0}`")]
    UnmappedType(String),
}

/// Classifies a column's raw schema type and resolves the PHP type behind it.
#[cfg_attr(test, mockall::automock)]
pub trait DatatypeConverter: Send + Sync {
    fn mapped_type(&self, column: &Column) -> Result<MappedType, ConvertError>;

    fn native_type(&self, mapped: &MappedType) -> Result<NativeType, ConvertError>;
}
