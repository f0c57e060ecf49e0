use std::sync::Mutex;

use crate::app::ports::{MockDatatypeConverter, RenderLog, TableContext};
use crate::domain::{AnnotationAttributes, MappedType, NativeType};

/// Table of `\App\Entity\User`; only `order` needs quoting.
pub struct StubTable;

impl TableContext for StubTable {
    fn annotation(&self, name: &str, attributes: Option<&AnnotationAttributes>) -> String {
        match attributes {
            Some(attrs) => format!("@ORM\\{}({})", name, attrs.to_content()),
            None => format!("@ORM\\{}", name),
        }
    }

    fn namespace(&self) -> String {
        "\\App\\Entity\\User".to_string()
    }

    fn quote_identifier(&self, name: &str) -> String {
        if name == "order" {
            format!("`{}`", name)
        } else {
            name.to_string()
        }
    }
}

#[derive(Default)]
pub struct RecordingLog {
    messages: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl RenderLog for RecordingLog {
    fn add_log(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Converter that resolves every column to the same pair of types.
pub fn converter_returning(mapped: MappedType, native: NativeType) -> MockDatatypeConverter {
    let mut converter = MockDatatypeConverter::new();
    converter
        .expect_mapped_type()
        .returning(move |_| Ok(mapped.clone()));
    converter
        .expect_native_type()
        .returning(move |_| Ok(native.clone()));
    converter
}
