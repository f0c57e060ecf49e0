use crate::domain::AnnotationAttributes;

/// What a column needs from the table that owns it.
pub trait TableContext: Send + Sync {
    /// `@<prefix><name>` followed by `(<content>)` when attributes are given.
    fn annotation(&self, name: &str, attributes: Option<&AnnotationAttributes>) -> String;

    /// Fully qualified class of the generated entity.
    fn namespace(&self) -> String;

    fn quote_identifier(&self, name: &str) -> String;
}
