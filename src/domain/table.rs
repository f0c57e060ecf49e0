use super::column::Column;

#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub model_name: String,
    pub namespace: String,
    pub columns: Vec<Column>,
    pub comment: Option<String>,
}

impl Table {
    /// Fully qualified PHP class name, e.g. `\App\Entity\User`.
    pub fn qualified_class_name(&self) -> String {
        let namespace = self.namespace.trim_matches('\\');
        if namespace.is_empty() {
            format!("\\{}", self.model_name)
        } else {
            format!("\\{}\\{}", namespace, self.model_name)
        }
    }

    pub fn rendered_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.is_ignored)
    }
}
