use mwb_doctrine::domain::{Column, Table};

pub fn users_table(columns: Vec<Column>) -> Table {
    Table {
        name: "users".to_string(),
        model_name: "User".to_string(),
        namespace: "App\\Entity".to_string(),
        columns,
        comment: None,
    }
}

pub fn id_column() -> Column {
    let mut column = Column::new("id", "INT");
    column.is_primary = true;
    column.is_auto_increment = true;
    column.is_unsigned = true;
    column
}

pub fn email_column() -> Column {
    let mut column = Column::new("email", "VARCHAR");
    column.parameters.length = Some(255);
    column.nullable = true;
    column.nullable_required = true;
    column
}

pub fn column_with_default(name: &str, raw_type: &str, default: Option<&str>) -> Column {
    let mut column = Column::new(name, raw_type);
    column.default_value = default.map(str::to_string);
    column
}
