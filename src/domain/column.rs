/// Value workbench stores for a length, precision or scale that was never set.
pub const UNSET: i64 = -1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnParameters {
    pub length: Option<i64>,
    pub precision: Option<i64>,
    pub scale: Option<i64>,
}

impl ColumnParameters {
    pub fn length(&self) -> Option<i64> {
        self.length.filter(|&v| is_set(v))
    }

    /// Precision and scale, only when both carry a value.
    pub fn precision_scale(&self) -> Option<(i64, i64)> {
        let precision = self.precision.filter(|&v| is_set(v))?;
        let scale = self.scale.filter(|&v| is_set(v))?;
        Some((precision, scale))
    }
}

// Zero counts as unset, like the sentinel.
fn is_set(value: i64) -> bool {
    value != 0 && value != UNSET
}

pub fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub raw_type: String,
    pub default_value: Option<String>,
    pub comment: Option<String>,
    pub is_primary: bool,
    pub is_auto_increment: bool,
    pub is_ignored: bool,
    pub is_unsigned: bool,
    pub nullable: bool,
    pub nullable_required: bool,
    pub parameters: ColumnParameters,
}

impl Column {
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            default_value: None,
            comment: None,
            is_primary: false,
            is_auto_increment: false,
            is_ignored: false,
            is_unsigned: false,
            nullable: false,
            nullable_required: false,
            parameters: ColumnParameters::default(),
        }
    }

    /// `user_id` becomes `UserId`.
    pub fn beautified_name(&self) -> String {
        pascal_case(&self.name)
    }

    pub fn comment_lines(&self) -> Vec<String> {
        match self.comment.as_deref().map(str::trim) {
            Some(comment) if !comment.is_empty() => comment
                .lines()
                .map(|line| format!(" * {}", line.trim_end()).trim_end().to_string())
                .collect(),
            _ => Vec::new(),
        }
    }
}
