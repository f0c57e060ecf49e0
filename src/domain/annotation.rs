use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Map(AnnotationAttributes),
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for AnnotationValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for AnnotationValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<AnnotationAttributes> for AnnotationValue {
    fn from(value: AnnotationAttributes) -> Self {
        Self::Map(value)
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
            Self::Int(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Map(attrs) => write!(f, "{{{}}}", attrs.render_entries(true)),
        }
    }
}

/// Ordered `key=value` pairs of an annotation such as `@ORM\Column(...)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationAttributes {
    entries: Vec<(String, AnnotationValue)>,
}

impl AnnotationAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value in place when the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnnotationValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AnnotationValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AnnotationValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Content between the annotation parentheses, e.g. `type="string", length=255`.
    pub fn to_content(&self) -> String {
        self.render_entries(false)
    }

    // Keys inside `{...}` are quoted, top-level keys are bare.
    fn render_entries(&self, quote_keys: bool) -> String {
        self.entries
            .iter()
            .map(|(key, value)| {
                if quote_keys {
                    format!("\"{}\"={}", key, value)
                } else {
                    format!("{}={}", key, value)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
