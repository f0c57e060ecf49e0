use crate::app::config::{FormatterConfig, QuoteStrategy};
use crate::app::ports::TableContext;
use crate::domain::{AnnotationAttributes, Table};

const RESERVED_WORDS: &[&str] = &[
    "add", "all", "alter", "analyze", "and", "as", "asc", "before", "between", "bigint",
    "binary", "blob", "both", "by", "call", "cascade", "case", "change", "char", "character",
    "check", "collate", "column", "condition", "constraint", "continue", "convert", "create",
    "cross", "current_date", "current_time", "current_timestamp", "current_user", "cursor",
    "database", "databases", "day_hour", "dec", "decimal", "declare", "default", "delayed",
    "delete", "desc", "describe", "distinct", "div", "double", "drop", "dual", "each", "else",
    "elseif", "enclosed", "escaped", "exists", "exit", "explain", "false", "fetch", "float",
    "for", "force", "foreign", "from", "fulltext", "function", "grant", "group", "having",
    "if", "ignore", "in", "index", "inner", "inout", "insert", "int", "integer", "interval",
    "into", "is", "iterate", "join", "key", "keys", "kill", "leading", "leave", "left",
    "like", "limit", "lines", "load", "lock", "long", "loop", "match", "mod", "natural",
    "not", "null", "numeric", "on", "option", "or", "order", "out", "outer", "primary",
    "procedure", "range", "read", "real", "references", "regexp", "release", "rename",
    "repeat", "replace", "require", "restrict", "return", "revoke", "right", "rlike",
    "schema", "select", "set", "show", "smallint", "spatial", "sql", "table", "then", "to",
    "trigger", "true", "undo", "union", "unique", "unlock", "unsigned", "update", "usage",
    "use", "using", "values", "varchar", "when", "where", "while", "with", "write", "xor",
];

fn is_reserved_word(name: &str) -> bool {
    let lower = name.to_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}

/// Doctrine annotation view of a table.
#[derive(Debug, Clone)]
pub struct DoctrineTable {
    class_name: String,
    annotation_prefix: String,
    quote_strategy: QuoteStrategy,
}

impl DoctrineTable {
    pub fn new(table: &Table, config: &FormatterConfig) -> Self {
        Self {
            class_name: table.qualified_class_name(),
            annotation_prefix: config.annotation_prefix.clone(),
            quote_strategy: config.quote_identifier_strategy,
        }
    }
}

impl TableContext for DoctrineTable {
    fn annotation(&self, name: &str, attributes: Option<&AnnotationAttributes>) -> String {
        let mut annotation = format!("@{}{}", self.annotation_prefix, name);
        if let Some(attrs) = attributes {
            annotation.push_str(&format!("({})", attrs.to_content()));
        }
        annotation
    }

    fn namespace(&self) -> String {
        self.class_name.clone()
    }

    fn quote_identifier(&self, name: &str) -> String {
        let quote = match self.quote_strategy {
            QuoteStrategy::Always => true,
            QuoteStrategy::Auto => is_reserved_word(name),
            QuoteStrategy::None => false,
        };
        if quote {
            format!("`{}`", name)
        } else {
            name.to_string()
        }
    }
}
