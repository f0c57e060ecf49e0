use std::collections::HashSet;

use crate::domain::NativeType;

/// Classes PHP always ships with that a generated setter may type-hint.
const BUILTIN_CLASSES: &[&str] = &["\\DateTime", "\\DateTimeImmutable", "\\DateTimeInterface"];

/// Native type names that resolve to a class, built once at startup.
#[derive(Debug, Clone)]
pub struct TypehintRegistry {
    classes: HashSet<String>,
}

impl TypehintRegistry {
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: HashSet<String> = BUILTIN_CLASSES.iter().map(|c| c.to_string()).collect();
        classes.extend(extra.into_iter().map(|c| normalize_class(c.into())));
        Self { classes }
    }

    pub fn is_known_class(&self, native: &NativeType) -> bool {
        match native {
            NativeType::Class(name) => self.classes.contains(&normalize_class(name.clone())),
            _ => false,
        }
    }
}

impl Default for TypehintRegistry {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

fn normalize_class(name: String) -> String {
    if name.starts_with('\\') {
        name
    } else {
        format!("\\{}", name)
    }
}

/// Return type declared on a generated getter.
pub fn native_type_to_display_type(native: &NativeType, nullable: bool) -> String {
    let display = match native {
        NativeType::Integer => "int",
        NativeType::Boolean => "bool",
        other => other.as_str(),
    };

    if !display.is_empty() && nullable {
        format!("?{}", display)
    } else {
        display.to_string()
    }
}
