use super::{LangType, StorageType};
use regex::Regex;
use serde_json::Value;
use std::{fmt, sync::LazyLock};

/// Default-value functions that generate a v4 UUID.
const UUID_GENERATORS: &[&str] = &["gen_random_uuid()", "uuid_generate_v4()"];

/// Keywords for the current date or time, kept verbatim as SQL literals.
const CURRENT_TIME_KEYWORDS: &[&str] = &[
    "current_timestamp",
    "current_date",
    "current_time",
    "localtime",
    "localtimestamp",
];

static FUNCTION_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+\(\)$").unwrap_or_else(|err| panic!("invalid function pattern: {err}"))
});

/// A column default, translated into the literal or expression emitted into
/// the generated model definition.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Bool(bool),

    Number(f64),

    /// A string literal. The text is already escaped for embedding.
    String(String),

    /// Array literal; elements are rendered (and quoted if needed)
    Array(Vec<String>),

    /// JSON text, passed through as-is
    Json(String),

    /// Database-side UUID v4 generation
    UuidV4,

    /// Call to a zero-argument SQL function, by name
    Function(String),

    /// The current timestamp
    Now,

    /// A raw SQL literal such as `CURRENT_DATE`
    Literal(String),
}

/// Translates a raw column default.
///
/// `lang` and `storage` are the column's mapped types; `lang` may be
/// nullable. Returns `None` when the column has no default. Callers skip
/// this for auto-generated columns.
pub fn translate_default(
    raw: Option<&Value>,
    lang: &LangType,
    storage: Option<&StorageType>,
) -> Option<DefaultValue> {
    let raw = match raw? {
        Value::Null => return None,
        Value::Bool(value) => return Some(DefaultValue::Bool(*value)),
        Value::Number(value) => return value.as_f64().map(DefaultValue::Number),
        Value::String(raw) => raw,
        value @ (Value::Array(_) | Value::Object(_)) => {
            return Some(DefaultValue::Json(value.to_string()))
        }
    };

    let escaped = escape(raw);
    let value = strip_parens(&escaped);
    let lang = lang.base();

    let translated = match lang {
        LangType::Boolean => {
            DefaultValue::Bool(value.contains('1') || value.to_lowercase().contains("true"))
        }
        LangType::Array(element) => array(value, element),
        LangType::Object => DefaultValue::Json(value.replace("\\\"", "\"")),
        _ => scalar(value, lang, storage),
    };

    tracing::trace!(raw, default = %translated, "translated default value");
    Some(translated)
}

fn array(value: &str, element: &LangType) -> DefaultValue {
    let inner = value.strip_prefix('{').unwrap_or(value);
    let inner = inner.strip_suffix('}').unwrap_or(inner);

    if inner.is_empty() {
        return DefaultValue::Array(vec![]);
    }

    let quote = element.is_string_like();
    DefaultValue::Array(
        inner
            .split(',')
            .map(|item| {
                if quote {
                    format!("\"{item}\"")
                } else {
                    item.to_string()
                }
            })
            .collect(),
    )
}

fn scalar(value: &str, lang: &LangType, storage: Option<&StorageType>) -> DefaultValue {
    if storage.is_some_and(StorageType::is_uuid) || UUID_GENERATORS.contains(&value) {
        return DefaultValue::UuidV4;
    }

    if FUNCTION_CALL.is_match(value) {
        let name = value.strip_suffix("()").unwrap_or(value);
        return DefaultValue::Function(name.to_string());
    }

    if *lang == LangType::Number {
        // Zero is not a usable numeric default here; `"0"` stays a string.
        if let Some(number) = parse_number(value).filter(|n| *n != 0.0) {
            return DefaultValue::Number(number);
        }
    }

    let temporal = *lang == LangType::Date || storage.is_some_and(StorageType::is_temporal);
    if temporal {
        if value == "CURRENT_TIMESTAMP" {
            return DefaultValue::Now;
        }

        if CURRENT_TIME_KEYWORDS.contains(&value.to_lowercase().as_str()) {
            return DefaultValue::Literal(value.to_string());
        }
    }

    DefaultValue::String(value.to_string())
}

fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0.0);
    }

    value.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Escapes quotes, backslashes, slashes and control characters.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '/' => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{000C}' => out.push_str("\\f"),
            '\u{0008}' => out.push_str("\\b"),
            ch => out.push(ch),
        }
    }

    out
}

/// Removes redundant wrapping parentheses, e.g. `((0))` -> `0`.
fn strip_parens(mut value: &str) -> &str {
    while value.len() >= 2 && value.starts_with('(') && value.ends_with(')') {
        value = &value[1..value.len() - 1];
    }
    value
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "\"{value}\""),
            Self::Array(items) => write!(f, "[{}]", items.join(",")),
            Self::Json(value) => f.write_str(value),
            Self::UuidV4 => f.write_str("DataTypes.UUIDV4"),
            Self::Function(name) => write!(f, "fn('{name}')"),
            Self::Now => f.write_str("DataTypes.NOW"),
            Self::Literal(value) => write!(f, "literal('{value}')"),
        }
    }
}

impl serde::Serialize for DefaultValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_nested_parens() {
        assert_eq!(strip_parens("((0))"), "0");
        assert_eq!(strip_parens("(a) + (b)"), "a) + (b");
        assert_eq!(strip_parens("()"), "");
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape("a\"b"), "a\\\"b");
        assert_eq!(escape("a/b\n"), "a\\/b\\n");
        assert_eq!(escape("c:\\"), "c:\\\\");
    }
}
