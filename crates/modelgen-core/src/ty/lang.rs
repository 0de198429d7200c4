use super::Quoted;
use std::fmt;

/// Static type of a generated model property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangType {
    Number,
    String,
    Boolean,
    Date,
    Object,
    Buffer,

    /// Union of string literals
    Enum(Vec<String>),

    Array(Box<LangType>),

    /// `[lower, higher]` tuple of `{ value, inclusive }` bounds
    Range(RangeElement),

    /// The raw type was not recognized
    Unknown,

    /// `T | null`
    Nullable(Box<LangType>),
}

/// Value type of a range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeElement {
    Number,
    DateOrString,
}

impl LangType {
    /// Wraps the type as `T | null`. Already-nullable types are unchanged.
    pub fn nullable(self) -> Self {
        if matches!(self, Self::Nullable(_)) {
            self
        } else {
            Self::Nullable(Box::new(self))
        }
    }

    /// The type without its `| null` wrapper
    pub fn base(&self) -> &LangType {
        match self {
            Self::Nullable(inner) => inner.base(),
            ty => ty,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.base(), Self::Unknown)
    }

    /// Returns `true` if `unknown` appears anywhere in the type
    pub fn contains_unknown(&self) -> bool {
        match self.base() {
            Self::Unknown => true,
            Self::Array(element) => element.contains_unknown(),
            _ => false,
        }
    }

    /// Values of this type are written as quoted strings
    pub fn is_string_like(&self) -> bool {
        matches!(self.base(), Self::String | Self::Enum(_))
    }

    /// The element type, if this is an array type
    pub fn element(&self) -> Option<&LangType> {
        match self.base() {
            Self::Array(element) => Some(element),
            _ => None,
        }
    }

    fn is_union(&self) -> bool {
        match self {
            Self::Enum(values) => values.len() > 1,
            Self::Nullable(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for LangType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::Boolean => f.write_str("boolean"),
            Self::Date => f.write_str("Date"),
            Self::Object => f.write_str("object"),
            Self::Buffer => f.write_str("Buffer"),
            Self::Enum(values) if values.is_empty() => f.write_str("never"),
            Self::Enum(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", Quoted(value))?;
                }
                Ok(())
            }
            Self::Array(element) if element.is_union() => write!(f, "({element})[]"),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::Range(element) => {
                let value = match element {
                    RangeElement::Number => "number",
                    RangeElement::DateOrString => "Date | string",
                };
                write!(
                    f,
                    "[lower: {{ value: {value}, inclusive: boolean }}, higher: {{ value: {value}, inclusive: boolean }}]"
                )
            }
            Self::Unknown => f.write_str("unknown"),
            Self::Nullable(inner) => write!(f, "{inner} | null"),
        }
    }
}

impl serde::Serialize for LangType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
