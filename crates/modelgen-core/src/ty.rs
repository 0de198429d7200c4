//! Column type and default-value mapping.
//!
//! Every column gets two type representations:
//!
//! - a [`StorageType`]: how the persistence layer declares the column,
//!   rendered in the Sequelize `DataTypes` vocabulary (`DataTypes.STRING(40)`)
//! - a [`LangType`]: the static type of the generated property, rendered as
//!   a TypeScript type expression (`string`, `"a" | "b"`, `Date | null`)
//!
//! ```text
//! "character varying(40)"  ->  DataTypes.STRING(40)   / string
//! "int unsigned"           ->  DataTypes.INTEGER.UNSIGNED / number
//! "array" (elem "text")    ->  DataTypes.ARRAY(DataTypes.TEXT) / string[]
//! ```

mod default;
pub use default::{translate_default, DefaultValue};

mod lang;
pub use lang::{LangType, RangeElement};

mod rules;

mod storage;
pub use storage::{IntegerKind, IntegerType, Precision, StorageType};

use std::fmt;

/// Result of mapping a raw column type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMapping {
    /// `None` when no rule recognized the raw type
    pub storage: Option<StorageType>,

    /// [`LangType::Unknown`] when no rule recognized the raw type
    pub lang: LangType,
}

impl TypeMapping {
    pub fn new(storage: StorageType, lang: LangType) -> Self {
        Self {
            storage: Some(storage),
            lang,
        }
    }

    pub fn unmapped() -> Self {
        Self {
            storage: None,
            lang: LangType::Unknown,
        }
    }

    /// Returns `true` if both sides of the mapping were resolved
    pub fn is_mapped(&self) -> bool {
        self.storage.is_some() && !self.lang.contains_unknown()
    }
}

/// Maps a raw database type to its storage and language types.
///
/// `raw` is matched case-insensitively against an ordered rule table; the
/// first matching rule wins. `enum_values` supplies enum members for
/// dialects that report them outside the type string, and `element_type`
/// names the element of array and geometry columns.
pub fn map_type(raw: &str, enum_values: Option<&[String]>, element_type: Option<&str>) -> TypeMapping {
    rules::map(raw, enum_values, element_type, 0)
}

/// Formats a string as a double-quoted literal.
pub(crate) struct Quoted<'a>(pub(crate) &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for ch in self.0.chars() {
            match ch {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                _ => write!(f, "{ch}")?,
            }
        }
        f.write_str("\"")
    }
}
