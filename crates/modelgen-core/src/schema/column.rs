use crate::ty::{DefaultValue, LangType, StorageType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name in the database
    pub field: String,

    /// Property name in generated code
    pub name: String,

    /// `None` when the raw type was not recognized
    pub storage_ty: Option<StorageType>,

    /// Property type. Wrapped as `T | null` when configured to add null to
    /// nullable columns.
    pub ty: LangType,

    pub nullable: bool,

    pub primary_key: bool,

    /// Value is generated by the database (auto-increment, or a primary key
    /// with a default)
    pub auto_increment: bool,

    pub unique: Option<Unique>,

    pub default_value: Option<DefaultValue>,

    pub comment: Option<String>,

    /// Set when the column is a foreign key
    pub reference: Option<Reference>,
}

/// How a column takes part in a unique index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unique {
    /// Unique on its own
    Single,

    /// Unique together with other columns, through the named index
    Composite(String),
}

/// The table and column a foreign key references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub target_table: String,
    pub target_column: String,
    pub target_model: String,
    pub target_file: String,
}

impl Column {
    /// Returns `true` if the column is unique on its own
    pub fn is_unique(&self) -> bool {
        matches!(self.unique, Some(Unique::Single))
    }

    pub fn is_foreign_key(&self) -> bool {
        self.reference.is_some()
    }
}

impl Serialize for Unique {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single => serializer.serialize_bool(true),
            Self::Composite(index) => serializer.serialize_str(index),
        }
    }
}
