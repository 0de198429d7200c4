//! Raw schema description produced by database introspection.
//!
//! Tables are keyed by their (optionally schema-qualified, `schema.table`)
//! name exactly as the introspection adapter reports them.

use crate::Result;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSchema {
    /// Columns per table, in column order
    pub tables: IndexMap<String, IndexMap<String, RawColumn>>,

    /// Indexes per table
    pub indexes: IndexMap<String, Vec<RawIndex>>,

    /// Foreign keys per table, keyed by the referencing column
    pub foreign_keys: IndexMap<String, IndexMap<String, RawForeignKey>>,

    /// Resolved parent/child relations. When absent, relations are derived
    /// from `foreign_keys`.
    pub relations: Option<Vec<RawRelation>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawColumn {
    /// Database type as reported, e.g. `character varying(40)`
    #[serde(rename = "type")]
    pub ty: String,

    pub allow_null: bool,

    pub auto_increment: bool,

    pub primary_key: bool,

    /// Default value literal. Usually a string; some adapters report
    /// numbers and booleans directly.
    pub default_value: Option<serde_json::Value>,

    pub comment: Option<String>,

    /// Enum values, for dialects that report them separately
    pub special: Option<Vec<String>>,

    /// Element type of array and geometry columns
    pub element_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawIndex {
    pub name: String,

    pub unique: bool,

    pub primary: bool,

    /// Index method, e.g. `btree`
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub fields: Vec<RawIndexField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIndexField {
    pub attribute: String,

    /// `ASC`, `DESC`, or anything else for "unspecified"
    pub order: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawForeignKey {
    #[serde(default)]
    pub target_schema: Option<String>,

    pub target_table: String,

    pub target_column: String,

    #[serde(default = "default_true")]
    pub is_foreign_key: bool,
}

/// A foreign key with its parent and child roles already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRelation {
    /// Table holding the foreign key
    pub child_table: String,

    /// Table the foreign key references
    pub parent_table: String,

    /// The foreign-key column, by field or property name
    pub foreign_key: String,

    /// Relation name on the parent, pointing at the child
    pub child_prop: String,

    /// Relation name on the child, pointing at the parent
    pub parent_prop: String,

    /// The parent has at most one child through this key
    #[serde(default)]
    pub is_one: bool,
}

fn default_true() -> bool {
    true
}

impl RawSchema {
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Splits `schema.table` into its parts. Only the last `.` separates.
pub(crate) fn split_qualified(key: &str) -> (Option<&str>, &str) {
    match key.rsplit_once('.') {
        Some((schema, table)) => (Some(schema), table),
        None => (None, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_schema_qualified_names() {
        assert_eq!(split_qualified("public.users"), (Some("public"), "users"));
        assert_eq!(split_qualified("users"), (None, "users"));
    }
}
