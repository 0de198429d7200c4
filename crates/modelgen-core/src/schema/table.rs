use super::{Column, Index, Relation};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table name in the database, without the schema
    pub table_name: String,

    pub model_name: String,

    pub file_name: String,

    pub schema: Option<String>,

    /// Columns keyed by field name, in table order
    pub columns: IndexMap<String, Column>,

    pub indexes: Vec<Index>,

    /// Relations keyed by property name
    pub relations: IndexMap<String, Relation>,
}

impl Table {
    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.get(field)
    }

    /// Finds a column by property name, falling back to the field name
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns
            .values()
            .find(|column| column.name == name)
            .or_else(|| self.columns.get(name))
    }

    pub fn primary_key(&self) -> impl Iterator<Item = &Column> {
        self.columns.values().filter(|column| column.primary_key)
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }
}
