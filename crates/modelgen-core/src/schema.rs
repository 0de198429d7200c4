mod builder;
pub use builder::{Builder, Generated};

mod column;
pub use column::{Column, Reference, Unique};

mod index;
pub use index::{Index, IndexField, SortOrder};

mod name;
pub(crate) use name::{recase, trim_id};

mod relation;
pub use relation::{Relation, RelationKind, Through};

mod table;
pub use table::Table;

mod verify;

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// The normalized schema model handed to code generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    /// Tables keyed by their bare (unqualified) table name
    pub tables: IndexMap<String, Table>,
}

impl Schema {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub(crate) fn table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| Error::missing_table(name))
    }

    pub(crate) fn expect_table(&self, name: &str) -> Result<&Table> {
        self.tables.get(name).ok_or_else(|| Error::missing_table(name))
    }

    /// Serializes the schema as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
