mod case;
pub use case::Case;

mod join_table;
pub use join_table::{FieldScope, JoinTable, JoinTables};

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Options controlling how the raw schema is turned into a model.
///
/// Every field has a default, so a configuration document only needs to
/// name the options it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Casing of model names
    pub case_model: Case,

    /// Casing of file names
    pub case_file: Case,

    /// Casing of column and relation property names
    pub case_prop: Case,

    /// Singularize table names before deriving model and file names
    pub singularize: bool,

    /// Append `| null` to the language type of nullable columns
    pub add_null_to_types: bool,

    /// Tables that resolve many-to-many relations
    pub join_tables: JoinTables,

    /// Per-table relation renames: `table -> (relation name -> new name)`
    pub relation_renames: IndexMap<String, IndexMap<String, String>>,

    /// Tables whose key contains this marker (case-insensitive) are skipped
    pub ignore_table_marker: String,

    /// Primary-key suffixes trimmed from foreign-key names when deriving
    /// relation names
    pub pk_suffixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_model: Case::Original,
            case_file: Case::Original,
            case_prop: Case::Original,
            singularize: false,
            add_null_to_types: false,
            join_tables: JoinTables::default(),
            relation_renames: IndexMap::new(),
            ignore_table_marker: "sequelizemeta".to_string(),
            pk_suffixes: vec!["id".to_string()],
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration document
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).map_err(|err| Error::invalid_config(err.to_string()))
    }

    pub fn case_model(mut self, case: Case) -> Self {
        self.case_model = case;
        self
    }

    pub fn case_file(mut self, case: Case) -> Self {
        self.case_file = case;
        self
    }

    pub fn case_prop(mut self, case: Case) -> Self {
        self.case_prop = case;
        self
    }

    pub fn singularize(mut self, singularize: bool) -> Self {
        self.singularize = singularize;
        self
    }

    pub fn add_null_to_types(mut self, add_null: bool) -> Self {
        self.add_null_to_types = add_null;
        self
    }

    /// Designate `table` as a junction table with the given settings
    pub fn join_table(mut self, table: impl Into<String>, join_table: JoinTable) -> Self {
        self.join_tables.insert(table, join_table);
        self
    }

    /// Rename the relation `from` on `table` to `to`
    pub fn rename_relation(
        mut self,
        table: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.relation_renames
            .entry(table.into())
            .or_default()
            .insert(from.into(), to.into());
        self
    }

    /// Returns the configured name for relation `name` on `table`
    pub fn relation_name(&self, table: &str, name: &str) -> String {
        self.relation_renames
            .get(table)
            .and_then(|renames| renames.get(name))
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    pub(crate) fn is_ignored_table(&self, key: &str) -> bool {
        !self.ignore_table_marker.is_empty()
            && key
                .to_lowercase()
                .contains(&self.ignore_table_marker.to_lowercase())
    }
}
