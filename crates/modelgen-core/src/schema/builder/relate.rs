use super::BuildSchema;
use crate::{
    introspect::{split_qualified, RawRelation},
    schema::{trim_id, Unique},
};
use std::collections::{HashMap, HashSet};
use std_util::str;

/// Relation names handed out so far, per destination table.
#[derive(Default)]
struct UsedNames {
    tables: HashMap<String, HashSet<String>>,
}

impl BuildSchema<'_> {
    /// Resolves parent/child roles and relation names from the foreign keys
    /// of the normalized tables.
    pub(super) fn derive_relations(&self) -> Vec<RawRelation> {
        let config = self.config;
        let mut used = UsedNames::default();
        let mut relations = vec![];

        for table in self.schema.tables() {
            let primary_foreign_keys = table
                .primary_key()
                .filter(|column| column.is_foreign_key())
                .count();

            for column in table.columns.values() {
                let Some(reference) = &column.reference else {
                    continue;
                };

                let (_, parent_table) = split_qualified(&reference.target_table);

                let is_one = (column.primary_key && primary_foreign_keys == 1)
                    || column.unique == Some(Unique::Single);

                let trimmed = trim_id(&column.field, &config.pk_suffixes);

                // belongsTo side, named after the foreign key
                let parent_prop = if trimmed == column.field {
                    format!("{}_{parent_table}", column.field)
                } else {
                    trimmed.clone()
                };
                let parent_prop = used.claim(
                    &table.table_name,
                    config.case_prop.apply(&str::singularize(&parent_prop)),
                );

                // hasOne / hasMany side, named after the child table
                let mut child_base = str::singularize(&table.table_name);
                if used.contains(parent_table, &self.child_prop(&child_base, is_one)) {
                    child_base = str::singularize(&format!("{trimmed}_{}", table.table_name));
                }
                let child_prop = used.claim(parent_table, self.child_prop(&child_base, is_one));

                tracing::debug!(
                    child = %table.table_name,
                    parent = %parent_table,
                    foreign_key = %column.name,
                    %parent_prop,
                    %child_prop,
                    "derived relation"
                );

                relations.push(RawRelation {
                    child_table: table.table_name.clone(),
                    parent_table: parent_table.to_string(),
                    foreign_key: column.name.clone(),
                    child_prop,
                    parent_prop,
                    is_one,
                });
            }
        }

        relations
    }

    fn child_prop(&self, base: &str, is_one: bool) -> String {
        let name = if is_one {
            base.to_string()
        } else {
            str::pluralize(base)
        };

        self.config.case_prop.apply(&name)
    }
}

impl UsedNames {
    fn contains(&self, table: &str, name: &str) -> bool {
        self.tables
            .get(table)
            .is_some_and(|names| names.contains(name))
    }

    /// Reserves `name` on `table`, appending `2`, `3`, ... until it is free.
    fn claim(&mut self, table: &str, name: String) -> String {
        let names = self.tables.entry(table.to_string()).or_default();

        let mut candidate = name.clone();
        let mut n = 2;
        while names.contains(&candidate) {
            candidate = format!("{name}{n}");
            n += 1;
        }

        names.insert(candidate.clone());
        candidate
    }
}
