use super::BuildSchema;
use crate::{
    config::JoinTable,
    introspect::split_qualified,
    schema::{Relation, RelationKind, Through},
    CollisionOrigin, Diagnostic, Error, Result,
};
use std_util::str;

/// A `belongsToMany` relation waiting to be written.
struct Synthesized {
    table: String,
    name: String,
    relation: Relation,
}

/// An in-scope `belongsTo` relation of a junction table.
struct Leg<'a> {
    name: &'a str,

    /// Database name of the foreign-key column, as used in configuration
    field: &'a str,

    relation: &'a Relation,
}

impl BuildSchema<'_> {
    /// Adds `belongsToMany` relations across every configured junction table.
    pub(super) fn synthesize_join_tables(&mut self) -> Result<()> {
        let config = self.config;

        for (name, join_table) in config.join_tables.iter() {
            self.synthesize_join_table(name, join_table).map_err(|err| {
                err.context(Error::from_args(format_args!("junction table `{name}`")))
            })?;
        }

        Ok(())
    }

    fn synthesize_join_table(&mut self, key: &str, join_table: &JoinTable) -> Result<()> {
        let (_, junction_name) = split_qualified(key);
        let synthesized = self.plan_join_table(junction_name, join_table)?;

        for Synthesized {
            table,
            name,
            relation,
        } in synthesized
        {
            let name = self.config.relation_name(&table, &name);
            let target = self.schema.table_mut(&table)?;

            if target.relations.contains_key(&name) {
                self.diagnostic(Diagnostic::RelationCollision {
                    table,
                    relation: name,
                    origin: CollisionOrigin::Junction {
                        junction: junction_name.to_string(),
                    },
                });
                continue;
            }

            tracing::debug!(
                %table,
                relation = %name,
                junction = %junction_name,
                target = %relation.target_table,
                "synthesized belongsToMany"
            );
            target.relations.insert(name, relation);
        }

        Ok(())
    }

    /// Computes the relations a junction table produces, in pair order,
    /// without writing them.
    fn plan_join_table(
        &self,
        junction_name: &str,
        join_table: &JoinTable,
    ) -> Result<Vec<Synthesized>> {
        let junction = self.schema.expect_table(junction_name)?;

        let legs: Vec<Leg<'_>> = junction
            .relations
            .iter()
            .filter(|(_, relation)| relation.is_belongs_to())
            .map(|(name, relation)| Leg {
                name,
                field: junction
                    .column_by_name(&relation.foreign_key)
                    .map(|column| column.field.as_str())
                    .unwrap_or(relation.foreign_key.as_str()),
                relation,
            })
            .filter(|leg| join_table.fields.includes(leg.field))
            .collect();

        let mut synthesized = vec![];

        for leg in &legs {
            for other in &legs {
                if leg.name == other.name || !join_table.fields.allows(leg.field, other.field) {
                    continue;
                }

                let name = join_table
                    .renames
                    .get(other.field)
                    .cloned()
                    .unwrap_or_else(|| str::pluralize(other.name));

                synthesized.push(Synthesized {
                    table: leg.relation.target_table.clone(),
                    name,
                    relation: Relation {
                        kind: RelationKind::BelongsToMany(Through {
                            model: junction.model_name.clone(),
                            file: junction.file_name.clone(),
                            alias: str::singularize(&junction.model_name),
                            other_key: other.relation.foreign_key.clone(),
                        }),
                        foreign_key: leg.relation.foreign_key.clone(),
                        target_table: other.relation.target_table.clone(),
                        target_model: other.relation.target_model.clone(),
                        target_file: other.relation.target_file.clone(),
                        optional: false,
                    },
                });
            }
        }

        if synthesized.is_empty() {
            tracing::debug!(
                junction = %junction_name,
                legs = legs.len(),
                "junction produced no relations"
            );
        }

        Ok(synthesized)
    }
}
