use super::BuildSchema;
use crate::{
    introspect::{split_qualified, RawRelation},
    schema::{Relation, RelationKind},
    CollisionOrigin, Diagnostic, Error, Result,
};

impl BuildSchema<'_> {
    /// Writes the `belongsTo` side of a foreign key onto the child table and
    /// its `hasOne`/`hasMany` pair onto the parent table.
    ///
    /// The pair is written together or not at all: if either relation name
    /// is already taken, both are skipped and a diagnostic is recorded.
    pub(super) fn infer_relation(&mut self, raw: &RawRelation) -> Result<()> {
        let (_, child_name) = split_qualified(&raw.child_table);
        let (_, parent_name) = split_qualified(&raw.parent_table);

        let (belongs_to_name, belongs_to, has_name, has) = self
            .pair_for(raw, child_name, parent_name)
            .map_err(|err| {
                err.context(Error::from_args(format_args!("relating `{child_name}`")))
            })?;

        let child = self.schema.expect_table(child_name)?;
        let parent = self.schema.expect_table(parent_name)?;

        let collision = if child.relations.contains_key(&belongs_to_name) {
            Some((child_name, belongs_to_name.clone()))
        } else if parent.relations.contains_key(&has_name)
            || (child_name == parent_name && belongs_to_name == has_name)
        {
            Some((parent_name, has_name.clone()))
        } else {
            None
        };

        if let Some((table, relation)) = collision {
            self.diagnostic(Diagnostic::RelationCollision {
                table: table.to_string(),
                relation,
                origin: CollisionOrigin::Inferred,
            });
            return Ok(());
        }

        tracing::debug!(
            child = %child_name,
            parent = %parent_name,
            foreign_key = %belongs_to.foreign_key,
            belongs_to = %belongs_to_name,
            has = %has_name,
            "inferred relation pair"
        );

        self.schema
            .table_mut(child_name)?
            .relations
            .insert(belongs_to_name, belongs_to);
        self.schema
            .table_mut(parent_name)?
            .relations
            .insert(has_name, has);

        Ok(())
    }

    fn pair_for(
        &self,
        raw: &RawRelation,
        child_name: &str,
        parent_name: &str,
    ) -> Result<(String, Relation, String, Relation)> {
        let child = self.schema.expect_table(child_name)?;
        let parent = self.schema.expect_table(parent_name)?;

        let column = child
            .column_by_name(&raw.foreign_key)
            .ok_or_else(|| Error::missing_column(child_name, &raw.foreign_key))?;

        let belongs_to = Relation {
            kind: RelationKind::BelongsTo,
            foreign_key: column.name.clone(),
            target_table: parent.table_name.clone(),
            target_model: parent.model_name.clone(),
            target_file: parent.file_name.clone(),
            optional: column.nullable,
        };

        let has = Relation {
            kind: if raw.is_one {
                RelationKind::HasOne
            } else {
                RelationKind::HasMany
            },
            foreign_key: column.name.clone(),
            target_table: child.table_name.clone(),
            target_model: child.model_name.clone(),
            target_file: child.file_name.clone(),
            optional: raw.is_one && column.nullable,
        };

        Ok((
            self.config.relation_name(child_name, &raw.parent_prop),
            belongs_to,
            self.config.relation_name(parent_name, &raw.child_prop),
            has,
        ))
    }
}
