use super::*;

impl Verify<'_> {
    // Every `belongsTo` must have a `hasOne`/`hasMany` on its target that
    // points back over the same foreign key, and the reverse.
    pub(super) fn verify_relations_are_paired(
        &self,
        table: &Table,
        name: &str,
        relation: &Relation,
    ) -> Result<()> {
        let Some(target) = self.schema.table(&relation.target_table) else {
            return Ok(());
        };

        let paired = if relation.is_belongs_to() {
            target.relations.values().any(|other| {
                other.is_has()
                    && other.target_table == table.table_name
                    && other.foreign_key == relation.foreign_key
            })
        } else if relation.is_has() {
            target.relations.values().any(|other| {
                other.is_belongs_to()
                    && other.target_table == table.table_name
                    && other.foreign_key == relation.foreign_key
            })
        } else {
            true
        };

        if !paired {
            return Err(Error::invalid_schema(format!(
                "relation `{}.{name}` has no pair on table `{}` for foreign key `{}`",
                table.table_name, target.table_name, relation.foreign_key
            )));
        }

        Ok(())
    }
}
