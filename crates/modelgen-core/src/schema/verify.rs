mod relations_are_paired;

use super::{Relation, Schema, Table};
use crate::{Error, Result};

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for table in self.schema.tables() {
            for (name, relation) in &table.relations {
                self.verify_relation_target_exists(table, name, relation)?;
                self.verify_relations_are_paired(table, name, relation)?;
            }
        }

        Ok(())
    }

    fn verify_relation_target_exists(
        &self,
        table: &Table,
        name: &str,
        relation: &Relation,
    ) -> Result<()> {
        if self.schema.table(&relation.target_table).is_none() {
            return Err(Error::invalid_schema(format!(
                "relation `{}.{name}` targets unknown table `{}`",
                table.table_name, relation.target_table
            )));
        }

        Ok(())
    }
}
