use super::BuildSchema;
use crate::{
    introspect::{split_qualified, RawColumn, RawForeignKey, RawIndex},
    schema::{recase, Column, Index, IndexField, Reference, SortOrder, Table, Unique},
    ty, Diagnostic,
};
use indexmap::IndexMap;

impl BuildSchema<'_> {
    /// Normalizes every raw table, in sorted key order.
    pub(super) fn build_tables(&mut self) {
        let raw = self.raw;

        let mut keys: Vec<&String> = raw.tables.keys().collect();
        keys.sort();

        for key in keys {
            if self.config.is_ignored_table(key) {
                tracing::debug!(table = %key, "skipping ignored table");
                continue;
            }

            let (schema, table_name) = split_qualified(key);

            if self.schema.tables.contains_key(table_name) {
                self.diagnostic(Diagnostic::DuplicateTable {
                    table: table_name.to_string(),
                    schema: schema.map(str::to_string),
                });
                continue;
            }

            let table = self.build_table(key, schema, table_name);
            tracing::debug!(
                table = %table.table_name,
                model = %table.model_name,
                columns = table.columns.len(),
                "normalized table"
            );
            self.schema.tables.insert(table_name.to_string(), table);
        }
    }

    fn build_table(&mut self, key: &str, schema: Option<&str>, table_name: &str) -> Table {
        let raw = self.raw;
        let config = self.config;

        let raw_indexes = raw.indexes.get(key).map(Vec::as_slice).unwrap_or_default();
        let foreign_keys = raw.foreign_keys.get(key);

        let mut columns = IndexMap::new();

        if let Some(raw_columns) = raw.tables.get(key) {
            for (field, raw_column) in raw_columns {
                let foreign_key = foreign_keys
                    .and_then(|foreign_keys| foreign_keys.get(field))
                    .filter(|foreign_key| foreign_key.is_foreign_key);

                let column =
                    self.build_column(table_name, field, raw_column, raw_indexes, foreign_key);
                columns.insert(field.clone(), column);
            }
        }

        Table {
            table_name: table_name.to_string(),
            model_name: recase(table_name, config.case_model, config.singularize),
            file_name: recase(table_name, config.case_file, config.singularize),
            schema: schema.map(str::to_string),
            columns,
            indexes: raw_indexes.iter().map(build_index).collect(),
            relations: IndexMap::new(),
        }
    }

    fn build_column(
        &mut self,
        table_name: &str,
        field: &str,
        raw: &RawColumn,
        indexes: &[RawIndex],
        foreign_key: Option<&RawForeignKey>,
    ) -> Column {
        let config = self.config;

        let mapping = ty::map_type(&raw.ty, raw.special.as_deref(), raw.element_type.as_deref());

        if !mapping.is_mapped() {
            self.diagnostic(Diagnostic::UnmappedType {
                table: table_name.to_string(),
                column: field.to_string(),
                raw_type: raw.ty.clone(),
            });
        }

        let has_default = raw.default_value.as_ref().is_some_and(|value| !value.is_null());
        let auto_increment = raw.auto_increment || (raw.primary_key && has_default);

        let lang = if config.add_null_to_types && raw.allow_null {
            mapping.lang.nullable()
        } else {
            mapping.lang
        };

        let default_value = if auto_increment {
            None
        } else {
            ty::translate_default(raw.default_value.as_ref(), &lang, mapping.storage.as_ref())
        };

        let reference = foreign_key.map(|foreign_key| Reference {
            target_table: foreign_key.target_table.clone(),
            target_column: foreign_key.target_column.clone(),
            target_model: recase(
                &foreign_key.target_table,
                config.case_model,
                config.singularize,
            ),
            target_file: recase(
                &foreign_key.target_table,
                config.case_file,
                config.singularize,
            ),
        });

        Column {
            field: field.to_string(),
            name: config.case_prop.apply(field),
            storage_ty: mapping.storage,
            ty: lang,
            nullable: raw.allow_null,
            primary_key: raw.primary_key,
            auto_increment,
            unique: unique(field, indexes),
            default_value,
            comment: raw.comment.as_deref().map(escape_comment),
            reference,
        }
    }
}

/// Derives how `field` takes part in the table's non-primary unique indexes.
/// A single-column index wins over a composite one.
fn unique(field: &str, indexes: &[RawIndex]) -> Option<Unique> {
    let mut candidates = indexes.iter().filter(|index| {
        !index.primary
            && index.unique
            && index.fields.iter().any(|index_field| index_field.attribute == field)
    });

    let first = candidates.next()?;
    if first.fields.len() == 1 {
        return Some(Unique::Single);
    }

    if candidates.any(|index| index.fields.len() == 1) {
        return Some(Unique::Single);
    }

    Some(Unique::Composite(first.name.clone()))
}

fn build_index(raw: &RawIndex) -> Index {
    Index {
        name: raw.name.clone(),
        unique: raw.unique,
        primary: raw.primary,
        kind: raw.kind.clone(),
        fields: raw
            .fields
            .iter()
            .map(|field| IndexField {
                name: field.attribute.clone(),
                order: field.order.as_deref().and_then(SortOrder::parse),
            })
            .collect(),
    }
}

/// Backslash-escapes quotes so the comment can be embedded in a string
/// literal.
fn escape_comment(comment: &str) -> String {
    let mut out = String::with_capacity(comment.len());

    for ch in comment.chars() {
        if matches!(ch, '\'' | '"') {
            out.push('\\');
        }
        out.push(ch);
    }

    out
}
