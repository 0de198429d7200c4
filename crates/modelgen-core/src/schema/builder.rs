mod join_table;
mod relate;
mod relation;
mod table;

use super::Schema;
use crate::{Config, Diagnostic, Diagnostics, RawSchema, Result};
use std::borrow::Cow;

/// Builds a [`Schema`] from an introspected [`RawSchema`].
#[derive(Debug)]
pub struct Builder<'a> {
    config: &'a Config,
}

/// Output of a successful build.
#[derive(Debug)]
pub struct Generated {
    pub schema: Schema,

    /// Non-fatal problems, in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

/// Used to track state during the build process
struct BuildSchema<'a> {
    config: &'a Config,

    raw: &'a RawSchema,

    /// Schema as it is built. Each pass mutates it in place.
    schema: Schema,

    diagnostics: Diagnostics,
}

impl<'a> Builder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(&self, raw: &RawSchema) -> Result<Generated> {
        let mut builder = BuildSchema {
            config: self.config,
            raw,
            schema: Schema::default(),
            diagnostics: Diagnostics::new(),
        };

        builder.build_tables();

        // Introspection adapters that resolve parent/child roles themselves
        // supply the relation list; otherwise it comes from foreign keys.
        let relations = match &raw.relations {
            Some(relations) => Cow::Borrowed(relations.as_slice()),
            None => Cow::Owned(builder.derive_relations()),
        };

        for relation in relations.iter() {
            builder.infer_relation(relation)?;
        }

        // Junction tables read the `belongsTo` relations written above, so
        // this must run after inference.
        builder.synthesize_join_tables()?;

        builder.schema.verify()?;

        tracing::debug!(
            tables = builder.schema.tables.len(),
            diagnostics = builder.diagnostics.len(),
            "built schema"
        );

        Ok(Generated {
            schema: builder.schema,
            diagnostics: builder.diagnostics.into_vec(),
        })
    }
}

impl BuildSchema<'_> {
    fn diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl Generated {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
