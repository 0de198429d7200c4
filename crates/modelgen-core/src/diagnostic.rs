use std::fmt;

/// A non-fatal problem found while building the schema.
///
/// Generation continues past every diagnostic; the affected column or
/// relation is either given a fallback value or left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A raw column type matched no type-mapping rule.
    UnmappedType {
        table: String,
        column: String,
        raw_type: String,
    },

    /// A relation was not written because its name is already taken on the
    /// destination table.
    RelationCollision {
        table: String,
        relation: String,
        origin: CollisionOrigin,
    },

    /// Two schema-qualified tables share a bare table name. The first one
    /// (in sorted key order) is kept.
    DuplicateTable {
        table: String,
        schema: Option<String>,
    },
}

/// Which pass attempted the colliding relation write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionOrigin {
    /// A foreign-key relation pair from relation inference.
    Inferred,

    /// A many-to-many relation synthesized from a junction table.
    Junction { junction: String },
}

/// Collects diagnostics across passes and logs each as it is recorded.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::UnmappedType {
                table,
                column,
                raw_type,
            } => tracing::warn!(%table, %column, %raw_type, "unmapped column type"),
            Diagnostic::RelationCollision {
                table,
                relation,
                origin,
            } => tracing::warn!(%table, %relation, %origin, "skipped colliding relation"),
            Diagnostic::DuplicateTable { table, schema } => {
                tracing::warn!(%table, ?schema, "skipped duplicate table name")
            }
        }

        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Diagnostic> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappedType {
                table,
                column,
                raw_type,
            } => write!(
                f,
                "no type mapping for `{raw_type}` (column `{table}.{column}`); using `unknown`"
            ),
            Self::RelationCollision {
                table,
                relation,
                origin,
            } => write!(
                f,
                "relation `{relation}` already exists on table `{table}`; skipped {origin} relation"
            ),
            Self::DuplicateTable {
                table,
                schema: Some(schema),
            } => write!(f, "table `{schema}.{table}` shadows an earlier `{table}`; skipped"),
            Self::DuplicateTable {
                table,
                schema: None,
            } => write!(f, "table `{table}` appears twice; skipped"),
        }
    }
}

impl fmt::Display for CollisionOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inferred => f.write_str("inferred"),
            Self::Junction { junction } => write!(f, "junction `{junction}`"),
        }
    }
}
