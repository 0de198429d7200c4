use serde::Serialize;

/// An association from one table to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    #[serde(flatten)]
    pub kind: RelationKind,

    /// Foreign-key property name. For `belongsToMany`, the key on the
    /// junction table that points back at the owning table.
    pub foreign_key: String,

    pub target_table: String,

    pub target_model: String,

    pub target_file: String,

    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RelationKind {
    BelongsTo,
    HasOne,
    HasMany,
    BelongsToMany(Through),
}

/// The junction table of a `belongsToMany` relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Through {
    /// Junction model name
    #[serde(rename = "through")]
    pub model: String,

    #[serde(rename = "throughFileName")]
    pub file: String,

    #[serde(rename = "throughAlias")]
    pub alias: String,

    /// Key on the junction table pointing at the target
    pub other_key: String,
}

impl Relation {
    pub fn is_belongs_to(&self) -> bool {
        matches!(self.kind, RelationKind::BelongsTo)
    }

    /// Returns `true` for the parent side of a foreign key (`hasOne` or
    /// `hasMany`)
    pub fn is_has(&self) -> bool {
        matches!(self.kind, RelationKind::HasOne | RelationKind::HasMany)
    }

    pub fn as_belongs_to_many(&self) -> Option<&Through> {
        match &self.kind {
            RelationKind::BelongsToMany(through) => Some(through),
            _ => None,
        }
    }

    /// The junction key pointing at the target, for `belongsToMany`
    pub fn other_key(&self) -> Option<&str> {
        self.as_belongs_to_many()
            .map(|through| through.other_key.as_str())
    }
}
