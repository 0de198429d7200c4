use indexmap::IndexMap;
use serde::Deserialize;

/// Junction tables keyed by table name, in configuration order.
///
/// Deserializes from either a list of table names (every foreign key in
/// scope) or a map from table name to [`JoinTable`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "JoinTablesRepr")]
pub struct JoinTables {
    tables: IndexMap<String, JoinTable>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JoinTablesRepr {
    List(Vec<String>),
    Map(IndexMap<String, JoinTable>),
}

/// Settings for a single junction table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JoinTable {
    /// Which foreign-key combinations produce many-to-many relations
    pub fields: FieldScope,

    /// Relation names to use instead of the pluralized default, keyed by the
    /// foreign key on the far side of the junction
    pub renames: IndexMap<String, String>,
}

/// Foreign keys of a junction table that take part in synthesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FieldScopeRepr")]
pub enum FieldScope {
    /// Every pair of foreign keys
    #[default]
    All,

    /// Pairs where at least one side is a listed foreign key
    Fields(Vec<String>),

    /// Exactly the listed pairs, in either order. `*` matches any foreign key.
    Pairs(Vec<(String, String)>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldScopeRepr {
    Flag(bool),
    Keyword(String),
    Fields(Vec<String>),
    Pairs(Vec<Vec<String>>),
}

const WILDCARD: &str = "*";

impl JoinTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: impl Into<String>, join_table: JoinTable) {
        self.tables.insert(table.into(), join_table);
    }

    pub fn get(&self, table: &str) -> Option<&JoinTable> {
        self.tables.get(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JoinTable)> + '_ {
        self.tables
            .iter()
            .map(|(name, join_table)| (name.as_str(), join_table))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl From<JoinTablesRepr> for JoinTables {
    fn from(repr: JoinTablesRepr) -> Self {
        let tables = match repr {
            JoinTablesRepr::List(names) => names
                .into_iter()
                .map(|name| (name, JoinTable::all()))
                .collect(),
            JoinTablesRepr::Map(tables) => tables,
        };

        Self { tables }
    }
}

impl<S: Into<String>> FromIterator<S> for JoinTables {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tables: iter
                .into_iter()
                .map(|name| (name.into(), JoinTable::all()))
                .collect(),
        }
    }
}

impl JoinTable {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: FieldScope::Fields(fields.into_iter().map(Into::into).collect()),
            renames: IndexMap::new(),
        }
    }

    pub fn pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            fields: FieldScope::Pairs(
                pairs
                    .into_iter()
                    .map(|(a, b)| (a.into(), b.into()))
                    .collect(),
            ),
            renames: IndexMap::new(),
        }
    }

    /// Use `name` for relations reaching through the junction via
    /// `foreign_key`.
    pub fn rename(mut self, foreign_key: impl Into<String>, name: impl Into<String>) -> Self {
        self.renames.insert(foreign_key.into(), name.into());
        self
    }
}

impl FieldScope {
    /// Returns `true` if the foreign key can take part in any synthesized pair.
    pub fn includes(&self, foreign_key: &str) -> bool {
        match self {
            Self::All | Self::Fields(_) => true,
            Self::Pairs(pairs) => pairs
                .iter()
                .any(|(a, b)| matches(a, foreign_key) || matches(b, foreign_key)),
        }
    }

    /// Returns `true` if a relation should be synthesized between the two
    /// foreign keys.
    pub fn allows(&self, foreign_key: &str, other_key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Fields(fields) => fields
                .iter()
                .any(|field| field == foreign_key || field == other_key),
            Self::Pairs(pairs) => pairs.iter().any(|(a, b)| {
                (matches(a, foreign_key) && matches(b, other_key))
                    || (matches(a, other_key) && matches(b, foreign_key))
            }),
        }
    }
}

fn matches(pattern: &str, foreign_key: &str) -> bool {
    pattern == WILDCARD || pattern == foreign_key
}

impl TryFrom<FieldScopeRepr> for FieldScope {
    type Error = String;

    fn try_from(repr: FieldScopeRepr) -> Result<Self, Self::Error> {
        match repr {
            FieldScopeRepr::Flag(true) => Ok(Self::All),
            FieldScopeRepr::Flag(false) => {
                Err("`fields: false` is not supported; remove the junction table instead".into())
            }
            FieldScopeRepr::Keyword(keyword) if keyword == "all" => Ok(Self::All),
            FieldScopeRepr::Keyword(keyword) => Err(format!(
                "expected `\"all\"` or a list of foreign keys; got `{keyword}`"
            )),
            FieldScopeRepr::Fields(fields) => Ok(Self::Fields(fields)),
            FieldScopeRepr::Pairs(pairs) => pairs
                .into_iter()
                .map(|pair| match <[String; 2]>::try_from(pair) {
                    Ok([a, b]) => Ok((a, b)),
                    Err(pair) => Err(format!(
                        "a foreign-key pair must name exactly two fields; got {pair:?}"
                    )),
                })
                .collect::<Result<_, _>>()
                .map(Self::Pairs),
        }
    }
}
