use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Index {
    pub name: String,

    pub unique: bool,

    /// Index over the primary key
    pub primary: bool,

    /// Index method, e.g. `btree`
    pub kind: Option<String>,

    pub fields: Vec<IndexField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexField {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,

    #[serde(rename = "DESC")]
    Desc,
}

impl Index {
    pub fn is_composite(&self) -> bool {
        self.fields.len() > 1
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|index_field| index_field.name == field)
    }
}

impl SortOrder {
    /// Parses `ASC` or `DESC`. Any other direction is treated as unspecified.
    pub fn parse(src: &str) -> Option<Self> {
        match src {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}
