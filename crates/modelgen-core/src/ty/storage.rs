use super::Quoted;
use std::fmt;

/// Storage-level column type, as declared to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    Boolean,

    /// Range over the wrapped type
    Range(Box<StorageType>),

    Integer(IntegerType),

    /// Variable-length string. `None` is the engine default length.
    String(Option<u32>),

    /// Fixed-length string
    Char(Option<u32>),

    Real,

    Text,

    /// Calendar date without a time component
    DateOnly,

    /// Date and time with optional fractional-second precision
    Date(Option<u32>),

    Time,

    Float(Option<Precision>),

    Double(Option<Precision>),

    Decimal(Option<Precision>),

    Uuid,

    Json,

    Jsonb,

    /// Geometry, optionally restricted to an element type such as `POINT`
    Geometry(Option<String>),

    Geography(Option<String>),

    Array(Box<StorageType>),

    Blob,

    Hstore,

    Inet,

    Cidr,

    MacAddr,

    Enum(Vec<String>),

    TsVector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerType {
    pub kind: IntegerKind,
    pub unsigned: bool,
    pub zerofill: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerKind {
    TinyInt,
    SmallInt,
    MediumInt,
    Integer,
    BigInt,
}

/// Numeric precision and scale, e.g. `(19,4)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub precision: u32,
    pub scale: u32,
}

impl StorageType {
    pub fn integer(kind: IntegerKind) -> Self {
        Self::Integer(IntegerType {
            kind,
            unsigned: false,
            zerofill: false,
        })
    }

    pub fn decimal(precision: u32, scale: u32) -> Self {
        Self::Decimal(Some(Precision { precision, scale }))
    }

    pub fn is_uuid(&self) -> bool {
        matches!(self, Self::Uuid)
    }

    /// Date, time or timestamp storage
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::DateOnly | Self::Date(_) | Self::Time)
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DataTypes.")?;

        match self {
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::Range(inner) => write!(f, "RANGE({inner})"),
            Self::Integer(integer) => fmt::Display::fmt(integer, f),
            Self::String(len) => write_sized(f, "STRING", *len),
            Self::Char(len) => write_sized(f, "CHAR", *len),
            Self::Real => f.write_str("REAL"),
            Self::Text => f.write_str("TEXT"),
            Self::DateOnly => f.write_str("DATEONLY"),
            Self::Date(precision) => write_sized(f, "DATE", *precision),
            Self::Time => f.write_str("TIME"),
            Self::Float(precision) => write_precise(f, "FLOAT", *precision),
            Self::Double(precision) => write_precise(f, "DOUBLE", *precision),
            Self::Decimal(precision) => write_precise(f, "DECIMAL", *precision),
            Self::Uuid => f.write_str("UUID"),
            Self::Json => f.write_str("JSON"),
            Self::Jsonb => f.write_str("JSONB"),
            Self::Geometry(element) => write_geo(f, "GEOMETRY", element.as_deref()),
            Self::Geography(element) => write_geo(f, "GEOGRAPHY", element.as_deref()),
            Self::Array(element) => write!(f, "ARRAY({element})"),
            Self::Blob => f.write_str("BLOB"),
            Self::Hstore => f.write_str("HSTORE"),
            Self::Inet => f.write_str("INET"),
            Self::Cidr => f.write_str("CIDR"),
            Self::MacAddr => f.write_str("MACADDR"),
            Self::Enum(values) => {
                f.write_str("ENUM(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Quoted(value))?;
                }
                f.write_str(")")
            }
            Self::TsVector => f.write_str("TSVECTOR"),
        }
    }
}

impl fmt::Display for IntegerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            IntegerKind::TinyInt => "TINYINT",
            IntegerKind::SmallInt => "SMALLINT",
            IntegerKind::MediumInt => "MEDIUMINT",
            IntegerKind::Integer => "INTEGER",
            IntegerKind::BigInt => "BIGINT",
        })?;

        if self.unsigned {
            f.write_str(".UNSIGNED")?;
        }

        if self.zerofill {
            f.write_str(".ZEROFILL")?;
        }

        Ok(())
    }
}

impl serde::Serialize for StorageType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn write_sized(f: &mut fmt::Formatter<'_>, name: &str, size: Option<u32>) -> fmt::Result {
    match size {
        Some(size) => write!(f, "{name}({size})"),
        None => f.write_str(name),
    }
}

fn write_precise(f: &mut fmt::Formatter<'_>, name: &str, precision: Option<Precision>) -> fmt::Result {
    match precision {
        Some(Precision { precision, scale }) => write!(f, "{name}({precision},{scale})"),
        None => f.write_str(name),
    }
}

fn write_geo(f: &mut fmt::Formatter<'_>, name: &str, element: Option<&str>) -> fmt::Result {
    match element {
        Some(element) => write!(f, "{name}('{}')", element.to_uppercase()),
        None => f.write_str(name),
    }
}
