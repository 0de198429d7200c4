use super::{
    IntegerKind, IntegerType, LangType, Precision, RangeElement, StorageType, TypeMapping,
};
use regex::Regex;
use std::sync::LazyLock;

/// Element types are mapped at most one level deep. An array of arrays, or a
/// geometry array, comes back unmapped instead of recursing further.
const MAX_DEPTH: usize = 1;

/// Length the engine applies to `VARCHAR` when none is given.
const DEFAULT_STRING_LENGTH: u32 = 255;

struct Input<'a> {
    /// Lower-cased, trimmed type
    ty: &'a str,

    /// Type as reported, trimmed
    raw: &'a str,

    enum_values: Option<&'a [String]>,

    element_type: Option<&'a str>,

    depth: usize,
}

struct Rule {
    name: &'static str,

    pattern: Regex,

    /// A raw type this rule is expected to claim
    #[cfg_attr(not(test), allow(dead_code))]
    example: &'static str,

    map: fn(&Input<'_>) -> TypeMapping,
}

/// Evaluated top to bottom; the first rule whose pattern matches the
/// lower-cased type produces the mapping.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule("array", r"^array|\[\]$", "integer[]", array),
        rule(
            "enum",
            r"^(enum(\(.*\))?|user-defined)$",
            "enum('small','large')",
            enumeration,
        ),
        rule(
            "boolean",
            r"^(boolean|bool|bit|bit\(1\)|tinyint\(1\))$",
            "tinyint(1)",
            |_| TypeMapping::new(StorageType::Boolean, LangType::Boolean),
        ),
        rule("numrange", r"^numrange$", "numrange", |_| {
            range(StorageType::Decimal(None), RangeElement::Number)
        }),
        rule("int4range", r"^int4range$", "int4range", |_| {
            range(
                StorageType::integer(IntegerKind::Integer),
                RangeElement::Number,
            )
        }),
        rule("int8range", r"^int8range$", "int8range", |_| {
            range(
                StorageType::integer(IntegerKind::BigInt),
                RangeElement::Number,
            )
        }),
        rule("daterange", r"^daterange$", "daterange", |_| {
            range(StorageType::DateOnly, RangeElement::DateOrString)
        }),
        rule("tsrange", r"^(tsrange|tstzrange)$", "tstzrange", |_| {
            range(StorageType::Date(None), RangeElement::DateOrString)
        }),
        rule(
            "serial",
            r"^(smallserial|serial2|bigserial|serial8|serial|serial4)$",
            "bigserial",
            serial,
        ),
        rule(
            "integer",
            r"^(bigint|smallint|mediumint|tinyint|integer|int[248]?)\b",
            "bigint(20) unsigned zerofill",
            integer,
        ),
        rule("text_max", r"^n?varchar\(max\)$", "nvarchar(max)", |_| {
            TypeMapping::new(StorageType::Text, LangType::String)
        }),
        rule(
            "string",
            r"n?varchar|string|varying",
            "character varying(40)",
            |input| {
                let len = length(input.ty).filter(|len| *len != DEFAULT_STRING_LENGTH);
                TypeMapping::new(StorageType::String(len), LangType::String)
            },
        ),
        rule("char", r"^n?char", "character(2)", |input| {
            TypeMapping::new(StorageType::Char(length(input.ty)), LangType::String)
        }),
        rule("real", r"^real", "real", |_| {
            TypeMapping::new(StorageType::Real, LangType::Number)
        }),
        rule("text", r"text$", "mediumtext", |_| {
            TypeMapping::new(StorageType::Text, LangType::String)
        }),
        rule("date_only", r"^date$", "date", |_| {
            TypeMapping::new(StorageType::DateOnly, LangType::String)
        }),
        rule(
            "datetime",
            r"^(date|timestamp|year)",
            "timestamp(3) with time zone",
            |input| TypeMapping::new(StorageType::Date(length(input.ty)), LangType::Date),
        ),
        rule("time", r"^time", "time without time zone", |_| {
            TypeMapping::new(StorageType::Time, LangType::String)
        }),
        rule("double", r"^(float8|double)", "double precision", |input| {
            TypeMapping::new(StorageType::Double(precision(input.ty)), LangType::Number)
        }),
        rule("float", r"^(float|float4)", "float(10,2)", |input| {
            TypeMapping::new(StorageType::Float(precision(input.ty)), LangType::Number)
        }),
        rule("decimal", r"^(decimal|numeric)", "numeric(12, 2)", |input| {
            TypeMapping::new(StorageType::Decimal(precision(input.ty)), LangType::Number)
        }),
        rule("money", r"^money", "money", |_| {
            TypeMapping::new(StorageType::decimal(19, 4), LangType::Number)
        }),
        rule("smallmoney", r"^smallmoney", "smallmoney", |_| {
            TypeMapping::new(StorageType::decimal(10, 4), LangType::Number)
        }),
        rule("uuid", r"^uuid|uniqueidentifier", "uniqueidentifier", |_| {
            TypeMapping::new(StorageType::Uuid, LangType::String)
        }),
        rule("jsonb", r"^jsonb", "jsonb", |_| {
            TypeMapping::new(StorageType::Jsonb, LangType::Object)
        }),
        rule("json", r"^json", "json", |_| {
            TypeMapping::new(StorageType::Json, LangType::Object)
        }),
        rule("geometry", r"^geometry", "geometry", |input| {
            TypeMapping::new(
                StorageType::Geometry(input.element_type.map(str::to_string)),
                LangType::Object,
            )
        }),
        rule("geography", r"^geography", "geography", |input| {
            TypeMapping::new(
                StorageType::Geography(input.element_type.map(str::to_string)),
                LangType::Object,
            )
        }),
        rule("blob", r"binary|image|blob|bytea", "varbinary(16)", |_| {
            TypeMapping::new(StorageType::Blob, LangType::Buffer)
        }),
        rule("hstore", r"^hstore", "hstore", |_| {
            TypeMapping::new(StorageType::Hstore, LangType::Object)
        }),
        rule("inet", r"^inet", "inet", |_| {
            TypeMapping::new(StorageType::Inet, LangType::String)
        }),
        rule("cidr", r"^cidr", "cidr", |_| {
            TypeMapping::new(StorageType::Cidr, LangType::String)
        }),
        rule("oid", r"^oid", "oid", |_| {
            TypeMapping::new(
                StorageType::integer(IntegerKind::Integer),
                LangType::Number,
            )
        }),
        rule("macaddr", r"^macaddr", "macaddr8", |_| {
            TypeMapping::new(StorageType::MacAddr, LangType::String)
        }),
        rule("tsvector", r"tsvector", "tsvector", |_| {
            TypeMapping::new(StorageType::TsVector, LangType::String)
        }),
        // Extension types reported with a schema prefix, e.g. `public.hstore`
        rule("hstore_qualified", r"hstore", "public.hstore", |_| {
            TypeMapping::new(StorageType::Hstore, LangType::Object)
        }),
    ]
});

static LENGTH: LazyLock<Regex> = LazyLock::new(|| regex(r"\((\d+)\)"));

static PRECISION: LazyLock<Regex> = LazyLock::new(|| regex(r"\((\d+)\s*,\s*(\d+)\)"));

pub(super) fn map(
    raw: &str,
    enum_values: Option<&[String]>,
    element_type: Option<&str>,
    depth: usize,
) -> TypeMapping {
    if depth > MAX_DEPTH {
        tracing::debug!(raw, depth, "element type nested too deeply");
        return TypeMapping::unmapped();
    }

    let raw = raw.trim();
    let ty = raw.to_lowercase();
    let input = Input {
        ty: &ty,
        raw,
        enum_values,
        element_type,
        depth,
    };

    match RULES.iter().find(|rule| rule.pattern.is_match(&ty)) {
        Some(rule) => {
            tracing::trace!(raw, rule = rule.name, "matched type rule");
            (rule.map)(&input)
        }
        None => TypeMapping::unmapped(),
    }
}

fn rule(
    name: &'static str,
    pattern: &str,
    example: &'static str,
    map: fn(&Input<'_>) -> TypeMapping,
) -> Rule {
    Rule {
        name,
        pattern: regex(pattern),
        example,
        map,
    }
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid type rule `{pattern}`: {err}"))
}

fn range(bound: StorageType, element: RangeElement) -> TypeMapping {
    TypeMapping::new(StorageType::Range(Box::new(bound)), LangType::Range(element))
}

fn serial(input: &Input<'_>) -> TypeMapping {
    let kind = match input.ty {
        "smallserial" | "serial2" => IntegerKind::SmallInt,
        "bigserial" | "serial8" => IntegerKind::BigInt,
        _ => IntegerKind::Integer,
    };

    TypeMapping::new(StorageType::integer(kind), LangType::Number)
}

fn integer(input: &Input<'_>) -> TypeMapping {
    let ty = input.ty;
    let kind = if ty.starts_with("bigint") || ty.starts_with("int8") {
        IntegerKind::BigInt
    } else if ty.starts_with("smallint") || ty.starts_with("int2") {
        IntegerKind::SmallInt
    } else if ty.starts_with("mediumint") {
        IntegerKind::MediumInt
    } else if ty.starts_with("tinyint") {
        IntegerKind::TinyInt
    } else {
        IntegerKind::Integer
    };

    TypeMapping::new(
        StorageType::Integer(IntegerType {
            kind,
            unsigned: ty.contains("unsigned"),
            zerofill: ty.contains("zerofill"),
        }),
        LangType::Number,
    )
}

fn array(input: &Input<'_>) -> TypeMapping {
    let element = input
        .element_type
        .or_else(|| input.raw.strip_suffix("[]"))
        .map(str::trim)
        .filter(|element| !element.is_empty());

    let Some(element) = element else {
        return TypeMapping {
            storage: None,
            lang: LangType::Array(Box::new(LangType::Unknown)),
        };
    };

    let element = map(element, None, None, input.depth + 1);

    TypeMapping {
        storage: element
            .storage
            .map(|storage| StorageType::Array(Box::new(storage))),
        lang: LangType::Array(Box::new(element.lang)),
    }
}

fn enumeration(input: &Input<'_>) -> TypeMapping {
    let values = match input.enum_values {
        Some(values) => values.to_vec(),
        None => inline_enum_values(input.raw),
    };

    if values.is_empty() {
        return TypeMapping::unmapped();
    }

    TypeMapping::new(StorageType::Enum(values.clone()), LangType::Enum(values))
}

/// Parses the members of `enum('a','b')`, keeping their original case.
fn inline_enum_values(raw: &str) -> Vec<String> {
    let (Some(start), Some(end)) = (raw.find('('), raw.rfind(')')) else {
        return vec![];
    };

    if end <= start {
        return vec![];
    }

    raw[start + 1..end]
        .split(',')
        .map(|value| value.trim().trim_matches(|c| c == '\'' || c == '"'))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn length(ty: &str) -> Option<u32> {
    LENGTH.captures(ty)?.get(1)?.as_str().parse().ok()
}

fn precision(ty: &str) -> Option<Precision> {
    let captures = PRECISION.captures(ty)?;

    Some(Precision {
        precision: captures.get(1)?.as_str().parse().ok()?,
        scale: captures.get(2)?.as_str().parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_claims_its_example() {
        for rule in RULES.iter() {
            let first = RULES
                .iter()
                .find(|candidate| candidate.pattern.is_match(rule.example))
                .map(|candidate| candidate.name);

            assert_eq!(
                first,
                Some(rule.name),
                "`{}` is shadowed by an earlier rule",
                rule.example
            );
        }
    }

    #[test]
    fn every_rule_maps_its_example() {
        for rule in RULES.iter() {
            let element_type = (rule.name == "geometry" || rule.name == "geography")
                .then_some("point");
            let mapping = map(rule.example, None, element_type, 0);

            assert!(
                mapping.is_mapped(),
                "rule `{}` left `{}` unmapped: {mapping:?}",
                rule.name,
                rule.example
            );
        }
    }

    #[test]
    fn rule_names_are_unique() {
        let names: Vec<_> = RULES.iter().map(|rule| rule.name).collect();
        std_util::assert_unique!(names);
    }

    #[test]
    fn inline_enum_keeps_case() {
        assert_eq!(
            inline_enum_values("ENUM('Small', \"Large\")"),
            vec!["Small".to_string(), "Large".to_string()]
        );
        assert!(inline_enum_values("enum").is_empty());
    }
}
