use modelgen_core::ty::{translate_default, DefaultValue, IntegerKind, LangType, StorageType};
use serde_json::{json, Value};
use std_util::prelude::*;

fn translate(raw: Value, lang: LangType, storage: Option<StorageType>) -> DefaultValue {
    assert_some!(translate_default(Some(&raw), &lang, storage.as_ref()))
}

fn integer() -> Option<StorageType> {
    Some(StorageType::integer(IntegerKind::Integer))
}

#[test]
fn missing_default() {
    assert_none!(translate_default(None, &LangType::String, None));
    assert_none!(translate_default(Some(&Value::Null), &LangType::String, None));
}

#[test]
fn current_timestamp_is_now() {
    let value = translate(
        json!("CURRENT_TIMESTAMP"),
        LangType::Date,
        Some(StorageType::Date(None)),
    );

    assert_eq!(value, DefaultValue::Now);
    assert_eq!(value.to_string(), "DataTypes.NOW");
}

#[test]
fn textual_zero_stays_a_string() {
    let value = translate(json!("0"), LangType::Number, integer());

    assert_eq!(value, DefaultValue::String("0".to_string()));
    assert_eq!(value.to_string(), r#""0""#);

    // Wrapping parentheses are removed first, so the result is the same.
    assert_eq!(
        translate(json!("((0))"), LangType::Number, integer()),
        DefaultValue::String("0".to_string())
    );
}

#[test]
fn nonzero_numbers() {
    let value = translate(json!("42"), LangType::Number, integer());
    assert_eq!(value, DefaultValue::Number(42.0));
    assert_eq!(value.to_string(), "42");

    assert_eq!(
        translate(json!("(1.5)"), LangType::Number.nullable(), None).to_string(),
        "1.5"
    );
    assert_eq!(
        translate(json!("-3"), LangType::Number, integer()),
        DefaultValue::Number(-3.0)
    );
}

#[test]
fn non_string_values_pass_through() {
    assert_eq!(
        translate(json!(5), LangType::Number, integer()),
        DefaultValue::Number(5.0)
    );
    assert_eq!(
        translate(json!(false), LangType::Boolean, None),
        DefaultValue::Bool(false)
    );
}

#[test]
fn booleans() {
    for (raw, expected) in [
        ("true", true),
        ("TRUE", true),
        ("b'1'", true),
        ("(1)", true),
        ("false", false),
        ("((0))", false),
    ] {
        assert_eq!(
            translate(json!(raw), LangType::Boolean, Some(StorageType::Boolean)),
            DefaultValue::Bool(expected),
            "default `{raw}`"
        );
    }
}

#[test]
fn arrays() {
    let strings = LangType::Array(Box::new(LangType::String));
    let numbers = LangType::Array(Box::new(LangType::Number));

    assert_eq!(translate(json!("{a,b}"), strings.clone(), None).to_string(), r#"["a","b"]"#);
    assert_eq!(translate(json!("{1,2}"), numbers, None).to_string(), "[1,2]");
    assert_eq!(translate(json!("{}"), strings, None), DefaultValue::Array(vec![]));
}

#[test]
fn json_objects() {
    let value = translate(json!(r#"{"theme":"dark"}"#), LangType::Object, Some(StorageType::Jsonb));

    assert_eq!(value, DefaultValue::Json(r#"{"theme":"dark"}"#.to_string()));
    assert_eq!(value.to_string(), r#"{"theme":"dark"}"#);
}

#[test]
fn uuid_generation() {
    assert_eq!(
        translate(json!("uuid_generate_v4()"), LangType::String, Some(StorageType::Uuid)),
        DefaultValue::UuidV4
    );
    assert_eq!(
        translate(json!("gen_random_uuid()"), LangType::String, None).to_string(),
        "DataTypes.UUIDV4"
    );
}

#[test]
fn function_calls() {
    let value = translate(json!("now()"), LangType::Date, Some(StorageType::Date(None)));

    assert_eq!(value, DefaultValue::Function("now".to_string()));
    assert_eq!(value.to_string(), "fn('now')");
}

#[test]
fn current_time_keywords_are_literals() {
    let value = translate(json!("CURRENT_DATE"), LangType::Date, Some(StorageType::Date(None)));
    assert_eq!(value.to_string(), "literal('CURRENT_DATE')");

    // Date-only columns map to `string`, but still get the literal.
    let value = translate(json!("current_date"), LangType::String, Some(StorageType::DateOnly));
    assert_eq!(value, DefaultValue::Literal("current_date".to_string()));

    // The keyword means nothing for a text column.
    let value = translate(json!("localtime"), LangType::String, Some(StorageType::Text));
    assert_eq!(value, DefaultValue::String("localtime".to_string()));
}

#[test]
fn strings_are_escaped() {
    let value = translate(json!(r#"say "hi""#), LangType::String, Some(StorageType::Text));
    assert_eq!(value.to_string(), r#""say \"hi\"""#);

    let value = translate(json!("a/b\nc"), LangType::String, Some(StorageType::Text));
    assert_eq!(value.to_string(), r#""a\/b\nc""#);
}
