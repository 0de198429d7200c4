use modelgen_core::{
    config::Case,
    schema::{Relation, RelationKind, Schema},
    Builder, CollisionOrigin, Config, Diagnostic, Generated, RawSchema,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std_util::prelude::*;

fn build(config: &Config, raw: serde_json::Value) -> Generated {
    let raw = assert_ok!(RawSchema::from_value(raw));
    assert_ok!(Builder::new(config).build(&raw))
}

fn blog() -> serde_json::Value {
    json!({
        "tables": {
            "users": {
                "id": { "type": "INTEGER", "primaryKey": true, "autoIncrement": true }
            },
            "posts": {
                "id": { "type": "INTEGER", "primaryKey": true, "autoIncrement": true },
                "author_id": { "type": "INTEGER" },
                "editor_id": { "type": "INTEGER", "allowNull": true }
            },
            "profiles": {
                "id": { "type": "INTEGER", "primaryKey": true, "autoIncrement": true },
                "user_id": { "type": "INTEGER", "allowNull": true }
            },
            "categories": {
                "id": { "type": "INTEGER", "primaryKey": true, "autoIncrement": true },
                "parent_id": { "type": "INTEGER", "allowNull": true }
            }
        },
        "indexes": {
            "profiles": [
                { "name": "profiles_user_id_key", "unique": true, "fields": [{ "attribute": "user_id" }] }
            ]
        },
        "foreignKeys": {
            "posts": {
                "author_id": { "targetTable": "users", "targetColumn": "id" },
                "editor_id": { "targetTable": "users", "targetColumn": "id" }
            },
            "profiles": {
                "user_id": { "targetTable": "users", "targetColumn": "id" }
            },
            "categories": {
                "parent_id": { "targetTable": "categories", "targetColumn": "id" }
            }
        }
    })
}

fn relation<'a>(schema: &'a Schema, table: &str, name: &str) -> &'a Relation {
    let table = assert_some!(schema.table(table));
    assert_some!(table.relation(name))
}

/// Every `belongsTo` has exactly one `hasOne`/`hasMany` partner over the same
/// foreign key.
#[track_caller]
fn assert_pairs(schema: &Schema) {
    for table in schema.tables() {
        for (name, belongs_to) in table.relations.iter().filter(|(_, r)| r.is_belongs_to()) {
            let target = assert_some!(schema.table(&belongs_to.target_table));
            let partners = target
                .relations
                .values()
                .filter(|other| {
                    other.is_has()
                        && other.target_table == table.table_name
                        && other.foreign_key == belongs_to.foreign_key
                })
                .count();

            assert_eq!(partners, 1, "`{}.{name}` should have one partner", table.table_name);
        }
    }
}

#[test]
fn foreign_keys_become_relation_pairs() {
    let generated = build(&Config::default(), blog());
    let schema = &generated.schema;

    let author = relation(schema, "posts", "author");
    assert_eq!(author.kind, RelationKind::BelongsTo);
    assert_eq!(author.foreign_key, "author_id");
    assert_eq!(author.target_table, "users");
    assert!(!author.optional);

    let posts = relation(schema, "users", "posts");
    assert_eq!(posts.kind, RelationKind::HasMany);
    assert_eq!(posts.foreign_key, "author_id");
    assert_eq!(posts.target_table, "posts");
    assert!(!posts.optional);

    assert_pairs(schema);
    assert_empty!(generated.diagnostics);
}

#[test]
fn second_key_to_the_same_parent_gets_a_prefixed_name() {
    let generated = build(&Config::default(), blog());
    let schema = &generated.schema;

    let editor = relation(schema, "posts", "editor");
    assert!(editor.optional);

    let edited = relation(schema, "users", "editor_posts");
    assert_eq!(edited.kind, RelationKind::HasMany);
    assert_eq!(edited.foreign_key, "editor_id");
    // Only `hasOne` sides carry the nullability of the key
    assert!(!edited.optional);
}

#[test]
fn unique_foreign_key_is_has_one() {
    let generated = build(&Config::default(), blog());
    let schema = &generated.schema;

    let profile = relation(schema, "users", "profile");
    assert_eq!(profile.kind, RelationKind::HasOne);
    assert_eq!(profile.foreign_key, "user_id");
    assert!(profile.optional);

    assert!(relation(schema, "profiles", "user").optional);
}

#[test]
fn self_reference() {
    let generated = build(&Config::default(), blog());
    let schema = &generated.schema;

    let parent = relation(schema, "categories", "parent");
    assert_eq!(parent.kind, RelationKind::BelongsTo);
    assert_eq!(parent.target_table, "categories");

    let children = relation(schema, "categories", "categories");
    assert_eq!(children.kind, RelationKind::HasMany);
    assert_eq!(children.foreign_key, "parent_id");

    assert_pairs(schema);
}

#[test]
fn relation_names_follow_property_case() {
    let config = Config::new()
        .case_model(Case::Pascal)
        .case_prop(Case::Camel)
        .singularize(true);
    let generated = build(&config, blog());
    let schema = &generated.schema;

    let author = relation(schema, "posts", "author");
    assert_eq!(author.foreign_key, "authorId");
    assert_eq!(author.target_model, "User");

    let edited = relation(schema, "users", "editorPosts");
    assert_eq!(edited.target_model, "Post");
    assert_eq!(edited.target_file, "post");

    assert_pairs(schema);
}

#[test]
fn resolved_relations_are_used_as_given() {
    let mut raw = blog();
    raw["relations"] = json!([
        {
            "childTable": "public.posts",
            "parentTable": "public.users",
            "foreignKey": "author_id",
            "childProp": "writings",
            "parentProp": "writer",
            "isOne": false
        }
    ]);

    let generated = build(&Config::default(), raw);
    let schema = &generated.schema;

    assert_eq!(relation(schema, "posts", "writer").foreign_key, "author_id");
    assert_eq!(relation(schema, "users", "writings").kind, RelationKind::HasMany);

    // Nothing is derived from foreign keys when relations are supplied
    assert_eq!(assert_some!(schema.table("posts")).relations.len(), 1);
    assert_eq!(assert_some!(schema.table("categories")).relations.len(), 0);
}

#[test]
fn configured_renames_apply_to_both_sides() {
    let config = Config::new()
        .rename_relation("posts", "author", "writer")
        .rename_relation("users", "posts", "writings");
    let generated = build(&config, blog());
    let schema = &generated.schema;

    assert_eq!(relation(schema, "posts", "writer").foreign_key, "author_id");
    assert_eq!(relation(schema, "users", "writings").foreign_key, "author_id");
    assert!(assert_some!(schema.table("posts")).relation("author").is_none());

    assert_pairs(schema);
}

#[test]
fn colliding_pair_is_skipped_whole() {
    let mut raw = blog();
    raw["relations"] = json!([
        {
            "childTable": "posts", "parentTable": "users", "foreignKey": "author_id",
            "childProp": "posts", "parentProp": "author"
        },
        {
            "childTable": "posts", "parentTable": "users", "foreignKey": "editor_id",
            "childProp": "edited_posts", "parentProp": "author"
        }
    ]);

    let generated = build(&Config::default(), raw);
    let schema = &generated.schema;

    // The first writer keeps the name
    assert_eq!(relation(schema, "posts", "author").foreign_key, "author_id");

    // Neither side of the second pair was written
    let users = assert_some!(schema.table("users"));
    assert!(users.relation("edited_posts").is_none());

    assert_eq!(
        generated.diagnostics,
        vec![Diagnostic::RelationCollision {
            table: "posts".to_string(),
            relation: "author".to_string(),
            origin: CollisionOrigin::Inferred,
        }]
    );

    assert_pairs(schema);
}

#[test]
fn missing_foreign_key_column_is_fatal() {
    let mut raw = blog();
    raw["relations"] = json!([
        {
            "childTable": "posts", "parentTable": "users", "foreignKey": "owner_id",
            "childProp": "posts", "parentProp": "owner"
        }
    ]);

    let raw = assert_ok!(RawSchema::from_value(raw));
    let err = assert_err!(Builder::new(&Config::default()).build(&raw));

    assert!(err.is_missing_column());
    assert_eq!(
        err.to_string(),
        "relating `posts`: column `owner_id` not found in table `posts`"
    );
}

#[test]
fn missing_table_is_fatal() {
    let mut raw = blog();
    raw["foreignKeys"]["posts"]["author_id"]["targetTable"] = json!("accounts");

    let raw = assert_ok!(RawSchema::from_value(raw));
    let err = assert_err!(Builder::new(&Config::default()).build(&raw));

    assert!(err.is_missing_table());
    assert_eq!(
        err.to_string(),
        "relating `posts`: table `accounts` not found in schema"
    );
}

#[test]
fn ignored_foreign_keys() {
    let mut raw = blog();
    raw["foreignKeys"]["posts"]["editor_id"]["isForeignKey"] = json!(false);

    let generated = build(&Config::default(), raw);
    let schema = &generated.schema;

    let posts = assert_some!(schema.table("posts"));
    assert!(posts.relation("editor").is_none());
    assert!(posts.columns["editor_id"].reference.is_none());

    let reference = assert_some!(posts.columns["author_id"].reference.as_ref());
    assert_eq!(reference.target_table, "users");
    assert_eq!(reference.target_column, "id");
}
