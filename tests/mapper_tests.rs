//! Unit tests for the DTO mapper.
//!
//! Tests for rule dispatch, transform application, nested specifications,
//! error propagation, and the documented end-to-end scenario.

#![cfg(feature = "mapper")]

use chrono::NaiveDate;
use dtomap::mapper::{MapError, Mapper, MappingSpec, Rule, TransformResult, map_to_dto};
use dtomap::resolve::{Path, Resolve};
use dtomap::spec;
use rstest::rstest;
use serde_json::{Value, json};

/// Renders `"12/12/2012"`-style dates as ISO timestamps at UTC midnight.
fn to_iso_date(raw: Option<Value>, _source: &Value) -> TransformResult {
    let text = raw
        .as_ref()
        .and_then(Value::as_str)
        .ok_or("expected a date string")?;
    let date = NaiveDate::parse_from_str(text, "%m/%d/%Y")?;
    Ok(json!(date.format("%Y-%m-%dT00:00:00.000Z").to_string()))
}

/// Uppercases every string in a resolved array.
fn uppercase_all(raw: Option<Value>, _source: &Value) -> TransformResult {
    let Some(Value::Array(items)) = raw else {
        return Err("expected an array of strings".into());
    };
    let upper = items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Value::String(text.to_uppercase()),
            other => other,
        })
        .collect();
    Ok(Value::Array(upper))
}

/// The null-defaulting transform of the documented scenario: `v || 10`.
fn age_or_ten(raw: Option<Value>, _source: &Value) -> TransformResult {
    Ok(match raw {
        Some(value) if !value.is_null() => value,
        _ => json!(10),
    })
}

// =============================================================================
// Path rules
// =============================================================================

#[test]
fn test_path_rule_copies_resolved_value() {
    let source = json!({"user": {"name": "ayaan"}});
    let output = map_to_dto(&source, &spec! { name: "user.name" }).unwrap();
    assert_eq!(output, json!({"name": "ayaan"}));
}

#[test]
fn test_path_rule_passes_null_through() {
    let source = json!({"x": null});
    let output = map_to_dto(&source, &spec! { x: "x" }).unwrap();
    assert_eq!(output, json!({"x": null}));
}

#[test]
fn test_path_rule_writes_null_for_absence() {
    let source = json!({"x": null});
    let output = map_to_dto(&source, &spec! { y: "y" }).unwrap();
    // The key is still written: output shape always mirrors the spec.
    assert_eq!(output, json!({"y": null}));
    assert!(output.as_object().unwrap().contains_key("y"));
}

#[rstest]
#[case("user.skills[0]", json!("java"))]
#[case("user.skills.1", json!("node"))]
#[case("user.skills[9]", Value::Null)]
fn test_path_rule_bracket_indexing(#[case] path: &str, #[case] expected: Value) {
    let source = json!({"user": {"skills": ["java", "node"]}});
    let output = map_to_dto(&source, &MappingSpec::new().with_field("skill", path)).unwrap();
    assert_eq!(output, json!({"skill": expected}));
}

// =============================================================================
// Transform rules
// =============================================================================

#[test]
fn test_transform_defaults_resolved_null() {
    let source = json!({"user": {"age": null}});
    let output = map_to_dto(&source, &spec! { age: "user.age" => age_or_ten }).unwrap();
    assert_eq!(output, json!({"age": 10}));
}

#[test]
fn test_transform_observes_absence_as_none() {
    let source = json!({"user": {"age": null}});
    let seen = spec! {
        present: "user.age" => |raw, _source| Ok(json!(raw.is_some())),
        absent: "user.height" => |raw, _source| Ok(json!(raw.is_some())),
    };
    let output = map_to_dto(&source, &seen).unwrap();
    assert_eq!(output, json!({"present": true, "absent": false}));
}

#[test]
fn test_transform_receives_whole_source() {
    let source = json!({"first": "ada", "last": "lovelace"});
    let full_name = spec! {
        fullName: "first" => |raw, source| {
            let first = raw.as_ref().and_then(Value::as_str).unwrap_or_default();
            let last = source.pointer("/last").and_then(Value::as_str).unwrap_or_default();
            Ok(json!(format!("{first} {last}")))
        },
    };
    let output = map_to_dto(&source, &full_name).unwrap();
    assert_eq!(output, json!({"fullName": "ada lovelace"}));
}

#[test]
fn test_transform_rule_without_function_acts_like_path_rule() {
    let source = json!({"meta": {"created": "12/12/2012"}});
    let spec = MappingSpec::new().with_field(
        "created",
        Rule::Transform {
            path: Path::parse("meta.created"),
            transform: None,
        },
    );
    let output = map_to_dto(&source, &spec).unwrap();
    assert_eq!(output, json!({"created": "12/12/2012"}));
}

// =============================================================================
// Nested rules
// =============================================================================

#[test]
fn test_nested_spec_builds_nested_output() {
    let source = json!({"meta": {"created": "12/12/2012"}});
    let spec = spec! {
        meta: {
            metaCreated: "meta.created" => to_iso_date,
        },
    };
    let output = map_to_dto(&source, &spec).unwrap();
    assert_eq!(
        output,
        json!({"meta": {"metaCreated": "2012-12-12T00:00:00.000Z"}}),
    );
}

#[test]
fn test_nested_spec_resolves_against_top_level_source() {
    let source = json!({"user": {"name": "ayaan"}, "wrapper": {"name": "wrong"}});
    let spec = spec! {
        wrapper: {
            name: "user.name",
        },
    };
    let output = map_to_dto(&source, &spec).unwrap();
    // Paths inside a nested spec are absolute, never relative to a parent rule.
    assert_eq!(output, json!({"wrapper": {"name": "ayaan"}}));
}

#[test]
fn test_empty_spec_maps_to_empty_object() {
    let output = map_to_dto(&json!({"a": 1}), &MappingSpec::new()).unwrap();
    assert_eq!(output, json!({}));
}

// =============================================================================
// The documented end-to-end scenario
// =============================================================================

#[test]
fn test_end_to_end_scenario() {
    let source = json!({
        "user": {
            "name": "ayaan",
            "age": null,
            "skills": ["java", "node", "html"],
        },
        "meta": {"created": "12/12/2012"},
    });

    let spec = spec! {
        name: "user.name",
        age: "user.age" => age_or_ten,
        userSkill: "user.skills" => uppercase_all,
        meta: {
            metaCreated: "meta.created" => to_iso_date,
        },
    };

    let output = map_to_dto(&source, &spec).unwrap();
    assert_eq!(
        output,
        json!({
            "name": "ayaan",
            "age": 10,
            "userSkill": ["JAVA", "NODE", "HTML"],
            "meta": {"metaCreated": "2012-12-12T00:00:00.000Z"},
        }),
    );
}

// =============================================================================
// Output determinism
// =============================================================================

#[test]
fn test_output_field_order_matches_spec_order() {
    let source = json!({"a": 1, "b": 2, "c": 3});
    let spec = spec! { zeta: "c", alpha: "a", mid: "b" };
    let output = map_to_dto(&source, &spec).unwrap();
    let keys: Vec<&String> = output.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_mapping_does_not_mutate_source() {
    let source = json!({"user": {"name": "ayaan"}});
    let before = source.clone();
    let _ = map_to_dto(&source, &spec! { name: "user.name" }).unwrap();
    assert_eq!(source, before);
}

// =============================================================================
// Transform failure propagation
// =============================================================================

#[test]
fn test_transform_failure_aborts_the_whole_call() {
    let source = json!({"user": {"skills": "not-an-array"}});
    let spec = spec! {
        name: "user.name",
        userSkill: "user.skills" => uppercase_all,
    };
    let error = map_to_dto(&source, &spec).unwrap_err();
    match error {
        MapError::Transform { field, .. } => assert_eq!(field, "userSkill"),
        other => panic!("expected a transform failure, got {other:?}"),
    }
}

#[test]
fn test_transform_failure_carries_the_original_error() {
    let source = json!({});
    let spec = spec! {
        value: "missing" => |_raw, _source| Err("boom".into()),
    };
    let error = map_to_dto(&source, &spec).unwrap_err();
    assert!(error.to_string().contains("boom"));
    let inner = std::error::Error::source(&error).expect("inner error is exposed");
    assert_eq!(inner.to_string(), "boom");
}

#[test]
fn test_transform_failure_inside_nested_spec_propagates() {
    let source = json!({"meta": {"created": "not a date"}});
    let spec = spec! {
        meta: {
            metaCreated: "meta.created" => to_iso_date,
        },
    };
    assert!(map_to_dto(&source, &spec).is_err());
}

// =============================================================================
// Depth guard
// =============================================================================

fn deeply_nested_spec(depth: usize) -> MappingSpec {
    let mut spec = spec! { leaf: "a" };
    for _ in 0..depth {
        spec = MappingSpec::new().with_field("inner", Rule::nested(spec));
    }
    spec
}

#[test]
fn test_nesting_beyond_the_limit_is_reported() {
    let spec = deeply_nested_spec(200);
    let error = map_to_dto(&json!({"a": 1}), &spec).unwrap_err();
    assert!(matches!(
        error,
        MapError::SpecificationTooDeep { limit: 128 },
    ));
}

#[test]
fn test_depth_limit_is_configurable() {
    let spec = deeply_nested_spec(200);
    let mapper = Mapper::new().max_depth(300);
    assert!(mapper.map(&json!({"a": 1}), &spec).is_ok());

    let strict = Mapper::new().max_depth(2);
    let error = strict.map(&json!({"a": 1}), &deeply_nested_spec(2)).unwrap_err();
    assert!(matches!(error, MapError::SpecificationTooDeep { limit: 2 }));
}

// =============================================================================
// Custom resolvers
// =============================================================================

/// A conforming resolver with case-insensitive key lookup.
struct CaseInsensitiveResolver;

impl Resolve for CaseInsensitiveResolver {
    fn resolve<'a>(&self, source: &'a Value, path: &Path) -> Option<&'a Value> {
        let mut current = source;
        for segment in path {
            current = match current {
                Value::Object(entries) => entries
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(segment))
                    .map(|(_, value)| value)?,
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index))?,
                _ => return None,
            };
        }
        Some(current)
    }
}

#[test]
fn test_mapper_works_against_any_conforming_resolver() {
    let source = json!({"user": {"name": "ayaan"}});
    let mapper = Mapper::with_resolver(CaseInsensitiveResolver);
    let output = mapper.map(&source, &spec! { name: "User.Name" }).unwrap();
    assert_eq!(output, json!({"name": "ayaan"}));
}

// =============================================================================
// Convenience surface
// =============================================================================

#[test]
fn test_spec_apply_matches_free_function() {
    let source = json!({"a": 1});
    let spec = spec! { a: "a" };
    assert_eq!(spec.apply(&source).unwrap(), map_to_dto(&source, &spec).unwrap());
}

#[test]
fn test_dynamic_spec_roundtrip_through_mapper() {
    let spec = MappingSpec::from_value(&json!({
        "name": "user.name",
        "meta": {"created": {"path": "meta.created"}},
    }))
    .unwrap();
    let source = json!({"user": {"name": "ayaan"}, "meta": {"created": "12/12/2012"}});
    let output = map_to_dto(&source, &spec).unwrap();
    assert_eq!(
        output,
        json!({"name": "ayaan", "meta": {"created": "12/12/2012"}}),
    );
}
