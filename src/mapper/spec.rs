//! The [`MappingSpec`] type: an ordered field-to-rule mapping.

use serde_json::{Map, Value};

use crate::resolve::Path;

use super::error::{MapError, SpecError};
use super::map::map_to_dto;
use super::rule::Rule;

/// A mapping specification: the caller-authored tree describing the
/// desired output shape and how each field is derived.
///
/// Field order is insertion order and determines output field order.
/// Replacing an existing field keeps its position; the last rule wins.
///
/// Specifications are plain values: cheap to clone (transforms are
/// shared), safe to send across threads, and never retained by the
/// mapper beyond a single call.
///
/// # Examples
///
/// Built with the chaining builder:
///
/// ```
/// use dtomap::mapper::{MappingSpec, Rule, map_to_dto};
/// use serde_json::json;
///
/// let spec = MappingSpec::new()
///     .with_field("name", "user.name")
///     .with_field("firstSkill", "user.skills[0]");
///
/// let source = json!({"user": {"name": "ayaan", "skills": ["java"]}});
/// let output = map_to_dto(&source, &spec).unwrap();
/// assert_eq!(output, json!({"name": "ayaan", "firstSkill": "java"}));
/// ```
///
/// Parsed from a dynamic JSON description:
///
/// ```
/// use dtomap::mapper::MappingSpec;
/// use serde_json::json;
///
/// let spec = MappingSpec::from_value(&json!({
///     "name": "user.name",
///     "meta": {"created": {"path": "meta.created"}},
/// })).unwrap();
/// assert_eq!(spec.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MappingSpec {
    fields: Vec<(String, Rule)>,
}

impl MappingSpec {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds or replaces a field, returning the specification for chaining.
    ///
    /// Accepts anything convertible into a [`Rule`]: path strings,
    /// [`Path`](crate::resolve::Path) values, nested specifications, or
    /// rules built explicitly.
    pub fn with_field(mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.insert(name, rule);
        self
    }

    /// Adds or replaces a field in place.
    ///
    /// Returns the previous rule when the field already existed; the
    /// field keeps its original position in that case.
    pub fn insert(&mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Option<Rule> {
        let name = name.into();
        let rule = rule.into();
        if let Some(existing) = self.fields.iter_mut().find(|(field, _)| *field == name) {
            return Some(std::mem::replace(&mut existing.1, rule));
        }
        self.fields.push((name, rule));
        None
    }

    /// Returns the rule for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rule)| rule)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the specification has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over `(field, rule)` entries in specification
    /// order.
    pub fn iter(&self) -> Fields<'_> {
        Fields {
            inner: self.fields.iter(),
        }
    }

    /// Returns an iterator over the field names in specification order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(field, _)| field.as_str())
    }

    /// Applies this specification to `source` with the default resolver.
    ///
    /// Convenience for [`map_to_dto`].
    pub fn apply(&self, source: &Value) -> Result<Value, MapError> {
        map_to_dto(source, self)
    }

    /// Builds a specification from a dynamic JSON description.
    ///
    /// Strings become path rules; objects carrying a string `"path"` key
    /// become path rules (only the `"path"` key of such an object is
    /// read — transform functions cannot be expressed in JSON and attach
    /// through the typed API instead); any other object recurses as a
    /// nested specification. Anything else is a specification authoring
    /// error and fails fast with [`SpecError::MalformedRule`] naming the
    /// offending field.
    ///
    /// # Errors
    ///
    /// [`SpecError::NotAnObject`] when `value` is not an object;
    /// [`SpecError::MalformedRule`] for any rule entry that is a number,
    /// boolean, `null`, array, or an object whose `"path"` is not a
    /// string.
    ///
    /// # Examples
    ///
    /// ```
    /// use dtomap::mapper::{MappingSpec, SpecError};
    /// use serde_json::json;
    ///
    /// let error = MappingSpec::from_value(&json!({"age": 3})).unwrap_err();
    /// assert!(matches!(error, SpecError::MalformedRule { .. }));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, SpecError> {
        match value {
            Value::Object(entries) => Self::from_entries(entries, ""),
            other => Err(SpecError::NotAnObject {
                found: describe(other),
            }),
        }
    }

    fn from_entries(entries: &Map<String, Value>, prefix: &str) -> Result<Self, SpecError> {
        let mut spec = Self::new();
        for (field, entry) in entries {
            let qualified = if prefix.is_empty() {
                field.clone()
            } else {
                format!("{prefix}.{field}")
            };
            let rule = match entry {
                Value::String(path) => Rule::path(path.as_str()),
                Value::Object(rule_object) => match rule_object.get("path") {
                    Some(Value::String(path)) => Rule::Transform {
                        path: Path::parse(path),
                        transform: None,
                    },
                    Some(other) => {
                        return Err(SpecError::MalformedRule {
                            field: qualified,
                            found: format!("a path object whose path is {}", describe(other)),
                        });
                    }
                    None => Rule::nested(Self::from_entries(rule_object, &qualified)?),
                },
                other => {
                    return Err(SpecError::MalformedRule {
                        field: qualified,
                        found: describe(other),
                    });
                }
            };
            spec.insert(field.clone(), rule);
        }
        Ok(spec)
    }
}

impl<N, R> FromIterator<(N, R)> for MappingSpec
where
    N: Into<String>,
    R: Into<Rule>,
{
    fn from_iter<I: IntoIterator<Item = (N, R)>>(entries: I) -> Self {
        let mut spec = Self::new();
        for (name, rule) in entries {
            spec.insert(name, rule);
        }
        spec
    }
}

impl TryFrom<&Value> for MappingSpec {
    type Error = SpecError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl<'a> IntoIterator for &'a MappingSpec {
    type Item = (&'a str, &'a Rule);
    type IntoIter = Fields<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(field, rule)` entries of a [`MappingSpec`].
pub struct Fields<'a> {
    inner: std::slice::Iter<'a, (String, Rule)>,
}

impl<'a> Iterator for Fields<'a> {
    type Item = (&'a str, &'a Rule);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(field, rule)| (field.as_str(), rule))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Fields<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Describes a spec fragment for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => format!("boolean `{flag}`"),
        Value::Number(number) => format!("number `{number}`"),
        Value::String(text) => format!("string {text:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}

static_assertions::assert_impl_all!(MappingSpec: Send, Sync, Clone);
