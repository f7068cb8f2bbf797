//! Resolution of a [`Path`] against a source value.

use serde_json::Value;

use super::path::Path;

/// The resolution contract the mapper consumes.
///
/// The default implementation is [`PathResolver`]; any conforming
/// implementation can stand in for it, so path lookup strategies (for
/// example case-insensitive keys, or lookup in a side table) can be
/// swapped without touching the mapper.
///
/// Absence is `None`; a value that is present but `null` is
/// `Some(&Value::Null)`. The distinction matters: only absence triggers
/// defaults downstream.
pub trait Resolve {
    /// Resolves `path` against `source`, returning `None` when any step
    /// of the traversal has nothing to descend into.
    fn resolve<'a>(&self, source: &'a Value, path: &Path) -> Option<&'a Value>;
}

/// The default dot/bracket path resolver.
///
/// # Examples
///
/// ```
/// use dtomap::resolve::{Path, PathResolver, Resolve};
/// use serde_json::json;
///
/// let source = json!({"user": {"skills": ["java", "node"]}});
/// let resolver = PathResolver;
///
/// assert_eq!(
///     resolver.resolve(&source, &Path::parse("user.skills[1]")),
///     Some(&json!("node")),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathResolver;

impl Resolve for PathResolver {
    fn resolve<'a>(&self, source: &'a Value, path: &Path) -> Option<&'a Value> {
        resolve(source, path)
    }
}

/// Resolves `path` against `source` one segment at a time.
///
/// Per step, objects are queried by explicit own-key lookup, sequences by
/// parsing the segment as a numeric index; `null` and scalar values stop
/// the traversal. An empty path resolves to `None`.
///
/// The final value is returned as-is: a present `null` yields
/// `Some(&Value::Null)`, while a missing key yields `None`.
///
/// Pure function: no transform, no mutation, no side effects.
///
/// # Examples
///
/// ```
/// use dtomap::resolve::{Path, resolve};
/// use serde_json::{Value, json};
///
/// let source = json!({"a": {"b": [{"c": 3}]}, "x": null});
///
/// assert_eq!(resolve(&source, &Path::parse("a.b[0].c")), Some(&json!(3)));
/// assert_eq!(resolve(&source, &Path::parse("a.b[1].c")), None);
///
/// // A present `null` is not absence.
/// assert_eq!(resolve(&source, &Path::parse("x")), Some(&Value::Null));
/// assert_eq!(resolve(&source, &Path::parse("y")), None);
/// ```
pub fn resolve<'a>(source: &'a Value, path: &Path) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut current = source;
    for segment in path {
        current = descend(current, segment)?;
    }
    Some(current)
}

/// Resolves `path` against `source`, falling back to `default` when the
/// path matches nothing.
///
/// Only absence falls back: a present `null` is returned, not replaced.
///
/// # Examples
///
/// ```
/// use dtomap::resolve::{Path, resolve_or};
/// use serde_json::{Value, json};
///
/// let source = json!({"a": {"b": [{"c": 3}]}});
/// let missing = json!("missing");
///
/// assert_eq!(resolve_or(&source, &Path::parse("a.b[0].c"), &missing), &json!(3));
/// assert_eq!(resolve_or(&source, &Path::parse("a.b[1].c"), &missing), &missing);
///
/// let nope = json!("nope");
/// assert_eq!(resolve_or(&Value::Null, &Path::parse("a.b"), &nope), &nope);
/// ```
pub fn resolve_or<'a>(source: &'a Value, path: &Path, default: &'a Value) -> &'a Value {
    resolve(source, path).unwrap_or(default)
}

/// One traversal step. Only structured values can be descended into.
fn descend<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(entries) => entries.get(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    }
}
