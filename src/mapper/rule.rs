//! The [`Rule`] sum type: one entry of a mapping specification.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::resolve::Path;

use super::spec::MappingSpec;

/// Outcome of a transform: the refined value, or an arbitrary caller error.
pub type TransformResult = Result<Value, Box<dyn std::error::Error + Send + Sync>>;

/// A caller-supplied transform refining a resolved raw value.
///
/// The first argument is the resolved raw value — `None` when the path
/// matched nothing, so absence is still observable. The second argument is
/// the complete top-level source object, so a transform may consult
/// sibling data beyond the field resolved for it.
pub type Transform = Arc<dyn Fn(Option<Value>, &Value) -> TransformResult + Send + Sync>;

/// One entry of a [`MappingSpec`].
///
/// A rule is exactly one of three variants, discriminated by the type
/// system rather than by runtime shape checks.
///
/// # Examples
///
/// ```
/// use dtomap::mapper::{MappingSpec, Rule};
/// use serde_json::json;
///
/// let copy = Rule::path("user.name");
/// let refined = Rule::transform("user.age", |raw, _source| {
///     Ok(raw.unwrap_or(json!(0)))
/// });
/// let nested = Rule::nested(MappingSpec::new().with_field("created", "meta.created"));
/// # let _ = (copy, refined, nested);
/// ```
#[derive(Clone)]
pub enum Rule {
    /// Copy the value at a source path.
    Path(Path),
    /// Resolve a source path, then refine the raw value with an optional
    /// transform. Without a transform this behaves exactly like
    /// [`Rule::Path`].
    Transform {
        /// The source path to resolve.
        path: Path,
        /// The refining function; identity behavior when absent.
        transform: Option<Transform>,
    },
    /// Build a nested output object from a sub-specification. The
    /// sub-specification resolves against the same top-level source as its
    /// parent, never against a partial result.
    Nested(MappingSpec),
}

impl Rule {
    /// Creates a path rule.
    pub fn path(path: impl Into<Path>) -> Self {
        Self::Path(path.into())
    }

    /// Creates a transform rule.
    pub fn transform<F>(path: impl Into<Path>, transform: F) -> Self
    where
        F: Fn(Option<Value>, &Value) -> TransformResult + Send + Sync + 'static,
    {
        Self::Transform {
            path: path.into(),
            transform: Some(Arc::new(transform)),
        }
    }

    /// Creates a nested rule from a sub-specification.
    pub fn nested(spec: MappingSpec) -> Self {
        Self::Nested(spec)
    }
}

impl From<&str> for Rule {
    fn from(path: &str) -> Self {
        Self::path(path)
    }
}

impl From<String> for Rule {
    fn from(path: String) -> Self {
        Self::path(path)
    }
}

impl From<Path> for Rule {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

impl From<MappingSpec> for Rule {
    fn from(spec: MappingSpec) -> Self {
        Self::Nested(spec)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => formatter.debug_tuple("Path").field(path).finish(),
            Self::Transform { path, transform } => formatter
                .debug_struct("Transform")
                .field("path", path)
                .field("transform", &transform.as_ref().map(|_| "<fn>"))
                .finish(),
            Self::Nested(spec) => formatter.debug_tuple("Nested").field(spec).finish(),
        }
    }
}

static_assertions::assert_impl_all!(Rule: Send, Sync, Clone);
