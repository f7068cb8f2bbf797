//! Error types for specification authoring and mapping.
//!
//! Path misses are not errors: the resolver reports absence with `None`
//! and the mapper writes the default, silently by design. The types here
//! cover the two failure classes that remain: authoring errors in dynamic
//! specifications, and failures raised by caller-supplied transforms.

use std::error::Error;
use std::fmt;

/// Errors raised while building a [`MappingSpec`](super::MappingSpec)
/// from a dynamic JSON description.
///
/// These are caller bugs in specification authoring, and are reported
/// eagerly with the offending field and fragment rather than silently
/// producing absent output values.
///
/// # Examples
///
/// ```rust
/// use dtomap::mapper::SpecError;
///
/// let error = SpecError::MalformedRule {
///     field: "user.age".to_string(),
///     found: "number `3`".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "malformed rule for field `user.age`: expected a path string, \
///      a path object, or a nested specification, found number `3`",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// A rule entry that is neither a path string, an object carrying a
    /// string `"path"`, nor a nested specification object.
    MalformedRule {
        /// Dotted name of the offending field.
        field: String,
        /// Description of the rejected fragment.
        found: String,
    },
    /// The top level of a dynamic specification was not an object.
    NotAnObject {
        /// Description of the rejected value.
        found: String,
    },
}

impl fmt::Display for SpecError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRule { field, found } => write!(
                formatter,
                "malformed rule for field `{field}`: expected a path string, \
                 a path object, or a nested specification, found {found}",
            ),
            Self::NotAnObject { found } => write!(
                formatter,
                "a mapping specification must be an object, found {found}",
            ),
        }
    }
}

impl Error for SpecError {}

/// Errors raised while applying a [`MappingSpec`](super::MappingSpec) to
/// a source value.
///
/// Mapping is all-or-nothing: the first error aborts the whole call and
/// no partial output object is returned.
#[derive(Debug)]
pub enum MapError {
    /// A caller-supplied transform failed.
    ///
    /// The transform's error is carried unchanged — no retry, no
    /// suppression, no reinterpretation — and is exposed through
    /// [`Error::source`]. The field name identifies which entry failed.
    Transform {
        /// Output field whose transform failed.
        field: String,
        /// The transform's error, untouched.
        source: Box<dyn Error + Send + Sync>,
    },
    /// Specification nesting exceeded the mapper's depth limit.
    SpecificationTooDeep {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform { field, source } => {
                write!(formatter, "transform for field `{field}` failed: {source}")
            }
            Self::SpecificationTooDeep { limit } => write!(
                formatter,
                "specification nesting exceeded the depth limit of {limit}",
            ),
        }
    }
}

impl Error for MapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transform { source, .. } => {
                let source: &(dyn Error + 'static) = source.as_ref();
                Some(source)
            }
            Self::SpecificationTooDeep { .. } => None,
        }
    }
}
