//! The recursive descent that applies a specification to a source value.

use serde_json::{Map, Value};

use crate::resolve::{PathResolver, Resolve};

use super::error::MapError;
use super::rule::Rule;
use super::spec::MappingSpec;

/// Default recursion depth limit for nested specifications.
///
/// Owned specification trees cannot be cyclic, so the limit only bounds
/// pathologically deep nesting; exceeding it reports
/// [`MapError::SpecificationTooDeep`] instead of overflowing the stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Applies mapping specifications to source values.
///
/// A mapper is a plain value carrying a resolver and a depth limit; it
/// holds no state between calls and retains neither sources nor
/// specifications. Calls are synchronous and side-effect free (assuming
/// transforms are), so sharing a mapper across threads needs no locking.
///
/// The resolver is a type parameter so the mapper works against any
/// [`Resolve`] implementation; [`PathResolver`] is the default.
///
/// # Examples
///
/// ```
/// use dtomap::mapper::Mapper;
/// use dtomap::spec;
/// use serde_json::json;
///
/// let mapper = Mapper::new();
/// let spec = spec! { name: "user.name" };
/// let source = json!({"user": {"name": "ayaan"}});
///
/// assert_eq!(
///     mapper.map(&source, &spec).unwrap(),
///     json!({"name": "ayaan"}),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Mapper<R = PathResolver> {
    resolver: R,
    max_depth: usize,
}

impl Mapper {
    /// Creates a mapper using the default [`PathResolver`].
    pub fn new() -> Self {
        Self::with_resolver(PathResolver)
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resolve> Mapper<R> {
    /// Creates a mapper over a custom resolver.
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replaces the recursion depth limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use dtomap::mapper::Mapper;
    ///
    /// let mapper = Mapper::new().max_depth(16);
    /// # let _ = mapper;
    /// ```
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Applies `spec` to `source`, building a fresh output object whose
    /// shape mirrors the specification exactly.
    ///
    /// Depth-first over the specification, in specification order. Per
    /// entry:
    ///
    /// - a path rule resolves and copies the source value; absence
    ///   becomes `null` in the output (the key is always written)
    /// - a transform rule resolves, then hands the raw value (absence
    ///   included, as `None`) and the whole source to the transform
    /// - a nested rule recurses against the same top-level source
    ///
    /// A resolved `null` passes through as `null`; only absence yields
    /// the default.
    ///
    /// # Errors
    ///
    /// All-or-nothing: the first transform failure aborts the whole call
    /// with [`MapError::Transform`], carrying the transform's error
    /// unchanged. Nesting beyond the depth limit reports
    /// [`MapError::SpecificationTooDeep`].
    pub fn map(&self, source: &Value, spec: &MappingSpec) -> Result<Value, MapError> {
        self.map_at(source, spec, 0)
    }

    fn map_at(&self, source: &Value, spec: &MappingSpec, depth: usize) -> Result<Value, MapError> {
        if depth >= self.max_depth {
            return Err(MapError::SpecificationTooDeep {
                limit: self.max_depth,
            });
        }
        let mut output = Map::new();
        for (field, rule) in spec {
            let value = self.field_value(source, field, rule, depth)?;
            output.insert(field.to_string(), value);
        }
        Ok(Value::Object(output))
    }

    fn field_value(
        &self,
        source: &Value,
        field: &str,
        rule: &Rule,
        depth: usize,
    ) -> Result<Value, MapError> {
        match rule {
            Rule::Path(path) => Ok(self
                .resolver
                .resolve(source, path)
                .cloned()
                .unwrap_or(Value::Null)),
            Rule::Transform { path, transform } => {
                let raw = self.resolver.resolve(source, path).cloned();
                match transform {
                    Some(function) => {
                        function(raw, source).map_err(|error| MapError::Transform {
                            field: field.to_string(),
                            source: error,
                        })
                    }
                    None => Ok(raw.unwrap_or(Value::Null)),
                }
            }
            Rule::Nested(inner) => self.map_at(source, inner, depth + 1),
        }
    }
}

/// Applies `spec` to `source` with the default path resolver.
///
/// The free-function form of [`Mapper::map`].
///
/// # Errors
///
/// See [`Mapper::map`].
///
/// # Examples
///
/// ```
/// use dtomap::mapper::map_to_dto;
/// use dtomap::spec;
/// use serde_json::json;
///
/// let source = json!({"user": {"name": "ayaan"}, "extra": true});
/// let output = map_to_dto(&source, &spec! { name: "user.name" }).unwrap();
/// assert_eq!(output, json!({"name": "ayaan"}));
/// ```
pub fn map_to_dto(source: &Value, spec: &MappingSpec) -> Result<Value, MapError> {
    Mapper::new().map(source, spec)
}

static_assertions::assert_impl_all!(Mapper: Send, Sync);
