//! The `spec!` macro for declarative specification construction.
//!
//! This module provides the [`spec!`](crate::spec!) macro, which builds a
//! [`MappingSpec`](crate::mapper::MappingSpec) from a literal description
//! of the desired output shape.

/// Builds a [`MappingSpec`](crate::mapper::MappingSpec) declaratively.
///
/// # Syntax
///
/// Each entry is `field: rule`, where the field is an identifier or a
/// string literal and the rule is one of:
///
/// - `"source.path"` — a path rule
/// - `"source.path" => transform` — a transform rule; the transform is
///   any expression implementing
///   `Fn(Option<Value>, &Value) -> TransformResult`
/// - `{ ... }` — a nested specification, recursively in the same syntax
///
/// Entries keep their written order, which is the output field order.
///
/// # Examples
///
/// ## Path and nested rules
///
/// ```
/// use dtomap::mapper::map_to_dto;
/// use dtomap::spec;
/// use serde_json::json;
///
/// let spec = spec! {
///     name: "user.name",
///     meta: {
///         created: "meta.created",
///     },
/// };
///
/// let source = json!({"user": {"name": "ayaan"}, "meta": {"created": "12/12/2012"}});
/// let output = map_to_dto(&source, &spec).unwrap();
/// assert_eq!(
///     output,
///     json!({"name": "ayaan", "meta": {"created": "12/12/2012"}}),
/// );
/// ```
///
/// ## Transform rules
///
/// ```
/// use dtomap::mapper::map_to_dto;
/// use dtomap::spec;
/// use serde_json::json;
///
/// let spec = spec! {
///     age: "user.age" => |raw, _source| {
///         Ok(match raw {
///             Some(value) if !value.is_null() => value,
///             _ => json!(10),
///         })
///     },
/// };
///
/// let output = map_to_dto(&json!({"user": {"age": null}}), &spec).unwrap();
/// assert_eq!(output, json!({"age": 10}));
/// ```
///
/// ## String-literal field names
///
/// ```
/// use dtomap::spec;
///
/// let spec = spec! {
///     "full-name": "user.name",
/// };
/// assert_eq!(spec.field_names().collect::<Vec<_>>(), ["full-name"]);
/// ```
#[macro_export]
macro_rules! spec {
    // Internal: no entries remain.
    (@entries $spec:ident;) => {};
    // Internal: a nested specification.
    (@entries $spec:ident; $field:tt : { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $spec.insert(
            $crate::spec!(@field $field),
            $crate::mapper::Rule::nested($crate::spec! { $($inner)* }),
        );
        $crate::spec!(@entries $spec; $($($rest)*)?);
    };
    // Internal: a path with a transform.
    (@entries $spec:ident; $field:tt : $path:literal => $transform:expr $(, $($rest:tt)*)?) => {
        $spec.insert(
            $crate::spec!(@field $field),
            $crate::mapper::Rule::transform($path, $transform),
        );
        $crate::spec!(@entries $spec; $($($rest)*)?);
    };
    // Internal: a bare path.
    (@entries $spec:ident; $field:tt : $path:literal $(, $($rest:tt)*)?) => {
        $spec.insert(
            $crate::spec!(@field $field),
            $crate::mapper::Rule::path($path),
        );
        $crate::spec!(@entries $spec; $($($rest)*)?);
    };
    // Internal: field names may be identifiers or string literals.
    (@field $field:ident) => { stringify!($field) };
    (@field $field:literal) => { $field };

    // An empty specification.
    () => { $crate::mapper::MappingSpec::new() };
    // One or more entries.
    ($($entries:tt)+) => {{
        let mut spec = $crate::mapper::MappingSpec::new();
        $crate::spec!(@entries spec; $($entries)+);
        spec
    }};
}
