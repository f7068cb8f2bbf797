//! The declarative DTO mapper.
//!
//! A [`MappingSpec`] describes the desired output shape: each entry names
//! an output field and a [`Rule`] for deriving its value from the source.
//! Applying a specification walks it depth-first and builds a fresh output
//! object mirroring the specification's shape exactly, in specification
//! order.
//!
//! # Overview
//!
//! The module provides the following pieces:
//!
//! - [`Rule`]: path rules, transform rules, and nested sub-specifications
//! - [`MappingSpec`]: an ordered field-to-rule mapping with a chaining
//!   builder and a validating parser for dynamic (JSON-shaped)
//!   specifications
//! - [`Mapper`] and [`map_to_dto`]: the recursive descent itself, generic
//!   over any [`Resolve`](crate::resolve::Resolve) implementation
//! - [`spec!`](crate::spec!): declarative specification construction
//! - [`MapError`] and [`SpecError`]: the error taxonomy
//!
//! Nested rules always resolve against the original top-level source,
//! never against a partial result. Mapping is all-or-nothing: the first
//! failing transform aborts the whole call.
//!
//! # Examples
//!
//! ```
//! use dtomap::mapper::map_to_dto;
//! use dtomap::spec;
//! use serde_json::json;
//!
//! let source = json!({
//!     "user": {"name": "ayaan", "age": null},
//!     "meta": {"created": "12/12/2012"}
//! });
//!
//! let spec = spec! {
//!     name: "user.name",
//!     age: "user.age" => |raw, _source| {
//!         Ok(match raw {
//!             Some(value) if !value.is_null() => value,
//!             _ => json!(10),
//!         })
//!     },
//!     meta: {
//!         created: "meta.created",
//!     },
//! };
//!
//! let output = map_to_dto(&source, &spec).unwrap();
//! assert_eq!(
//!     output,
//!     json!({"name": "ayaan", "age": 10, "meta": {"created": "12/12/2012"}}),
//! );
//! ```

mod error;
mod map;
mod rule;
mod spec;
mod spec_macro;

pub use error::{MapError, SpecError};
pub use map::{DEFAULT_MAX_DEPTH, Mapper, map_to_dto};
pub use rule::{Rule, Transform, TransformResult};
pub use spec::{Fields, MappingSpec};
