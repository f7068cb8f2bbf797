//! Deep path resolution into nested JSON values.
//!
//! This module provides the leaf capability the DTO mapper is built on:
//! extracting a value from an arbitrarily nested [`serde_json::Value`] by
//! a dot/bracket path, with a caller-supplied default for absent values.
//!
//! # Overview
//!
//! The module provides the following utilities:
//!
//! - [`Path`]: a parsed access path (`"a.b[0].c"` and `"a.b.0.c"` are
//!   equivalent)
//! - [`resolve`]: deep access returning `Option<&Value>` — `None` for
//!   absence, `Some(&Value::Null)` for a present `null`
//! - [`resolve_or`]: deep access with a default value
//! - [`Resolve`]: the trait seam the mapper consumes, so any conforming
//!   resolver can stand in for the default one
//! - [`PathResolver`]: the default [`Resolve`] implementation
//!
//! # Examples
//!
//! ```
//! use dtomap::resolve::{resolve, resolve_or, Path};
//! use serde_json::json;
//!
//! let source = json!({"a": {"b": [{"c": 3}]}});
//!
//! assert_eq!(resolve(&source, &Path::parse("a.b[0].c")), Some(&json!(3)));
//! assert_eq!(resolve(&source, &Path::parse("a.b[1].c")), None);
//!
//! let missing = json!("missing");
//! assert_eq!(resolve_or(&source, &Path::parse("a.b[1].c"), &missing), &missing);
//! ```

mod path;
mod resolver;

pub use path::Path;
pub use resolver::{PathResolver, Resolve, resolve, resolve_or};
