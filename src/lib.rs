//! # dtomap
//!
//! A declarative DTO mapping library for Rust providing path-based
//! resolution, value transforms, and nested mapping specifications.
//!
//! ## Overview
//!
//! This library builds output objects from nested source data by walking a
//! caller-authored mapping specification. It includes:
//!
//! - **Path Resolution**: deep access into [`serde_json::Value`] trees by
//!   dot/bracket paths (`"user.skills[0]"`), with an explicit
//!   absence-vs-`null` distinction
//! - **Mapping Rules**: path rules, transform rules, and nested
//!   sub-specifications as an explicit sum type
//! - **The DTO Mapper**: a depth-first, all-or-nothing recursive descent
//!   that mirrors the specification's shape in its output
//! - **The `spec!` macro**: declarative specification construction
//!
//! ## Feature Flags
//!
//! - `resolve`: Path parsing and resolution
//! - `mapper`: The DTO mapper (implies `resolve`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use dtomap::prelude::*;
//! use serde_json::json;
//!
//! let source = json!({
//!     "user": {"name": "ayaan", "skills": ["java", "node", "html"]}
//! });
//!
//! let spec = spec! {
//!     name: "user.name",
//!     firstSkill: "user.skills[0]",
//! };
//!
//! let output = map_to_dto(&source, &spec).unwrap();
//! assert_eq!(output, json!({"name": "ayaan", "firstSkill": "java"}));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use dtomap::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "resolve")]
    pub use crate::resolve::*;

    #[cfg(feature = "mapper")]
    pub use crate::mapper::*;

    #[cfg(feature = "mapper")]
    pub use crate::spec;
}

#[cfg(feature = "resolve")]
pub mod resolve;

#[cfg(feature = "mapper")]
pub mod mapper;
