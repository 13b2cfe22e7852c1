//! Syntactic completion contexts for C#.
//!
//! Decides, from tree shape alone, which grammatical positions a caret
//! occupies so that a completion host can pick the providers to run. The
//! crate never produces completion items and never needs semantic
//! information.
//!
//! This crate provides:
//! - `navigator` - Ancestor search and token walks over a `SyntaxTree`
//! - `rules` - Independent context predicates over a target token
//! - `accessor` - Lookup of accessors already declared in an accessor list
//! - `shape` - Slot accessors shared by the rules
//! - `ContextQuery` - Caret resolution plus every rule behind one value

pub mod accessor;
pub use accessor::{AccessorKind, AccessorOwner};

pub mod navigator;
pub use navigator::TokenFilter;

pub mod query;
pub use query::{ContextQuery, SyntaxContexts};

pub mod rules;

pub mod shape;

#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod fixtures;
