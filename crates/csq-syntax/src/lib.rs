//! C# syntax tree model consumed by the completion-context classifier.
//!
//! This crate provides:
//! - `SyntaxKind` - Closed set of token and node kinds with category checks
//! - `SyntaxTree` - Immutable arena of nodes and tokens with parent links
//! - `TreeBuilder` - Event-driven construction used by parser adapters
//! - `TextSpan` - Source ranges for caret containment tests
//! - Limits shared by construction and traversal

pub mod kind;
pub use kind::SyntaxKind;

pub mod node;
pub use node::{ExtendedNodeInfo, Node, NodeFlags, NodeIndex, NodeList, TokenData};

pub mod span;
pub use span::TextSpan;

pub mod tree;
pub use tree::SyntaxTree;

pub mod builder;
pub use builder::{TreeBuildError, TreeBuilder};

// Centralized limits and thresholds
pub mod limits;
