//! Syntactic completion-context classification for C#.
//!
//! Given a parsed syntax tree and a caret position, answers "what may be
//! typed here" questions (statement start, accessor list, preprocessor
//! condition, named argument, ...) by inspecting tokens and ancestors only.
//!
//! - [`syntax`] - tree model and builder (`csq-syntax`)
//! - [`context`] - navigator, rules and the [`ContextQuery`] facade (`csq-context`)
//! - [`tracing_config`] - opt-in subscriber for debugging rule decisions

pub use csq_context as context;
pub use csq_syntax as syntax;

pub use csq_context::{AccessorKind, AccessorOwner, ContextQuery, SyntaxContexts, TokenFilter};
pub use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree, TextSpan, TreeBuildError, TreeBuilder};

pub mod tracing_config;

/// Every context the caret at `position` occupies in `tree`.
pub fn classify(tree: &SyntaxTree, position: u32) -> SyntaxContexts {
    let _span = tracing::debug_span!("classify", position).entered();
    ContextQuery::new(tree, position).classify()
}
