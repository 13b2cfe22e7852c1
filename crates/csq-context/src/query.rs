//! Per-request entry point for completion providers.
//!
//! A `ContextQuery` resolves the caret to the token the rules inspect (the
//! target token) once, then answers rule questions about it. It borrows the
//! tree and holds no mutable state, so any number of queries can run over
//! one tree at the same time.

use crate::accessor::{AccessorKind, AccessorOwner};
use crate::navigator::{TokenFilter, find_token_on_left_of_position, previous_token_if_touching_word};
use crate::rules;
use bitflags::bitflags;
use csq_syntax::{NodeIndex, SyntaxTree};

bitflags! {
    /// Every context a target token occupies. Contexts overlap: `}` closing
    /// an `if` body inside a switch section is both a statement start and a
    /// switch label position.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SyntaxContexts: u32 {
        const STATEMENT_START = 1 << 0;
        const GLOBAL_STATEMENT_START = 1 << 1;
        const AFTER_POSSIBLE_CAST = 1 << 2;
        const QUERY_CLAUSE_END = 1 << 3;
        const PRE_PROCESSOR_EXPRESSION = 1 << 4;
        const ORDER_BY_DIRECTION = 1 << 5;
        const SWITCH_LABEL = 1 << 6;
        const PARAMETER_ARGUMENT = 1 << 7;
        /// The next argument must be written `name: value`.
        const MANDATORY_NAMED_PARAMETER = 1 << 8;
        const PROPERTY_ACCESSOR = 1 << 9;
        const INDEXER_ACCESSOR = 1 << 10;
        const EVENT_ACCESSOR = 1 << 11;
        const TYPE_PARAMETER_VARIANCE = 1 << 12;
        const UNSAFE = 1 << 13;
        const AFTER_YIELD = 1 << 14;
        const UNARY_OPERATOR = 1 << 15;
        const CREF_PARAMETER_MODIFIER = 1 << 16;
        const USING_OR_EXTERN_KEYWORD = 1 << 17;
        const USING_DIRECTIVE_KEYWORD = 1 << 18;
        const USING_STATIC_KEYWORD = 1 << 19;
    }
}

/// Caret-scoped view of a tree.
#[derive(Clone, Copy, Debug)]
pub struct ContextQuery<'a> {
    tree: &'a SyntaxTree,
    position: u32,
    target_token: Option<NodeIndex>,
}

impl<'a> ContextQuery<'a> {
    /// Tokens the caret may resolve to. Skipped tokens, directives and doc
    /// comments are included so that `#if A || |` and `<see cref="M(|"/>`
    /// resolve to a token inside the trivia.
    pub const TARGET_FILTER: TokenFilter = TokenFilter::DEFAULT
        .with_skipped()
        .with_directives()
        .with_documentation_comments();

    pub fn new(tree: &'a SyntaxTree, position: u32) -> ContextQuery<'a> {
        let target_token = find_token_on_left_of_position(tree, position, Self::TARGET_FILTER)
            .and_then(|token| previous_token_if_touching_word(tree, token, position));
        tracing::trace!(
            position,
            target = ?target_token.map(|token| tree.kind(token)),
            "resolved completion target"
        );
        ContextQuery {
            tree,
            position,
            target_token,
        }
    }

    #[inline]
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Token left of the caret, or the one before it when the caret is
    /// inside a word being typed. `None` at the start of the file.
    #[inline]
    pub fn target_token(&self) -> Option<NodeIndex> {
        self.target_token
    }

    #[inline]
    fn check(&self, rule: impl FnOnce(&SyntaxTree, NodeIndex) -> bool) -> bool {
        self.target_token
            .is_some_and(|token| rule(self.tree, token))
    }

    pub fn is_beginning_of_statement_context(&self) -> bool {
        self.check(rules::is_beginning_of_statement_context)
    }

    pub fn is_beginning_of_global_statement_context(&self) -> bool {
        self.check(rules::is_beginning_of_global_statement_context)
    }

    pub fn is_after_possible_cast(&self) -> bool {
        self.check(rules::is_after_possible_cast)
    }

    pub fn is_last_token_of_query_clause(&self) -> bool {
        self.check(rules::is_last_token_of_query_clause)
    }

    pub fn is_pre_processor_expression_context(&self) -> bool {
        self.check(rules::is_pre_processor_expression_context)
    }

    pub fn is_order_by_direction_context(&self) -> bool {
        self.check(rules::is_order_by_direction_context)
    }

    pub fn is_switch_label_context(&self) -> bool {
        self.check(rules::is_switch_label_context)
    }

    pub fn is_constructor_or_method_parameter_argument_context(&self) -> bool {
        self.check(rules::is_constructor_or_method_parameter_argument_context)
    }

    pub fn is_mandatory_named_parameter_position(&self) -> bool {
        self.check(rules::is_mandatory_named_parameter_position)
    }

    pub fn is_accessor_declaration_context(
        &self,
        owner: AccessorOwner,
        kind: Option<AccessorKind>,
    ) -> bool {
        self.check(|tree, token| {
            rules::is_accessor_declaration_context(tree, token, self.position, owner, kind)
        })
    }

    pub fn is_type_parameter_variance_context(&self) -> bool {
        self.check(rules::is_type_parameter_variance_context)
    }

    pub fn is_unsafe_context(&self) -> bool {
        self.check(rules::is_unsafe_context)
    }

    pub fn is_after_yield_keyword(&self) -> bool {
        self.check(rules::is_after_yield_keyword)
    }

    pub fn is_unary_operator_context(&self) -> bool {
        self.check(rules::is_unary_operator_context)
    }

    pub fn is_xml_cref_parameter_modifier_context(&self) -> bool {
        self.check(rules::is_xml_cref_parameter_modifier_context)
    }

    pub fn is_using_or_extern_keyword(&self) -> bool {
        self.check(rules::is_using_or_extern_keyword)
    }

    pub fn is_using_keyword_in_using_directive(&self) -> bool {
        self.check(rules::is_using_keyword_in_using_directive)
    }

    pub fn is_static_keyword_in_using_directive(&self) -> bool {
        self.check(rules::is_static_keyword_in_using_directive)
    }

    /// Evaluates every rule once. Accessor contexts are reported per owner
    /// without a target accessor kind.
    pub fn classify(&self) -> SyntaxContexts {
        let checks: [(SyntaxContexts, bool); 20] = [
            (SyntaxContexts::STATEMENT_START, self.is_beginning_of_statement_context()),
            (
                SyntaxContexts::GLOBAL_STATEMENT_START,
                self.is_beginning_of_global_statement_context(),
            ),
            (SyntaxContexts::AFTER_POSSIBLE_CAST, self.is_after_possible_cast()),
            (SyntaxContexts::QUERY_CLAUSE_END, self.is_last_token_of_query_clause()),
            (
                SyntaxContexts::PRE_PROCESSOR_EXPRESSION,
                self.is_pre_processor_expression_context(),
            ),
            (SyntaxContexts::ORDER_BY_DIRECTION, self.is_order_by_direction_context()),
            (SyntaxContexts::SWITCH_LABEL, self.is_switch_label_context()),
            (
                SyntaxContexts::PARAMETER_ARGUMENT,
                self.is_constructor_or_method_parameter_argument_context(),
            ),
            (
                SyntaxContexts::MANDATORY_NAMED_PARAMETER,
                self.is_mandatory_named_parameter_position(),
            ),
            (
                SyntaxContexts::PROPERTY_ACCESSOR,
                self.is_accessor_declaration_context(AccessorOwner::Property, None),
            ),
            (
                SyntaxContexts::INDEXER_ACCESSOR,
                self.is_accessor_declaration_context(AccessorOwner::Indexer, None),
            ),
            (
                SyntaxContexts::EVENT_ACCESSOR,
                self.is_accessor_declaration_context(AccessorOwner::Event, None),
            ),
            (
                SyntaxContexts::TYPE_PARAMETER_VARIANCE,
                self.is_type_parameter_variance_context(),
            ),
            (SyntaxContexts::UNSAFE, self.is_unsafe_context()),
            (SyntaxContexts::AFTER_YIELD, self.is_after_yield_keyword()),
            (SyntaxContexts::UNARY_OPERATOR, self.is_unary_operator_context()),
            (
                SyntaxContexts::CREF_PARAMETER_MODIFIER,
                self.is_xml_cref_parameter_modifier_context(),
            ),
            (SyntaxContexts::USING_OR_EXTERN_KEYWORD, self.is_using_or_extern_keyword()),
            (
                SyntaxContexts::USING_DIRECTIVE_KEYWORD,
                self.is_using_keyword_in_using_directive(),
            ),
            (
                SyntaxContexts::USING_STATIC_KEYWORD,
                self.is_static_keyword_in_using_directive(),
            ),
        ];

        let contexts = checks
            .into_iter()
            .filter(|&(_, hit)| hit)
            .fold(SyntaxContexts::empty(), |acc, (flag, _)| acc | flag);
        tracing::trace!(position = self.position, ?contexts, "classified caret");
        contexts
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
