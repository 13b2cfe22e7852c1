//! Context predicate rules.
//!
//! Each rule takes the tree and a target token (plus a caret position or a
//! target kind where the rule needs one) and answers whether the token sits
//! in one grammatical context. Rules are independent of each other, never
//! fail, and answer `false` when the shape they look for is absent.
//!
//! Rules are grouped by the grammar area they inspect:
//! - `statements` statement starts, switch labels, `unsafe`, `yield`, using
//!   directives
//! - `expressions` casts, argument lists, operators, cref parameters
//! - `queries` last-token-of-node checks and query clauses
//! - `directives` preprocessor expressions
//! - `declarations` accessor lists and type parameter variance

mod declarations;
mod directives;
mod expressions;
mod queries;
mod statements;

pub use declarations::{is_accessor_declaration_context, is_type_parameter_variance_context};
pub use directives::is_pre_processor_expression_context;
pub use expressions::{
    is_after_possible_cast, is_constructor_or_method_parameter_argument_context,
    is_mandatory_named_parameter_position, is_unary_operator_context,
    is_xml_cref_parameter_modifier_context,
};
pub use queries::{
    is_last_token_of_kind, is_last_token_of_node, is_last_token_of_query_clause,
    is_order_by_direction_context,
};
pub use statements::{
    is_after_yield_keyword, is_beginning_of_global_statement_context,
    is_beginning_of_statement_context, is_static_keyword_in_using_directive,
    is_switch_label_context, is_unsafe_context, is_using_keyword_in_using_directive,
    is_using_or_extern_keyword,
};
