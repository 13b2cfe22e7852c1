//! Accessor context resolution.
//!
//! Used by the accessor-declaration rule to decide whether an accessor of a
//! given kind is already declared in the enclosing accessor list. An
//! existing accessor does not suppress completion while the caret is on it,
//! since that is the user editing it.

use crate::shape::{accessor_keyword, is_kind_or_has_matching_text};
use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

/// Accessor keyword a completion provider wants to offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Get,
    Set,
    Add,
    Remove,
}

impl AccessorKind {
    pub const ALL: [AccessorKind; 4] = [
        AccessorKind::Get,
        AccessorKind::Set,
        AccessorKind::Add,
        AccessorKind::Remove,
    ];

    pub fn keyword(self) -> SyntaxKind {
        match self {
            AccessorKind::Get => SyntaxKind::GetKeyword,
            AccessorKind::Set => SyntaxKind::SetKeyword,
            AccessorKind::Add => SyntaxKind::AddKeyword,
            AccessorKind::Remove => SyntaxKind::RemoveKeyword,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Add => "add",
            AccessorKind::Remove => "remove",
        }
    }
}

/// Declaration kinds that own an accessor list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessorOwner {
    Property,
    Indexer,
    Event,
}

impl AccessorOwner {
    pub const ALL: [AccessorOwner; 3] = [
        AccessorOwner::Property,
        AccessorOwner::Indexer,
        AccessorOwner::Event,
    ];

    pub fn declaration_kind(self) -> SyntaxKind {
        match self {
            AccessorOwner::Property => SyntaxKind::PropertyDeclaration,
            AccessorOwner::Indexer => SyntaxKind::IndexerDeclaration,
            AccessorOwner::Event => SyntaxKind::EventDeclaration,
        }
    }
}

/// Accessor declarations in an accessor list.
pub fn accessors(tree: &SyntaxTree, list: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
    tree.child_nodes(list)
        .filter(move |&child| tree.kind(child).is_accessor_declaration())
}

/// Keyword token of the first declared accessor of `kind`. Missing keywords
/// (an accessor the parser had to invent) do not count.
pub fn find_existing_accessor(
    tree: &SyntaxTree,
    list: NodeIndex,
    kind: AccessorKind,
) -> Option<NodeIndex> {
    accessors(tree, list)
        .filter_map(|accessor| accessor_keyword(tree, accessor))
        .find(|&keyword| {
            !tree.is_missing(keyword) && is_kind_or_has_matching_text(tree, keyword, kind.keyword())
        })
}

/// True when an accessor of `kind` already exists in `list` and the caret is
/// not on its keyword, so offering that accessor again would be wrong.
pub fn is_existing_accessor_suppressed(
    tree: &SyntaxTree,
    list: NodeIndex,
    kind: AccessorKind,
    position: u32,
) -> bool {
    match find_existing_accessor(tree, list, kind) {
        Some(keyword) => !tree.span(keyword).intersects_with_position(position),
        None => false,
    }
}

#[cfg(test)]
#[path = "tests/accessor_tests.rs"]
mod tests;
