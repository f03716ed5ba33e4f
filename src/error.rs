// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Error types returned by the deparser.

use crate::ast::Node;

/// Everything that can go wrong while rendering a [`Node`] back into SQL.
///
/// Rendering never panics and never recovers locally: the first error
/// encountered anywhere in the tree halts the whole call and is returned
/// to the caller unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeparseError {
    /// The dispatcher (or a sub-kind match inside it) hit a variant or
    /// sub-kind that is deliberately out of scope.
    #[error("can't deparse {variant}: {dump}")]
    UnsupportedNode { variant: &'static str, dump: String },

    /// A `pg_catalog.*` type name with no entry in the cast table.
    #[error("can't deparse type {name}")]
    UnsupportedType { name: String },

    /// A renderer was invoked under a [`crate::context::DeparseContext`] it
    /// does not handle.
    #[error("can't deparse {variant} in context {context}")]
    UnsupportedContext { context: &'static str, variant: &'static str },
}

impl DeparseError {
    pub(crate) fn unsupported_node(node: &Node) -> Self {
        Self::UnsupportedNode { variant: node.variant_name(), dump: node.debug_dump() }
    }
}

pub type Result<T> = std::result::Result<T, DeparseError>;
