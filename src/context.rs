// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! The small value-semantics context threaded through rendering.

use crate::options::DeparseOptions;

/// Selects context-dependent rendering: quoting style for `String` leaves
/// and parenthesization of nested `A_Expr`s.
///
/// This is a value, never mutated in place — a renderer either passes its
/// own context straight through to a child, or constructs a fresh one when
/// that child must render in a different mode. No renderer reads global or
/// thread-local state to decide how to render a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeparseContext {
    #[default]
    Unset,
    /// Identifiers in target/from/where position: `"<s>"`, unescaped.
    Select,
    /// Constant-valued strings: `'<s>'` with `'` doubled.
    AConst,
    /// A nested expression; drives parenthesization of a nested `A_Expr`.
    AExpr,
    /// Function names: bare, `pg_catalog` stripped by the caller.
    FuncCall,
    /// Type names: bare.
    TypeName,
    /// A binary operator token: bare.
    Operator,
    /// A `defname`/`AS` position: bare.
    DefnameAs,
}

impl DeparseContext {
    /// The name used in [`crate::error::DeparseError::UnsupportedContext`].
    pub(crate) fn name(self) -> &'static str {
        match self {
            DeparseContext::Unset => "unset",
            DeparseContext::Select => "select",
            DeparseContext::AConst => "a_const",
            DeparseContext::AExpr => "a_expr",
            DeparseContext::FuncCall => "func_call",
            DeparseContext::TypeName => "type_name",
            DeparseContext::Operator => "operator",
            DeparseContext::DefnameAs => "defname_as",
        }
    }
}

/// What gets threaded down the recursion: the rendering mode plus the
/// caller's options. Bundled into one small `Copy` record so every
/// renderer still takes a single context value, per the crate's design —
/// [`DeparseOptions`] is itself value semantics (borrowed, never mutated),
/// so this adds no hidden state.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx<'a> {
    pub mode: DeparseContext,
    pub options: &'a DeparseOptions,
}

impl<'a> RenderCtx<'a> {
    pub fn new(options: &'a DeparseOptions) -> Self {
        Self { mode: DeparseContext::Unset, options }
    }

    /// Returns a copy of this context with a different rendering mode.
    pub fn with_mode(self, mode: DeparseContext) -> Self {
        Self { mode, ..self }
    }
}
