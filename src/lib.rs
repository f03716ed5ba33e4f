// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Deparses a PostgreSQL-dialect statement AST back into SQL text.
//!
//! The AST ([`ast::Node`]) is produced elsewhere — typically by a real
//! Postgres parser such as `libpg_query`, handed across as JSON — and this
//! crate's only job is the inverse direction: given a tree, render the
//! canonical single-line SQL statement it represents. It does no lexing or
//! parsing of its own.
//!
//! ```
//! use pg_deparser::{deparse_node, ast::Node};
//!
//! let tree = Node::ColumnRef { fields: vec![Node::Str { str: "id".to_owned() }] };
//! assert_eq!(deparse_node(&tree).unwrap(), r#""id""#);
//! ```

pub mod ast;
mod context;
pub mod error;
pub mod options;
mod render;

use ast::Node;
use context::RenderCtx;
pub use error::DeparseError;
pub use options::DeparseOptions;

/// Deparses every statement in `tree`, joining the results with
/// [`DeparseOptions::default`]'s statement separator (`"; "`).
pub fn deparse_tree(tree: &[Node]) -> error::Result<String> {
    deparse_tree_with_options(tree, &DeparseOptions::default())
}

/// Like [`deparse_tree`], but with caller-supplied [`DeparseOptions`].
pub fn deparse_tree_with_options(tree: &[Node], options: &DeparseOptions) -> error::Result<String> {
    let ctx = RenderCtx::new(options);
    let statements = tree.iter().map(|node| render::render(node, ctx)).collect::<error::Result<Vec<_>>>()?;
    Ok(statements.join(&options.statement_separator))
}

/// Deparses a single node — usually an expression fragment rather than a
/// whole statement — with [`DeparseOptions::default`].
pub fn deparse_node(node: &Node) -> error::Result<String> {
    deparse_node_with_options(node, &DeparseOptions::default())
}

/// Like [`deparse_node`], but with caller-supplied [`DeparseOptions`].
pub fn deparse_node_with_options(node: &Node, options: &DeparseOptions) -> error::Result<String> {
    render::render(node, RenderCtx::new(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{AExprKind, Node, SetOp};
    use pretty_assertions::assert_eq;

    fn col(name: &str) -> Node {
        Node::ColumnRef { fields: vec![Node::Str { str: name.to_owned() }] }
    }

    fn select_star_from(relname: &str) -> Node {
        Node::RawStmt {
            stmt: Box::new(Node::SelectStmt {
                op: SetOp::None,
                all: false,
                larg: None,
                rarg: None,
                with_clause: None,
                target_list: vec![Node::ResTarget { name: None, val: Box::new(Node::AStar) }],
                distinct_clause: None,
                from_clause: vec![Node::RangeVar {
                    schemaname: None,
                    relname: relname.to_owned(),
                    inh: true,
                    alias: None,
                }],
                where_clause: None,
                values_lists: None,
                group_clause: Vec::new(),
                having_clause: None,
                sort_clause: Vec::new(),
                limit_count: None,
                limit_offset: None,
                locking_clause: Vec::new(),
            }),
        }
    }

    #[test]
    fn deparses_a_simple_select() {
        let tree = [select_star_from("accounts")];
        assert_eq!(deparse_tree(&tree).unwrap(), r#"SELECT * FROM "accounts""#);
    }

    #[test]
    fn deparses_multiple_statements_with_separator() {
        let tree = [select_star_from("a"), select_star_from("b")];
        assert_eq!(deparse_tree(&tree).unwrap(), r#"SELECT * FROM "a"; SELECT * FROM "b""#);
    }

    #[test]
    fn custom_separator_is_honored() {
        let tree = [select_star_from("a"), select_star_from("b")];
        let options = DeparseOptions { statement_separator: "\n".to_owned(), ..DeparseOptions::default() };
        assert_eq!(deparse_tree_with_options(&tree, &options).unwrap(), "SELECT * FROM \"a\"\nSELECT * FROM \"b\"");
    }

    #[test]
    fn deparse_node_renders_a_bare_expression() {
        let expr = Node::AExpr {
            kind: AExprKind::Op,
            name: vec![Node::Str { str: "=".to_owned() }],
            lexpr: Box::new(col("a")),
            rexpr: Box::new(Node::AConst { val: Box::new(Node::Integer { ival: 1 }) }),
        };
        assert_eq!(deparse_node(&expr).unwrap(), r#""a" = 1"#);
    }

    #[test]
    fn unsupported_node_surfaces_as_error() {
        let named_window =
            Node::WindowDef { name: Some("w".to_owned()), partition_clause: None, order_clause: None };
        assert!(deparse_node(&named_window).is_err());
    }
}
