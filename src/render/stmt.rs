// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Renderers for the statement-shaped nodes: `SelectStmt` and the
//! `RawStmt` wrapper a parser puts around every top-level statement.

use crate::ast::{Node, SetOp};
use crate::context::{DeparseContext, RenderCtx};
use crate::error::{DeparseError, Result};
use crate::render::{render, render_list};

#[allow(clippy::too_many_arguments)]
pub(crate) fn select_stmt(
    op: SetOp,
    all: bool,
    larg: Option<&Node>,
    rarg: Option<&Node>,
    with_clause: Option<&Node>,
    target_list: &[Node],
    distinct_clause: Option<&[Node]>,
    from_clause: &[Node],
    where_clause: Option<&Node>,
    values_lists: Option<&[Vec<Node>]>,
    group_clause: &[Node],
    having_clause: Option<&Node>,
    sort_clause: &[Node],
    limit_count: Option<&Node>,
    limit_offset: Option<&Node>,
    locking_clause: &[Node],
    ctx: RenderCtx,
) -> Result<String> {
    if op == SetOp::Union {
        let larg = larg.ok_or_else(|| DeparseError::UnsupportedNode {
            variant: "SelectStmt",
            dump: "UNION with no left arm".to_owned(),
        })?;
        let rarg = rarg.ok_or_else(|| DeparseError::UnsupportedNode {
            variant: "SelectStmt",
            dump: "UNION with no right arm".to_owned(),
        })?;
        let keyword = if all { "UNION ALL" } else { "UNION" };
        return Ok(format!("{} {keyword} {}", render(larg, ctx)?, render(rarg, ctx)?));
    }
    if op != SetOp::None {
        return Err(DeparseError::UnsupportedNode {
            variant: "SelectStmt",
            dump: format!("{op:?}"),
        });
    }

    // Every child of a SelectStmt renders under "select" context.
    let ctx = ctx.with_mode(DeparseContext::Select);

    let mut parts = Vec::new();
    if let Some(with_clause) = with_clause {
        parts.push(render(with_clause, ctx)?);
    }

    match values_lists {
        Some(rows) => {
            let rendered_rows = rows
                .iter()
                .map(|row| Ok(format!("({})", render_list(row, ctx)?.join(", "))))
                .collect::<Result<Vec<_>>>()?;
            parts.push(format!("VALUES {}", rendered_rows.join(", ")));
        }
        None => {
            let mut select_head = "SELECT".to_owned();
            if distinct_clause.is_some() {
                select_head = format!("{select_head} DISTINCT");
            }
            parts.push(format!("{select_head} {}", render_list(target_list, ctx)?.join(", ")));

            if !from_clause.is_empty() {
                parts.push(format!("FROM {}", render_list(from_clause, ctx)?.join(", ")));
            }
            if let Some(where_clause) = where_clause {
                parts.push(format!("WHERE {}", render(where_clause, ctx)?));
            }
            if !group_clause.is_empty() {
                parts.push(format!("GROUP BY {}", render_list(group_clause, ctx)?.join(", ")));
            }
            if having_clause.is_some() {
                return Err(DeparseError::UnsupportedNode {
                    variant: "SelectStmt",
                    dump: "HAVING clause".to_owned(),
                });
            }
        }
    }

    if !sort_clause.is_empty() {
        parts.push(format!("ORDER BY {}", render_list(sort_clause, ctx)?.join(", ")));
    }
    if let Some(limit_count) = limit_count {
        parts.push(format!("LIMIT {}", render(limit_count, ctx)?));
    }
    if let Some(limit_offset) = limit_offset {
        parts.push(format!("OFFSET {}", render(limit_offset, ctx)?));
    }
    if !locking_clause.is_empty() {
        parts.push(render_list(locking_clause, ctx)?.join(" "));
    }

    Ok(parts.join(" "))
}

pub(crate) fn raw_stmt(stmt: &Node, ctx: RenderCtx) -> Result<String> {
    render(stmt, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DeparseOptions;
    use pretty_assertions::assert_eq;

    fn target(val: Node) -> Node {
        Node::ResTarget { name: None, val: Box::new(val) }
    }

    fn col(name: &str) -> Node {
        Node::ColumnRef { fields: vec![Node::Str { str: name.to_owned() }] }
    }

    #[allow(clippy::too_many_arguments)]
    fn plain(
        target_list: Vec<Node>,
        distinct_clause: Option<Vec<Node>>,
        from_clause: Vec<Node>,
        where_clause: Option<Node>,
        group_clause: Vec<Node>,
        having_clause: Option<Node>,
        sort_clause: Vec<Node>,
    ) -> Node {
        Node::SelectStmt {
            op: SetOp::None,
            all: false,
            larg: None,
            rarg: None,
            with_clause: None,
            target_list,
            distinct_clause,
            from_clause,
            where_clause: where_clause.map(Box::new),
            values_lists: None,
            group_clause,
            having_clause: having_clause.map(Box::new),
            sort_clause,
            limit_count: None,
            limit_offset: None,
            locking_clause: Vec::new(),
        }
    }

    #[test]
    fn simple_select_renders_clauses_in_order() {
        let opts = DeparseOptions::default();
        let ctx = RenderCtx::new(&opts);
        let stmt = plain(vec![target(col("a"))], None, vec![col("t")], None, Vec::new(), None, Vec::new());
        let Node::SelectStmt {
            op, all, larg, rarg, with_clause, target_list, distinct_clause, from_clause, where_clause,
            values_lists, group_clause, having_clause, sort_clause, limit_count, limit_offset, locking_clause,
        } = &stmt
        else {
            unreachable!()
        };
        let rendered = select_stmt(
            *op, *all, larg.as_deref(), rarg.as_deref(), with_clause.as_deref(), target_list,
            distinct_clause.as_deref(), from_clause, where_clause.as_deref(), values_lists.as_deref(),
            group_clause, having_clause.as_deref(), sort_clause, limit_count.as_deref(), limit_offset.as_deref(),
            locking_clause, ctx,
        )
        .unwrap();
        assert_eq!(rendered, r#"SELECT "a" FROM "t""#);
    }

    #[test]
    fn distinct_clause_renders_bare_keyword_regardless_of_contents() {
        let opts = DeparseOptions::default();
        let ctx = RenderCtx::new(&opts);
        let stmt =
            plain(vec![target(col("a"))], Some(vec![col("b")]), vec![col("t")], None, Vec::new(), None, Vec::new());
        let Node::SelectStmt {
            op, all, larg, rarg, with_clause, target_list, distinct_clause, from_clause, where_clause,
            values_lists, group_clause, having_clause, sort_clause, limit_count, limit_offset, locking_clause,
        } = &stmt
        else {
            unreachable!()
        };
        let rendered = select_stmt(
            *op, *all, larg.as_deref(), rarg.as_deref(), with_clause.as_deref(), target_list,
            distinct_clause.as_deref(), from_clause, where_clause.as_deref(), values_lists.as_deref(),
            group_clause, having_clause.as_deref(), sort_clause, limit_count.as_deref(), limit_offset.as_deref(),
            locking_clause, ctx,
        )
        .unwrap();
        assert_eq!(rendered, r#"SELECT DISTINCT "a" FROM "t""#);
    }

    #[test]
    fn having_clause_always_errors() {
        let opts = DeparseOptions::default();
        let ctx = RenderCtx::new(&opts);
        let stmt =
            plain(vec![target(col("a"))], None, vec![col("t")], None, Vec::new(), Some(col("a")), Vec::new());
        let Node::SelectStmt {
            op, all, larg, rarg, with_clause, target_list, distinct_clause, from_clause, where_clause,
            values_lists, group_clause, having_clause, sort_clause, limit_count, limit_offset, locking_clause,
        } = &stmt
        else {
            unreachable!()
        };
        let result = select_stmt(
            *op, *all, larg.as_deref(), rarg.as_deref(), with_clause.as_deref(), target_list,
            distinct_clause.as_deref(), from_clause, where_clause.as_deref(), values_lists.as_deref(),
            group_clause, having_clause.as_deref(), sort_clause, limit_count.as_deref(), limit_offset.as_deref(),
            locking_clause, ctx,
        );
        assert!(result.is_err());
    }

    #[test]
    fn union_short_circuits_other_fields() {
        let opts = DeparseOptions::default();
        let ctx = RenderCtx::new(&opts);
        let left = plain(vec![target(col("a"))], None, vec![col("t1")], None, Vec::new(), None, Vec::new());
        let right = plain(vec![target(col("a"))], None, vec![col("t2")], None, Vec::new(), None, Vec::new());
        let union = Node::SelectStmt {
            op: SetOp::Union,
            all: true,
            larg: Some(Box::new(left)),
            rarg: Some(Box::new(right)),
            with_clause: None,
            target_list: Vec::new(),
            distinct_clause: None,
            from_clause: Vec::new(),
            where_clause: None,
            values_lists: None,
            group_clause: Vec::new(),
            having_clause: None,
            sort_clause: Vec::new(),
            limit_count: None,
            limit_offset: None,
            locking_clause: Vec::new(),
        };
        let rendered = render(&union, ctx).unwrap();
        assert_eq!(rendered, r#"SELECT "a" FROM "t1" UNION ALL SELECT "a" FROM "t2""#);
    }
}
