// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Renderers for the clause-shaped nodes that sit between expressions and
//! statements: sort keys, joins, range items, window definitions and CTEs.

use crate::ast::{JoinType, Node, SortByDir};
use crate::context::{DeparseContext, RenderCtx};
use crate::error::{DeparseError, Result};
use crate::render::{render, render_list};

pub(crate) fn sort_by(node: &Node, sortby_dir: SortByDir, ctx: RenderCtx) -> Result<String> {
    let rendered = render(node, ctx)?;
    Ok(match sortby_dir {
        SortByDir::Default => rendered,
        SortByDir::Asc => format!("{rendered} ASC"),
        SortByDir::Desc => format!("{rendered} DESC"),
    })
}

pub(crate) fn join_expr(
    jointype: JoinType,
    is_natural: bool,
    larg: &Node,
    rarg: &Node,
    quals: Option<&Node>,
    using_clause: Option<&[Node]>,
    ctx: RenderCtx,
) -> Result<String> {
    let has_condition = quals.is_some() || using_clause.is_some_and(|u| !u.is_empty());
    let keyword = match jointype {
        JoinType::Inner if is_natural => "NATURAL JOIN",
        JoinType::Inner if !has_condition => "CROSS JOIN",
        JoinType::Inner => "JOIN",
        JoinType::Left => "LEFT JOIN",
        JoinType::Right => "RIGHT JOIN",
        JoinType::Full => "FULL JOIN",
    };
    let lhs = render(larg, ctx)?;
    let rhs = render(rarg, ctx)?;
    let mut result = format!("{lhs} {keyword} {rhs}");
    if let Some(quals) = quals {
        // The source this crate's design is grounded on silently discards an
        // error here (`return "", nil`); that's a bug, not a design choice —
        // propagate it instead.
        result = format!("{result} ON {}", render(quals, ctx)?);
    } else if let Some(using_clause) = using_clause {
        if !using_clause.is_empty() {
            result = format!("{result} USING ({})", render_list(using_clause, ctx)?.join(", "));
        }
    }
    Ok(result)
}

pub(crate) fn range_subselect(subquery: &Node, alias: Option<&Node>, ctx: RenderCtx) -> Result<String> {
    let mut result = format!("({})", render(subquery, ctx)?);
    if let Some(alias) = alias {
        result = format!("{result} {}", render(alias, ctx)?);
    }
    Ok(result)
}

/// `RangeFunction.Functions` is a list-of-lists in the source schema: each
/// entry is a two-element `List` of `[call, coldeflist]`, only the first of
/// which this crate ever populates. A shape other than exactly that is
/// treated as malformed input rather than indexed into blindly.
pub(crate) fn range_function(
    lateral: bool,
    functions: &[Node],
    alias: Option<&Node>,
    coldeflist: Option<&[Node]>,
    ctx: RenderCtx,
) -> Result<String> {
    let mut calls = Vec::with_capacity(functions.len());
    for entry in functions {
        let Node::List(items) = entry else {
            return Err(DeparseError::unsupported_node(entry));
        };
        let Some(call) = items.first() else {
            return Err(DeparseError::UnsupportedNode {
                variant: "RangeFunction",
                dump: "empty function-call list".to_owned(),
            });
        };
        calls.push(render(call, ctx)?);
    }
    let mut result = calls.join(", ");
    if lateral {
        result = format!("LATERAL {result}");
    }
    if let Some(alias) = alias {
        result = format!("{result} {}", render(alias, ctx)?);
    }
    if let Some(coldeflist) = coldeflist {
        if !coldeflist.is_empty() {
            let cols = render_list(coldeflist, ctx)?.join(", ");
            result = if alias.is_some() {
                format!("{result}({cols})")
            } else {
                format!("{result} AS ({cols})")
            };
        }
    }
    Ok(result)
}

/// A named window reference (`OVER w`) has no agreed rendering yet; only
/// inline window definitions (`OVER (...)`) are supported.
pub(crate) fn window_def(
    name: Option<&str>,
    partition_clause: Option<&[Node]>,
    order_clause: Option<&[Node]>,
    ctx: RenderCtx,
) -> Result<String> {
    if name.is_some() {
        return Err(DeparseError::UnsupportedNode {
            variant: "WindowDef",
            dump: "named window reference".to_owned(),
        });
    }
    let mut parts = Vec::new();
    if let Some(partition_clause) = partition_clause {
        if !partition_clause.is_empty() {
            parts.push(format!("PARTITION BY {}", render_list(partition_clause, ctx)?.join(", ")));
        }
    }
    if let Some(order_clause) = order_clause {
        if !order_clause.is_empty() {
            parts.push(format!("ORDER BY {}", render_list(order_clause, ctx)?.join(", ")));
        }
    }
    Ok(parts.join(" "))
}

pub(crate) fn common_table_expr(
    ctename: &str,
    aliascolnames: Option<&[Node]>,
    ctequery: &Node,
    ctx: RenderCtx,
) -> Result<String> {
    let mut result = ctename.to_owned();
    if let Some(aliascolnames) = aliascolnames {
        if !aliascolnames.is_empty() {
            result = format!("{result}({})", render_list(aliascolnames, ctx)?.join(", "));
        }
    }
    Ok(format!("{result} AS ({})", render(ctequery, ctx)?))
}

pub(crate) fn with_clause(recursive: bool, ctes: &[Node], ctx: RenderCtx) -> Result<String> {
    let keyword = if recursive { "WITH RECURSIVE" } else { "WITH" };
    Ok(format!("{keyword} {}", render_list(ctes, ctx)?.join(", ")))
}

/// `ResTarget` is only meaningful in a `SELECT` target list; any other
/// position is an error rather than a silent best-effort render.
pub(crate) fn res_target(name: Option<&str>, val: &Node, ctx: RenderCtx) -> Result<String> {
    if ctx.mode != DeparseContext::Select {
        return Err(DeparseError::UnsupportedContext { context: ctx.mode.name(), variant: "ResTarget" });
    }
    let rendered = render(val, ctx)?;
    Ok(match name {
        Some(name) => format!("{rendered} AS {name}"),
        None => rendered,
    })
}
