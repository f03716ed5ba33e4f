// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Renderers for the expression family: `A_Expr` and its sub-kinds,
//! `BoolExpr`, the various `IS ...` tests, `CASE`, and the call-ish forms
//! that aren't `FuncCall` itself (`ROW`, `ARRAY[]`, indirection).

use crate::ast::{AExprKind, BoolExprKind, BoolTestKind, Node, NullTestKind, SubLinkKind};
use crate::context::{DeparseContext, RenderCtx};
use crate::error::{DeparseError, Result};
use crate::render::{render, render_list};

pub(crate) fn a_const(val: &Node, ctx: RenderCtx) -> Result<String> {
    render(val, ctx.with_mode(DeparseContext::AConst))
}

/// Dispatches on `A_Expr.Kind`. Kinds with no renderer (`AEXPR_OP_ALL`,
/// `AEXPR_DISTINCT`, `AEXPR_NOT_DISTINCT`, `AEXPR_OF`, `AEXPR_ILIKE`,
/// `AEXPR_SIMILAR`, `AEXPR_PAREN`) are deliberately out of scope.
pub(crate) fn a_expr(
    kind: AExprKind,
    name: &[Node],
    lexpr: &Node,
    rexpr: &Node,
    ctx: RenderCtx,
) -> Result<String> {
    match kind {
        AExprKind::Op => a_expr_op(name, lexpr, rexpr, ctx),
        AExprKind::OpAny => a_expr_any(name, lexpr, rexpr, ctx),
        AExprKind::Nullif => a_expr_nullif(lexpr, rexpr, ctx),
        AExprKind::In => a_expr_in(name, lexpr, rexpr, ctx),
        AExprKind::Like => a_expr_like(name, lexpr, rexpr, ctx),
        AExprKind::Between | AExprKind::NotBetween | AExprKind::BetweenSym | AExprKind::NotBetweenSym => {
            a_expr_between(kind, lexpr, rexpr, ctx)
        }
        AExprKind::OpAll | AExprKind::Distinct | AExprKind::NotDistinct | AExprKind::Of | AExprKind::ILike
        | AExprKind::Similar | AExprKind::Paren => Err(DeparseError::UnsupportedNode {
            variant: "A_Expr",
            dump: format!("{kind:?}"),
        }),
    }
}

fn operator_token(name: &[Node], ctx: RenderCtx) -> Result<String> {
    let first = name.first().ok_or_else(|| DeparseError::UnsupportedNode {
        variant: "A_Expr",
        dump: "empty operator name".to_owned(),
    })?;
    render(first, ctx.with_mode(DeparseContext::Operator))
}

fn a_expr_op(name: &[Node], lexpr: &Node, rexpr: &Node, ctx: RenderCtx) -> Result<String> {
    let inner_ctx = if ctx.mode == DeparseContext::Unset { ctx.with_mode(DeparseContext::AExpr) } else { ctx };
    let lhs = render(lexpr, inner_ctx)?;
    let rhs = render(rexpr, inner_ctx)?;
    let operator = operator_token(name, ctx)?;
    let result = format!("{lhs} {operator} {rhs}");
    Ok(if ctx.mode == DeparseContext::AExpr { format!("({result})") } else { result })
}

fn a_expr_any(name: &[Node], lexpr: &Node, rexpr: &Node, ctx: RenderCtx) -> Result<String> {
    let lhs = render(lexpr, ctx)?;
    let operator = operator_token(name, ctx)?;
    let rhs = render(rexpr, ctx)?;
    Ok(format!("{lhs} {operator} ANY({rhs})"))
}

fn rhs_list_or_single(rexpr: &Node, ctx: RenderCtx, sep: &str) -> Result<String> {
    match rexpr {
        Node::List(items) => Ok(render_list(items, ctx)?.join(sep)),
        other => render(other, ctx),
    }
}

fn a_expr_in(name: &[Node], lexpr: &Node, rexpr: &Node, ctx: RenderCtx) -> Result<String> {
    let lhs = render(lexpr, ctx)?;
    let name_items = render_list(name, ctx.with_mode(DeparseContext::Operator))?;
    let operator = if name_items.first().map(String::as_str) == Some("=") { "IN" } else { "NOT IN" };
    let rhs = rhs_list_or_single(rexpr, ctx, ", ")?;
    Ok(format!("{lhs} {operator} ({rhs})"))
}

fn a_expr_like(name: &[Node], lexpr: &Node, rexpr: &Node, ctx: RenderCtx) -> Result<String> {
    let rhs = render(rexpr, ctx)?;
    let name_items = render_list(name, ctx.with_mode(DeparseContext::Operator))?;
    let operator = if name_items.first().map(String::as_str) == Some("~~") { "LIKE" } else { "NOT LIKE" };
    let lhs = render(lexpr, ctx)?;
    Ok(format!("{lhs} {operator} {rhs}"))
}

fn a_expr_nullif(lexpr: &Node, rexpr: &Node, ctx: RenderCtx) -> Result<String> {
    Ok(format!("NULLIF({}, {})", render(lexpr, ctx)?, render(rexpr, ctx)?))
}

fn a_expr_between(kind: AExprKind, lexpr: &Node, rexpr: &Node, ctx: RenderCtx) -> Result<String> {
    let keyword = match kind {
        AExprKind::Between => "BETWEEN",
        AExprKind::NotBetween => "NOT BETWEEN",
        AExprKind::BetweenSym => "BETWEEN SYMMETRIC",
        AExprKind::NotBetweenSym => "NOT BETWEEN SYMMETRIC",
        _ => unreachable!("a_expr_between only called for BETWEEN-family kinds"),
    };
    let lhs = render(lexpr, ctx)?;
    let rhs = rhs_list_or_single(rexpr, ctx, " AND ")?;
    Ok(format!("{lhs} {keyword} {rhs}"))
}

pub(crate) fn bool_expr(boolop: BoolExprKind, args: &[Node], ctx: RenderCtx) -> Result<String> {
    match boolop {
        BoolExprKind::And => bool_expr_and(args, ctx),
        BoolExprKind::Or => bool_expr_or(args, ctx),
        BoolExprKind::Not => bool_expr_not(args, ctx),
    }
}

fn bool_expr_and(args: &[Node], ctx: RenderCtx) -> Result<String> {
    let mut output = Vec::with_capacity(args.len());
    for arg in args {
        let mut rendered = render(arg, ctx)?;
        if matches!(arg, Node::BoolExpr { boolop: BoolExprKind::Or, .. }) {
            rendered = format!("({rendered})");
        }
        output.push(rendered);
    }
    Ok(output.join(" AND "))
}

fn bool_expr_or(args: &[Node], ctx: RenderCtx) -> Result<String> {
    let mut output = Vec::with_capacity(args.len());
    for arg in args {
        let mut rendered = render(arg, ctx)?;
        if matches!(arg, Node::BoolExpr { boolop: BoolExprKind::And | BoolExprKind::Or, .. }) {
            rendered = format!("({rendered})");
        }
        output.push(rendered);
    }
    Ok(output.join(" OR "))
}

fn bool_expr_not(args: &[Node], ctx: RenderCtx) -> Result<String> {
    let arg = args.first().ok_or_else(|| DeparseError::UnsupportedNode {
        variant: "BoolExpr",
        dump: "NOT with no argument".to_owned(),
    })?;
    Ok(format!("NOT {}", render(arg, ctx)?))
}

pub(crate) fn null_test(arg: &Node, nulltesttype: NullTestKind, ctx: RenderCtx) -> Result<String> {
    let suffix = match nulltesttype {
        NullTestKind::IsNull => "IS NULL",
        NullTestKind::IsNotNull => "IS NOT NULL",
    };
    Ok(format!("{} {suffix}", render(arg, ctx)?))
}

pub(crate) fn boolean_test(arg: &Node, booltesttype: BoolTestKind, ctx: RenderCtx) -> Result<String> {
    let suffix = match booltesttype {
        BoolTestKind::IsTrue => "IS TRUE",
        BoolTestKind::IsNotTrue => "IS NOT TRUE",
        BoolTestKind::IsFalse => "IS FALSE",
        BoolTestKind::IsNotFalse => "IS NOT FALSE",
        BoolTestKind::IsUnknown => "IS UNKNOWN",
        BoolTestKind::IsNotUnknown => "IS NOT UNKNOWN",
    };
    Ok(format!("{} {suffix}", render(arg, ctx)?))
}

pub(crate) fn case_expr(
    arg: Option<&Node>,
    args: &[Node],
    defresult: Option<&Node>,
    ctx: RenderCtx,
) -> Result<String> {
    let mut output = vec!["CASE".to_owned()];
    if let Some(arg) = arg {
        output.push(render(arg, ctx)?);
    }
    output.extend(render_list(args, ctx)?);
    if let Some(defresult) = defresult {
        output.push("ELSE".to_owned());
        output.push(render(defresult, ctx)?);
    }
    output.push("END".to_owned());
    Ok(output.join(" "))
}

pub(crate) fn case_when(expr: &Node, result: &Node, ctx: RenderCtx) -> Result<String> {
    Ok(format!("WHEN {} THEN {}", render(expr, ctx)?, render(result, ctx)?))
}

pub(crate) fn coalesce_expr(args: &[Node], ctx: RenderCtx) -> Result<String> {
    Ok(format!("COALESCE({})", render_list(args, ctx)?.join(", ")))
}

pub(crate) fn type_cast(arg: &Node, type_name: &Node, ctx: RenderCtx) -> Result<String> {
    let rendered_arg = render(arg, ctx)?;
    let rendered_type = render(type_name, ctx.with_mode(DeparseContext::TypeName))?;
    if rendered_type == "boolean" {
        return Ok(if rendered_arg == "'t'" { "true".to_owned() } else { "false".to_owned() });
    }
    Ok(format!("{rendered_arg}::{rendered_type}"))
}

pub(crate) fn sub_link(
    subselect: &Node,
    sub_link_type: SubLinkKind,
    testexpr: Option<&Node>,
    ctx: RenderCtx,
) -> Result<String> {
    let rendered_subselect = render(subselect, ctx)?;
    match sub_link_type {
        SubLinkKind::Any => {
            let testexpr = testexpr.ok_or_else(|| DeparseError::UnsupportedNode {
                variant: "SubLink",
                dump: "ANY_SUBLINK with no testexpr".to_owned(),
            })?;
            Ok(format!("{} IN ({rendered_subselect})", render(testexpr, ctx)?))
        }
        SubLinkKind::Exists => Ok(format!("EXISTS({rendered_subselect})")),
        SubLinkKind::Other => Ok(format!("({rendered_subselect})")),
    }
}

pub(crate) fn func_call(
    funcname: &[Node],
    args: &[Node],
    agg_star: bool,
    agg_distinct: bool,
    over: Option<&Node>,
    ctx: RenderCtx,
) -> Result<String> {
    let mut arg_items = render_list(args, ctx)?;
    if agg_star {
        arg_items.push("*".to_owned());
    }
    let args_str = arg_items.join(", ");

    let funcname_items = render_list(funcname, ctx.with_mode(DeparseContext::FuncCall))?;
    let funcname_str =
        funcname_items.into_iter().filter(|part| part != "pg_catalog").collect::<Vec<_>>().join(".");

    let distinct = if agg_distinct { "DISTINCT " } else { "" };
    let mut result = format!("{funcname_str}({distinct}{args_str})");
    if let Some(over) = over {
        result = format!("{result} OVER ({})", render(over, ctx)?);
    }
    Ok(result)
}

pub(crate) fn row_expr(args: &[Node], ctx: RenderCtx) -> Result<String> {
    Ok(format!("ROW({})", render_list(args, ctx)?.join(", ")))
}

pub(crate) fn a_array_expr(elements: &[Node], ctx: RenderCtx) -> Result<String> {
    Ok(format!("ARRAY[{}]", render_list(elements, ctx)?.join(", ")))
}

pub(crate) fn a_indices(uidx: &Node, ctx: RenderCtx) -> Result<String> {
    Ok(format!("[{}]", render(uidx, ctx)?))
}

pub(crate) fn a_indirection(arg: &Node, indirection: &[Node], ctx: RenderCtx) -> Result<String> {
    let mut result = render(arg, ctx)?;
    result.push_str(&render_list(indirection, ctx)?.concat());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use crate::options::DeparseOptions;
    use pretty_assertions::assert_eq;

    fn op(name: &str) -> Node {
        Node::Str { str: name.to_owned() }
    }

    fn int(v: i64) -> Node {
        Node::Integer { ival: v }
    }

    #[test]
    fn nested_a_expr_is_parenthesized() {
        let opts = DeparseOptions::default();
        let ctx = RenderCtx::new(&opts);
        let inner = Node::AExpr { kind: AExprKind::Op, name: vec![op("=")], lexpr: Box::new(int(2)), rexpr: Box::new(int(2)) };
        let rendered = a_expr(AExprKind::Op, &[op("=")], &int(1), &inner, ctx).unwrap();
        assert_eq!(rendered, "1 = (2 = 2)");
    }

    #[test]
    fn in_uses_equal_else_not_in() {
        let opts = DeparseOptions::default();
        let ctx = RenderCtx::new(&opts);
        let rexpr = Node::List(vec![int(1), int(2), int(3)]);
        assert_eq!(a_expr_in(&[op("=")], &int(1), &rexpr, ctx).unwrap(), "1 IN (1, 2, 3)");
        assert_eq!(a_expr_in(&[op("<>")], &int(1), &rexpr, ctx).unwrap(), "1 NOT IN (1, 2, 3)");
    }

    #[test]
    fn or_parenthesizes_and_and_or_children() {
        let opts = DeparseOptions::default();
        let ctx = RenderCtx::new(&opts);
        let and_child = Node::BoolExpr { boolop: BoolExprKind::And, args: vec![int(1), int(2)] };
        let or_child = Node::BoolExpr { boolop: BoolExprKind::Or, args: vec![int(3), int(4)] };
        let rendered = bool_expr_or(&[and_child, or_child], ctx).unwrap();
        assert_eq!(rendered, "(1 AND 2) OR (3 OR 4)");
    }

    #[test]
    fn and_only_parenthesizes_or_children() {
        let opts = DeparseOptions::default();
        let ctx = RenderCtx::new(&opts);
        let or_child = Node::BoolExpr { boolop: BoolExprKind::Or, args: vec![int(1), int(2)] };
        let plain = int(5);
        let rendered = bool_expr_and(&[or_child, plain], ctx).unwrap();
        assert_eq!(rendered, "(1 OR 2) AND 5");
    }
}
