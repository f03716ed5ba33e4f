// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! The render dispatcher: one `match` per [`Node`] variant, each arm
//! delegating to a small renderer in one of the sibling modules.

mod clause;
mod expr;
mod literal;
mod names;
mod stmt;

use log::trace;

use crate::ast::Node;
use crate::context::RenderCtx;
use crate::error::Result;

/// Renders a single node in the given context.
///
/// This is the one place every renderer calls back into to render a child,
/// which keeps the per-variant dispatch in one spot instead of duplicated
/// across every leaf module.
pub(crate) fn render(node: &Node, ctx: RenderCtx) -> Result<String> {
    trace!("rendering {} in {} context", node.variant_name(), ctx.mode.name());
    match node {
        Node::Integer { ival } => literal::integer(*ival),
        Node::Float { str } => literal::float(str),
        Node::Null => literal::null(),
        Node::Str { str } => literal::string(str, ctx),
        Node::AStar => literal::a_star(),
        Node::ParamRef { number } => literal::param_ref(*number),
        Node::AConst { val } => expr::a_const(val, ctx),

        Node::List(items) => Ok(render_list(items, ctx)?.join(", ")),

        Node::ColumnRef { fields } => names::column_ref(fields, ctx),
        Node::Alias { aliasname, colnames } => names::alias(aliasname, colnames.as_deref(), ctx),
        Node::RangeVar { schemaname, relname, inh, alias } => {
            names::range_var(schemaname.as_deref(), relname, *inh, alias.as_deref(), ctx)
        }
        Node::TypeName { names, typmods, setof, array_bounds } => {
            names::type_name(names, typmods.as_deref(), *setof, array_bounds.as_deref(), ctx)
        }
        Node::ColumnDef { colname, type_name, raw_default, constraints } => {
            names::column_def(colname, type_name, raw_default.as_deref(), constraints.as_deref(), ctx)
        }

        Node::AExpr { kind, name, lexpr, rexpr } => expr::a_expr(*kind, name, lexpr, rexpr, ctx),
        Node::BoolExpr { boolop, args } => expr::bool_expr(*boolop, args, ctx),
        Node::NullTest { arg, nulltesttype } => expr::null_test(arg, *nulltesttype, ctx),
        Node::BooleanTest { arg, booltesttype } => expr::boolean_test(arg, *booltesttype, ctx),
        Node::CaseExpr { arg, args, defresult } => {
            expr::case_expr(arg.as_deref(), args, defresult.as_deref(), ctx)
        }
        Node::CaseWhen { expr: when_expr, result } => expr::case_when(when_expr, result, ctx),
        Node::CoalesceExpr { args } => expr::coalesce_expr(args, ctx),
        Node::TypeCast { arg, type_name } => expr::type_cast(arg, type_name, ctx),
        Node::SubLink { subselect, sub_link_type, testexpr } => {
            expr::sub_link(subselect, *sub_link_type, testexpr.as_deref(), ctx)
        }
        Node::FuncCall { funcname, args, agg_star, agg_distinct, over } => {
            expr::func_call(funcname, args, *agg_star, *agg_distinct, over.as_deref(), ctx)
        }
        Node::RowExpr { args } => expr::row_expr(args, ctx),
        Node::AArrayExpr { elements } => expr::a_array_expr(elements, ctx),
        Node::AIndices { uidx } => expr::a_indices(uidx, ctx),
        Node::AIndirection { arg, indirection } => expr::a_indirection(arg, indirection, ctx),

        Node::SortBy { node: inner, sortby_dir } => clause::sort_by(inner, *sortby_dir, ctx),
        Node::JoinExpr { jointype, is_natural, larg, rarg, quals, using_clause } => clause::join_expr(
            *jointype,
            *is_natural,
            larg,
            rarg,
            quals.as_deref(),
            using_clause.as_deref(),
            ctx,
        ),
        Node::RangeSubselect { subquery, alias } => clause::range_subselect(subquery, alias.as_deref(), ctx),
        Node::RangeFunction { lateral, functions, alias, coldeflist } => {
            clause::range_function(*lateral, functions, alias.as_deref(), coldeflist.as_deref(), ctx)
        }
        Node::WindowDef { name, partition_clause, order_clause } => {
            clause::window_def(name.as_deref(), partition_clause.as_deref(), order_clause.as_deref(), ctx)
        }
        Node::CommonTableExpr { ctename, aliascolnames, ctequery } => {
            clause::common_table_expr(ctename, aliascolnames.as_deref(), ctequery, ctx)
        }
        Node::WithClause { recursive, ctes } => clause::with_clause(*recursive, ctes, ctx),
        Node::ResTarget { name, val } => clause::res_target(name.as_deref(), val, ctx),

        Node::SelectStmt {
            op,
            all,
            larg,
            rarg,
            with_clause,
            target_list,
            distinct_clause,
            from_clause,
            where_clause,
            values_lists,
            group_clause,
            having_clause,
            sort_clause,
            limit_count,
            limit_offset,
            locking_clause,
        } => stmt::select_stmt(
            *op,
            *all,
            larg.as_deref(),
            rarg.as_deref(),
            with_clause.as_deref(),
            target_list,
            distinct_clause.as_deref(),
            from_clause,
            where_clause.as_deref(),
            values_lists.as_deref(),
            group_clause,
            having_clause.as_deref(),
            sort_clause,
            limit_count.as_deref(),
            limit_offset.as_deref(),
            locking_clause,
            ctx,
        ),
        Node::RawStmt { stmt } => stmt::raw_stmt(stmt, ctx),
    }
}

/// Renders every node in `nodes`, in order, short-circuiting on the first
/// error.
pub(crate) fn render_list(nodes: &[Node], ctx: RenderCtx) -> Result<Vec<String>> {
    nodes.iter().map(|node| render(node, ctx)).collect()
}
