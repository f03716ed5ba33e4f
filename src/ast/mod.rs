// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! The typed AST this crate renders back into SQL text.
//!
//! `Node` is a tagged sum over the ~35 constructs a PostgreSQL parser
//! produces for the subset of the grammar this crate supports (see the
//! crate-level docs for the excluded statement kinds). The parser that
//! builds these trees is an external collaborator; this crate only ever
//! reads them.

use serde::{Deserialize, Serialize};

/// A single AST node.
///
/// Boxing is used wherever a field holds exactly one child node, so that
/// `Node` itself stays a reasonably sized, `Clone`-able value. Fields that
/// hold zero-or-more children use `Vec<Node>` directly, or `List(Vec<Node>)`
/// when the source AST itself wraps them in a `List` node (some renderers
/// care about that distinction, e.g. [`crate::render::expr::a_expr_in`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "PascalCase")]
pub enum Node {
    // --- leaves -------------------------------------------------------
    Integer { ival: i64 },
    Float { str: String },
    Null,
    /// Corresponds to the AST's `String` node; named `Str` here so it does
    /// not shadow [`std::string::String`] at every match arm.
    Str { str: String },
    AStar,
    ParamRef { number: i32 },
    AConst { val: Box<Node> },

    // --- list container -------------------------------------------------
    List(Vec<Node>),

    // --- names & types --------------------------------------------------
    ColumnRef { fields: Vec<Node> },
    Alias { aliasname: String, colnames: Option<Vec<Node>> },
    RangeVar { schemaname: Option<String>, relname: String, inh: bool, alias: Option<Box<Node>> },
    TypeName { names: Vec<Node>, typmods: Option<Vec<Node>>, setof: bool, array_bounds: Option<Vec<Node>> },
    ColumnDef { colname: String, type_name: Box<Node>, raw_default: Option<Box<Node>>, constraints: Option<Vec<Node>> },

    // --- expressions -----------------------------------------------------
    AExpr { kind: AExprKind, name: Vec<Node>, lexpr: Box<Node>, rexpr: Box<Node> },
    BoolExpr { boolop: BoolExprKind, args: Vec<Node> },
    NullTest { arg: Box<Node>, nulltesttype: NullTestKind },
    BooleanTest { arg: Box<Node>, booltesttype: BoolTestKind },
    CaseExpr { arg: Option<Box<Node>>, args: Vec<Node>, defresult: Option<Box<Node>> },
    CaseWhen { expr: Box<Node>, result: Box<Node> },
    CoalesceExpr { args: Vec<Node> },
    TypeCast { arg: Box<Node>, type_name: Box<Node> },
    SubLink { subselect: Box<Node>, sub_link_type: SubLinkKind, testexpr: Option<Box<Node>> },
    FuncCall { funcname: Vec<Node>, args: Vec<Node>, agg_star: bool, agg_distinct: bool, over: Option<Box<Node>> },
    RowExpr { args: Vec<Node> },
    AArrayExpr { elements: Vec<Node> },
    AIndices { uidx: Box<Node> },
    AIndirection { arg: Box<Node>, indirection: Vec<Node> },

    // --- clauses ---------------------------------------------------------
    SortBy { node: Box<Node>, sortby_dir: SortByDir },
    JoinExpr { jointype: JoinType, is_natural: bool, larg: Box<Node>, rarg: Box<Node>, quals: Option<Box<Node>>, using_clause: Option<Vec<Node>> },
    RangeSubselect { subquery: Box<Node>, alias: Option<Box<Node>> },
    RangeFunction { lateral: bool, functions: Vec<Node>, alias: Option<Box<Node>>, coldeflist: Option<Vec<Node>> },
    WindowDef { name: Option<String>, partition_clause: Option<Vec<Node>>, order_clause: Option<Vec<Node>> },
    CommonTableExpr { ctename: String, aliascolnames: Option<Vec<Node>>, ctequery: Box<Node> },
    WithClause { recursive: bool, ctes: Vec<Node> },
    ResTarget { name: Option<String>, val: Box<Node> },

    // --- statement ---------------------------------------------------------
    SelectStmt {
        op: SetOp,
        all: bool,
        larg: Option<Box<Node>>,
        rarg: Option<Box<Node>>,
        with_clause: Option<Box<Node>>,
        target_list: Vec<Node>,
        distinct_clause: Option<Vec<Node>>,
        from_clause: Vec<Node>,
        where_clause: Option<Box<Node>>,
        values_lists: Option<Vec<Vec<Node>>>,
        group_clause: Vec<Node>,
        having_clause: Option<Box<Node>>,
        sort_clause: Vec<Node>,
        limit_count: Option<Box<Node>>,
        limit_offset: Option<Box<Node>>,
        locking_clause: Vec<Node>,
    },
    RawStmt { stmt: Box<Node> },
}

impl Node {
    /// The variant name, for error messages. Kept in sync with the `enum`
    /// by hand rather than derived — `strum::Display` would pull in a
    /// dependency for a string only ever seen inside an error path.
    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Node::Integer { .. } => "Integer",
            Node::Float { .. } => "Float",
            Node::Null => "Null",
            Node::Str { .. } => "String",
            Node::AStar => "A_Star",
            Node::ParamRef { .. } => "ParamRef",
            Node::AConst { .. } => "A_Const",
            Node::List(_) => "List",
            Node::ColumnRef { .. } => "ColumnRef",
            Node::Alias { .. } => "Alias",
            Node::RangeVar { .. } => "RangeVar",
            Node::TypeName { .. } => "TypeName",
            Node::ColumnDef { .. } => "ColumnDef",
            Node::AExpr { .. } => "A_Expr",
            Node::BoolExpr { .. } => "BoolExpr",
            Node::NullTest { .. } => "NullTest",
            Node::BooleanTest { .. } => "BooleanTest",
            Node::CaseExpr { .. } => "CaseExpr",
            Node::CaseWhen { .. } => "CaseWhen",
            Node::CoalesceExpr { .. } => "CoalesceExpr",
            Node::TypeCast { .. } => "TypeCast",
            Node::SubLink { .. } => "SubLink",
            Node::FuncCall { .. } => "FuncCall",
            Node::RowExpr { .. } => "RowExpr",
            Node::AArrayExpr { .. } => "A_ArrayExpr",
            Node::AIndices { .. } => "A_Indices",
            Node::AIndirection { .. } => "A_Indirection",
            Node::SortBy { .. } => "SortBy",
            Node::JoinExpr { .. } => "JoinExpr",
            Node::RangeSubselect { .. } => "RangeSubselect",
            Node::RangeFunction { .. } => "RangeFunction",
            Node::WindowDef { .. } => "WindowDef",
            Node::CommonTableExpr { .. } => "CommonTableExpr",
            Node::WithClause { .. } => "WithClause",
            Node::ResTarget { .. } => "ResTarget",
            Node::SelectStmt { .. } => "SelectStmt",
            Node::RawStmt { .. } => "RawStmt",
        }
    }

    /// Renders a short debug dump for error reporting, truncated so a huge
    /// subtree doesn't blow up an error message.
    pub(crate) fn debug_dump(&self) -> String {
        let full = format!("{self:?}");
        const MAX: usize = 200;
        if full.len() > MAX {
            format!("{}…", &full[..MAX])
        } else {
            full
        }
    }
}

/// `A_Expr.Kind` — selects which binary-ish expression shape to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AExprKind {
    Op,
    OpAny,
    OpAll,
    Distinct,
    NotDistinct,
    Nullif,
    Of,
    In,
    Like,
    ILike,
    Similar,
    Between,
    NotBetween,
    BetweenSym,
    NotBetweenSym,
    Paren,
}

/// `BoolExpr.Boolop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolExprKind {
    And,
    Or,
    Not,
}

/// `NullTest.Nulltesttype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullTestKind {
    IsNull,
    IsNotNull,
}

/// `BooleanTest.Booltesttype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolTestKind {
    IsTrue,
    IsNotTrue,
    IsFalse,
    IsNotFalse,
    IsUnknown,
    IsNotUnknown,
}

/// `SubLink.SubLinkType`. Only the forms spec.md names get a dedicated
/// rendering; anything else falls into `Other`, which renders as a bare
/// parenthesized subselect exactly like the Go source's `default:` arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubLinkKind {
    Any,
    Exists,
    Other,
}

/// `SortBy.SortbyDir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortByDir {
    Default,
    Asc,
    Desc,
}

/// `JoinExpr.Jointype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

/// `SelectStmt.Op`: `0` for a plain select, `1` for a `UNION` (spec.md's
/// `op == 1` check). `Intersect`/`Except` are accepted in the type for
/// forward-compatibility with the source schema but are not in scope —
/// rendering one fails with `UnsupportedNode`, the same as any other
/// variant outside the supported subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOp {
    None,
    Union,
    Intersect,
    Except,
}
