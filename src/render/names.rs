// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Renderers for identifiers, table references and type names.

use itertools::Itertools;

use crate::ast::Node;
use crate::context::{DeparseContext, RenderCtx};
use crate::error::{DeparseError, Result};
use crate::render::{render, render_list};

pub(crate) fn column_ref(fields: &[Node], ctx: RenderCtx) -> Result<String> {
    Ok(render_list(fields, ctx)?.join("."))
}

pub(crate) fn alias(aliasname: &str, colnames: Option<&[Node]>, ctx: RenderCtx) -> Result<String> {
    match colnames {
        Some(colnames) if !colnames.is_empty() => {
            Ok(format!("{aliasname}({})", render_list(colnames, ctx)?.join(", ")))
        }
        _ => Ok(aliasname.to_owned()),
    }
}

pub(crate) fn range_var(
    schemaname: Option<&str>,
    relname: &str,
    inh: bool,
    alias_node: Option<&Node>,
    ctx: RenderCtx,
) -> Result<String> {
    let mut output = Vec::new();
    if !inh {
        output.push("ONLY".to_owned());
    }
    output.push(match schemaname {
        Some(schema) => format!(r#""{schema}"."{relname}""#),
        None => format!(r#""{relname}""#),
    });
    if let Some(alias_node) = alias_node {
        output.push(render(alias_node, ctx)?);
    }
    Ok(output.join(" "))
}

pub(crate) fn column_def(
    colname: &str,
    type_name: &Node,
    raw_default: Option<&Node>,
    constraints: Option<&[Node]>,
    ctx: RenderCtx,
) -> Result<String> {
    let mut output = vec![colname.to_owned(), render(type_name, ctx)?];
    if let Some(raw_default) = raw_default {
        output.push("USING".to_owned());
        output.push(render(raw_default, ctx)?);
    }
    if let Some(constraints) = constraints {
        output.extend(render_list(constraints, ctx)?);
    }
    Ok(output.join(" "))
}

pub(crate) fn type_name(
    names: &[Node],
    typmods: Option<&[Node]>,
    setof: bool,
    array_bounds: Option<&[Node]>,
    ctx: RenderCtx,
) -> Result<String> {
    let name_items = render_list(names, ctx.with_mode(DeparseContext::TypeName))?;
    let typmod_str = match typmods {
        Some(typmods) if !typmods.is_empty() => render_list(typmods, ctx)?.join(", "),
        _ => String::new(),
    };

    let mut base = cast_type_name(&name_items, &typmod_str)?;
    if setof {
        base = format!("SETOF {base}");
    }
    if array_bounds.is_some_and(|bounds| !bounds.is_empty()) {
        base = format!("{base}[]");
    }
    Ok(base)
}

/// The `pg_catalog.*` → canonical-name cast table.
fn cast_type_name(names: &[String], typmods: &str) -> Result<String> {
    let [first, rest @ ..] = names else {
        return Err(DeparseError::UnsupportedType { name: String::new() });
    };
    if first != "pg_catalog" {
        return Ok(names.iter().join("."));
    }
    let Some(base) = rest.first() else {
        return Err(DeparseError::UnsupportedType { name: first.clone() });
    };
    Ok(match base.as_str() {
        "bpchar" => format!("char({typmods})"),
        "varchar" => {
            if typmods.is_empty() {
                "varchar".to_owned()
            } else {
                format!("varchar({typmods})")
            }
        }
        "numeric" => {
            if typmods.is_empty() {
                "numeric".to_owned()
            } else {
                format!("numeric({typmods})")
            }
        }
        "bool" => "boolean".to_owned(),
        "int2" => "smallint".to_owned(),
        "int4" => "int".to_owned(),
        "int8" => "bigint".to_owned(),
        "real" | "float4" => "real".to_owned(),
        "float8" => "double".to_owned(),
        "time" => "time".to_owned(),
        "timetz" => "time with time zone".to_owned(),
        "timestamp" => "timestamp".to_owned(),
        "timestamptz" => "timestamp with time zone".to_owned(),
        other => return Err(DeparseError::UnsupportedType { name: other.to_owned() }),
    })
}
