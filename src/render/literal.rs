// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Leaf and marker renderers: the nodes with no children to recurse into.

use crate::context::{DeparseContext, RenderCtx};
use crate::error::Result;

pub(crate) fn integer(ival: i64) -> Result<String> {
    Ok(ival.to_string())
}

pub(crate) fn float(str: &str) -> Result<String> {
    Ok(str.to_owned())
}

pub(crate) fn null() -> Result<String> {
    Ok("NULL".to_owned())
}

pub(crate) fn a_star() -> Result<String> {
    Ok("*".to_owned())
}

pub(crate) fn param_ref(number: i32) -> Result<String> {
    if number == 0 {
        Ok("?".to_owned())
    } else {
        Ok(number.to_string())
    }
}

/// Renders a `String` leaf, quoting it per the current context — see
/// the context table in the crate docs.
pub(crate) fn string(str: &str, ctx: RenderCtx) -> Result<String> {
    Ok(match ctx.mode {
        DeparseContext::Select => format!(r#""{str}""#),
        DeparseContext::AConst => format!("'{}'", str.replace('\'', "''")),
        DeparseContext::FuncCall | DeparseContext::TypeName | DeparseContext::Operator | DeparseContext::DefnameAs => {
            str.to_owned()
        }
        DeparseContext::Unset | DeparseContext::AExpr => format!(r#""{}""#, str.replace('"', r#""""#)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DeparseOptions;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_quoting_by_context() {
        let opts = DeparseOptions::default();
        let base = RenderCtx::new(&opts);
        assert_eq!(string("a", base.with_mode(DeparseContext::Select)).unwrap(), r#""a""#);
        assert_eq!(string("it's", base.with_mode(DeparseContext::AConst)).unwrap(), "'it''s'");
        assert_eq!(string("pg_catalog", base.with_mode(DeparseContext::FuncCall)).unwrap(), "pg_catalog");
        assert_eq!(string(r#"a"b"#, base).unwrap(), r#""a""b""#);
    }

    #[test]
    fn param_ref_zero_is_placeholder() {
        assert_eq!(param_ref(0).unwrap(), "?");
        assert_eq!(param_ref(3).unwrap(), "3");
    }
}
