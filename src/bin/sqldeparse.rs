// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Reads a JSON-encoded array of statement nodes from a file or stdin and
//! prints the deparsed SQL. This binary does no parsing of its own — the
//! input is expected to already be an AST, not raw SQL text.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pg_deparser::ast::Node;
use pg_deparser::{deparse_tree_with_options, DeparseOptions};

#[derive(Parser, Debug)]
#[command(about = "Deparse a JSON PostgreSQL statement AST back into SQL text")]
struct Args {
    /// Path to a JSON file holding an array of statement nodes. Reads stdin
    /// when omitted.
    input: Option<PathBuf>,

    /// Separator joined between deparsed statements.
    #[arg(long, default_value = "; ")]
    separator: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let tree: Vec<Node> = serde_json::from_str(&input).context("parsing input as a JSON node array")?;

    let options = DeparseOptions { statement_separator: args.separator };

    let sql = deparse_tree_with_options(&tree, &options).context("deparsing statement tree")?;
    println!("{sql}");
    Ok(())
}
