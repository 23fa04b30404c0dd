//! Generate the dispatch table from the `directives.spec` definitions.
//!
//! The table is a Rust expression of type `&[Form]`. Forms are sorted by the
//! length of their names, longest first, so a short name (like `d`) never
//! shadows a longer one (like `dddd`). The sort is stable: forms with names
//! of the same length keep the order of the source file.

use crate::DirectiveSpec;
use proc_macro2::TokenStream;
use quote::quote;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Generate the table code.
pub fn generate_forms(mut output: impl Write, specs: &[DirectiveSpec]) -> io::Result<()> {
    let mut specs: Vec<&DirectiveSpec> = specs.iter().collect();
    specs.sort_by_key(|spec| Reverse(spec.name().len()));

    check_conflicts(&specs)?;

    let forms = specs
        .iter()
        .map(|spec| {
            let usage = &spec.usage;
            let name = spec.name();
            let action: TokenStream = spec.action.parse().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid action for '{}': {:?}", spec.usage, e),
                )
            })?;

            Ok(quote! {
                Form {
                    usage: #usage,
                    name: #name,
                    action: #action,
                }
            })
        })
        .collect::<io::Result<Vec<TokenStream>>>()?;

    let table = quote! {
        &[ #(#forms),* ]
    };

    writeln!(output, "{}", table)
}

/// Two forms with the same name would make the second one unreachable.
fn check_conflicts(specs: &[&DirectiveSpec]) -> io::Result<()> {
    let mut names = BTreeMap::new();
    for spec in specs {
        if let Some(other) = names.insert(spec.name(), &spec.usage) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("conflicts: {} - {}", spec.usage, other),
            ));
        }
    }

    Ok(())
}
