//! Kinds command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::App;
use crate::models::symbol::SymbolKind;
use crate::services::outline::kind_label;

#[derive(Args, Debug)]
pub struct KindsArgs {}

#[derive(Serialize)]
struct KindEntry {
    lsp: u32,
    label: &'static str,
}

fn kind_table() -> Vec<KindEntry> {
    SymbolKind::ALL
        .iter()
        .filter_map(|kind| {
            kind_label(*kind).map(|label| KindEntry {
                lsp: kind.to_lsp(),
                label,
            })
        })
        .collect()
}

pub async fn execute(_args: KindsArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let table = kind_table();

    if ctx.is_json() {
        ctx.print_success(serde_json::json!({ "count": table.len(), "kinds": table }));
    } else {
        for entry in &table {
            println!("{:>2}  {}", entry.lsp, entry.label);
        }
    }
    Ok(())
}
