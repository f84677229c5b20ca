//! List command implementation
//!
//! Outline of a single file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::cli::output::OutlineOutput;
use crate::error::ProviderError;
use crate::models::symbol::{Language, Symbol};
use crate::services::document_symbols::{JsonSymbolProvider, SymbolSource};
use crate::services::outline::{SourceLines, render};
use crate::services::symbols::SymbolProvider;

use super::missing_context;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// File to outline
    pub file: PathBuf,

    /// Read symbols from an LSP documentSymbol JSON result instead of
    /// parsing the file ('-' for stdin)
    #[arg(long, value_name = "JSON")]
    pub symbols: Option<String>,
}

pub async fn execute(args: ListArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let path = ctx.resolve(&args.file);

    if !path.is_file() {
        return Err(missing_context(
            ctx,
            format!("There must be a file to list: {}", args.file.display()),
        ));
    }

    let text = tokio::fs::read_to_string(&path).await?;

    let replay;
    let provider: &dyn SymbolProvider = match &args.symbols {
        Some(source) => {
            replay = JsonSymbolProvider::new(SymbolSource::from_arg(source));
            &replay
        }
        None => app.provider.as_ref(),
    };

    let symbols = provider
        .document_symbols(&path, &text)
        .await?
        .ok_or_else(|| ProviderError::UnsupportedLanguage(Language::from_path(&path)))?;

    tracing::debug!(
        "{} top-level symbols in {}",
        symbols.len(),
        path.display()
    );

    let outline = render(&symbols, &SourceLines::from_text(&text))?;
    ctx.print_outline(OutlineOutput {
        target: ctx.relative_path(&path),
        files: 1,
        symbols: Symbol::count_all(&symbols),
        outline: &outline,
    })?;

    Ok(())
}
