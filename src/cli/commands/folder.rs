//! Folder command implementation
//!
//! Outline of every supported file under a directory, one block per file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::cli::output::OutlineOutput;
use crate::infra::file_filter::{FileFilter, FileFilterConfig};
use crate::models::symbol::{Language, Symbol};
use crate::services::folder::{FolderOutline, render_blocks};

use super::missing_context;

#[derive(Args, Debug)]
pub struct FolderArgs {
    /// Folder to outline (recursively)
    pub dir: PathBuf,

    /// Exclude files matching a gitignore-style glob (repeatable)
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Include hidden files and directories
    #[arg(long)]
    pub hidden: bool,
}

pub async fn execute(args: FolderArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let folder_cfg = &app.config().folder;
    let dir = ctx.resolve(&args.dir);

    if !dir.is_dir() {
        return Err(missing_context(
            ctx,
            format!("There must be a folder to list: {}", args.dir.display()),
        ));
    }

    let mut exclude_patterns = folder_cfg.exclude.clone();
    exclude_patterns.extend(args.exclude);

    let filter = FileFilter::new(FileFilterConfig {
        root: dir.clone(),
        respect_gitignore: folder_cfg.respect_gitignore,
        respect_symlist_ignore: true,
        exclude_patterns,
        include_hidden: args.hidden || folder_cfg.include_hidden,
    });
    let files = filter.discover_files(&Language::all_extensions());
    tracing::debug!("Found {} candidate files under {}", files.len(), dir.display());

    let collected = FolderOutline::new(app.provider.as_ref())
        .with_concurrency(folder_cfg.concurrency)
        .with_max_file_size(folder_cfg.max_file_size_bytes())
        .collect(files)
        .await;

    // Headers are relative to the project root, like every other path we print
    let outline = render_blocks(app.root(), &collected)?;
    let symbols = collected.iter().map(|f| Symbol::count_all(&f.symbols)).sum();

    ctx.print_outline(OutlineOutput {
        target: ctx.relative_path(&dir),
        files: collected.len(),
        symbols,
        outline: &outline,
    })?;

    Ok(())
}
