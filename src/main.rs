//! Symlist - symbol outlines for source files and folders

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use symlist::SymlistError;
use symlist::app::App;
use symlist::cli::{Cli, Commands, OutputContext, OutputFormat};

fn main() {
    let cli = Cli::parse();
    let errors = error_sink(
        cli.format.as_deref(),
        std::env::var("SYMLIST_OUTPUT_FORMAT").ok().as_deref(),
    );

    // Quiet by default; RUST_LOG=symlist=debug or --verbose for more
    let default_filter = if cli.verbose {
        "symlist=debug"
    } else {
        "symlist=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            errors.print_error(&format!("Failed to create runtime: {e}"));
            std::process::exit(2);
        }
    };

    if let Err(e) = runtime.block_on(async_main(cli)) {
        // Already reported as a warning by the command
        if e
            .downcast_ref::<SymlistError>()
            .is_some_and(SymlistError::is_missing_context)
        {
            std::process::exit(1);
        }
        errors.print_error(&format!("{e:#}"));
        std::process::exit(2);
    }
}

/// Where top-level errors go; the App may not exist yet, so config is not consulted
fn error_sink(flag: Option<&str>, env: Option<&str>) -> OutputContext {
    let format = flag
        .or(env)
        .and_then(|f| f.parse().ok())
        .unwrap_or(OutputFormat::Text);
    OutputContext::new(std::env::current_dir().unwrap_or_default()).with_format(format)
}

async fn async_main(cli: Cli) -> anyhow::Result<()> {
    let app = App::new(cli.format.as_deref(), cli.output)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize: {}", e))?;

    execute_command(cli.command, &app).await
}

async fn execute_command(command: Commands, app: &App) -> anyhow::Result<()> {
    use symlist::cli::commands;

    match command {
        Commands::List(args) => commands::list::execute(args, app).await,
        Commands::Folder(args) => commands::folder::execute(args, app).await,
        Commands::Kinds(args) => commands::kinds::execute(args, app).await,
        Commands::Config(args) => commands::config::execute(args, app).await,
    }
}
