//! Config command implementation

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::app::App;
use crate::models::config::SymlistConfig;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Initialize configuration file
    Init {
        /// Initialize global config (~/.config/symlist)
        #[arg(long)]
        global: bool,

        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    Show {
        /// Show global config only
        #[arg(long)]
        global: bool,
    },

    /// Show config file path
    Path {
        /// Show global config path
        #[arg(long)]
        global: bool,
    },
}

#[derive(Serialize)]
struct ConfigInitResponse {
    status: &'static str,
    path: String,
    level: &'static str,
}

#[derive(Serialize)]
struct ConfigShowResponse<'a> {
    level: &'static str,
    config: &'a SymlistConfig,
}

#[derive(Serialize)]
struct ConfigPathResponse {
    level: &'static str,
    path: String,
    exists: bool,
}

pub async fn execute(args: ConfigArgs, app: &App) -> Result<()> {
    let ctx = &app.output;

    match args.command {
        ConfigCommand::Init { global, force } => {
            let level = if global { "global" } else { "project" };
            let path = app.config_service.init(global, force).await?;
            ctx.print_success(ConfigInitResponse {
                status: "created",
                path: if global {
                    path.display().to_string()
                } else {
                    ctx.relative_path(&path)
                },
                level,
            });
        }

        ConfigCommand::Show { global } => {
            let level = if global { "global" } else { "merged" };
            let config = app.config_service.load(global).await?;
            ctx.print_success(ConfigShowResponse {
                level,
                config: &config,
            });
        }

        ConfigCommand::Path { global } => {
            let level = if global { "global" } else { "project" };
            let path = app.config_service.config_path(global);
            ctx.print_success(ConfigPathResponse {
                level,
                path: if global {
                    path.display().to_string()
                } else {
                    ctx.relative_path(&path)
                },
                exists: path.exists(),
            });
        }
    }

    Ok(())
}
