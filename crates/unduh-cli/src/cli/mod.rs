//! CLI for resolving TikTok and Facebook media links.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unduh_core::config::{self, UnduhConfig};
use unduh_core::platform::Platform;

use commands::{run_batch, run_completions, run_config, run_manpage, run_resolve};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "unduh")]
#[command(about = "Resolve TikTok and Facebook post URLs into direct media links", long_about = None)]
pub struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from PATH instead of ~/.config/unduh/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a TikTok video or photo slideshow.
    Tiktok {
        /// TikTok post URL.
        url: String,
    },

    /// Resolve a Facebook video into quality-labelled links.
    Facebook {
        /// Facebook or fb.watch URL.
        url: String,
    },

    /// Resolve a URL, picking the platform from its domain.
    Resolve {
        /// TikTok or Facebook URL.
        url: String,
    },

    /// Resolve one URL per line from FILE (or stdin), continuing past failures.
    Batch {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Show the config file path and the effective configuration.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff) to stdout.
    Manpage,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let json = cli.json;

        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Manpage => return run_manpage(),
            _ => {}
        }

        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Tiktok { url } => {
                run_resolve(&cfg, Some(Platform::TikTok), &url, json).await?
            }
            CliCommand::Facebook { url } => {
                run_resolve(&cfg, Some(Platform::Facebook), &url, json).await?
            }
            CliCommand::Resolve { url } => run_resolve(&cfg, None, &url, json).await?,
            CliCommand::Batch { file } => run_batch(&cfg, file.as_deref(), json).await?,
            CliCommand::Config => run_config(cli.config.as_deref(), &cfg)?,
            CliCommand::Completions { .. } | CliCommand::Manpage => {}
        }

        Ok(())
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<UnduhConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
