//! CLI for xcomp.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use xcomp_core::config::{self, XcompConfig};

use commands::{
    run_completions, run_download, run_generate, run_init_dir, run_manpage, run_merge,
    run_prepare,
};

/// Top-level CLI for xcomp.
#[derive(Debug, Parser)]
#[command(name = "xcomp")]
#[command(
    about = "Run the XMPP compliance checker over DOAP files and merge badges into listings",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/xcomp/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the staging directory for downloads and DOAP files.
    #[arg(long, global = true, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Override the directory holding the listing JSON files.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download suite and checker, generate compliance_suite.json, enrich all listings.
    Prepare,

    /// Download one URL with the configured size cap and timeout.
    Download {
        /// HTTP/HTTPS URL to fetch.
        url: String,
        /// Destination file.
        dest: PathBuf,
    },

    /// Regenerate compliance_suite.json from the already downloaded checker and suite.
    Generate,

    /// Run the checker over every DOAP file and enrich the listings.
    Merge,

    /// Remove a directory's contents by deleting and recreating it.
    InitDir {
        /// Directory to reset.
        path: PathBuf,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Manpage,
}

impl Cli {
    /// Load the config file and apply directory overrides.
    fn load_config(&self) -> Result<XcompConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        if let Some(dir) = &self.download_dir {
            cfg.download_dir = dir.clone();
        }
        if let Some(dir) = &self.data_dir {
            cfg.data_dir = dir.clone();
        }
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Prepare => run_prepare(&cli.load_config()?)?,
            CliCommand::Download { url, dest } => run_download(&cli.load_config()?, url, dest)?,
            CliCommand::Generate => run_generate(&cli.load_config()?)?,
            CliCommand::Merge => run_merge(&cli.load_config()?)?,
            CliCommand::InitDir { path } => run_init_dir(path)?,
            CliCommand::Completions { shell } => run_completions(*shell)?,
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
