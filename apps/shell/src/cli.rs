//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use showcase_kernel::domain::Demo;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "showcase")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Lists and pre-renders the showcase demo pages")]
pub struct Cli {
    /// Configuration file; the extension may be omitted
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every demo name
    List {},
    /// Render demos to standalone HTML documents
    Export {
        /// Demo to export (repeatable); every demo when omitted
        #[arg(long = "demo", short = 'd')]
        demos: Vec<Demo>,
        /// Output directory, overrides `export.out_dir`
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}
