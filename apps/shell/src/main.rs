#![allow(clippy::print_stdout)]

use anyhow::{Context, Result};
use clap::Parser;
use showcase_kernel::config::load_config;
use showcase_kernel::domain::Demo;
use showcase_kernel::domain::config::ShowcaseConfig;
use showcase_kernel::logging::init_logging;
use showcase_shell::cli::{Cli, Command};
use showcase_shell::export;
use strum::IntoEnumIterator;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: ShowcaseConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = init_logging(env!("CARGO_PKG_NAME"), &cfg.log)?;

    match cli.command {
        Command::List {} => {
            for demo in Demo::iter() {
                println!("{demo}");
            }
        },
        Command::Export { demos, out } => {
            let out_dir = out.unwrap_or_else(|| cfg.export.out_dir.clone());
            for path in export::export(&export::select(&demos), &out_dir, &cfg.theme)? {
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}
