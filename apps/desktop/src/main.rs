#![windows_subsystem = "windows"]

use anyhow::Context;
use showcase_desktop::DesktopApp;
use showcase_kernel::config::load_config;
use showcase_kernel::domain::config::ShowcaseConfig;
use showcase_kernel::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cfg: ShowcaseConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = init_logging(env!("CARGO_PKG_NAME"), &cfg.log)?;
    tracing::info!(demo = %cfg.demo, "Launching desktop showcase");

    DesktopApp::from_config(&cfg).launch(showcase_ui::pages::root(cfg.demo));

    Ok(())
}
