use crate::demo::Demo;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub demo: Demo,
    pub window: WindowConfig,
    pub export: ExportConfig,
    pub theme: ThemeConfig,
    pub log: LogConfig,
}

/// Native window settings for the desktop launcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Static export settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
}

/// Utility-class stylesheet injected into every document head.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub stylesheet: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: Option<PathBuf>,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Showcase".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { out_dir: PathBuf::from("dist") }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { stylesheet: "https://cdn.tailwindcss.com".to_owned() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), dir: None }
    }
}
