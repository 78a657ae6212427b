use anyhow::{Context, Result};
use showcase_kernel::domain::Demo;
use showcase_kernel::domain::config::ThemeConfig;
use showcase_ui::render::render_document;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::info;

/// The requested demos, or all of them when none were named. Duplicates are dropped.
#[must_use]
pub fn select(requested: &[Demo]) -> Vec<Demo> {
    if requested.is_empty() {
        return Demo::iter().collect();
    }
    let mut selected = Vec::with_capacity(requested.len());
    for demo in requested {
        if !selected.contains(demo) {
            selected.push(*demo);
        }
    }
    selected
}

/// Writes `<out_dir>/<demo>.html` for each demo and returns the written paths.
///
/// # Errors
/// Returns an error if the directory cannot be created or a file cannot be written.
pub fn export(demos: &[Demo], out_dir: &Path, theme: &ThemeConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    demos
        .iter()
        .map(|&demo| {
            let path = out_dir.join(demo.file_name());
            let html = render_document(demo, theme);
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(demo = %demo, path = %path.display(), bytes = html.len(), "Exported page");
            Ok(path)
        })
        .collect()
}
