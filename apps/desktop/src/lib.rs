//! Native window launcher for the showcase demos.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use showcase_kernel::domain::config::{ShowcaseConfig, ThemeConfig};
use showcase_ui::render::head_extras;
use tracing::info;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    theme: ThemeConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&ShowcaseConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Window title, size and stylesheet taken from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &ShowcaseConfig) -> Self {
        Self {
            title: config.window.title.clone(),
            width: config.window.width,
            height: config.window.height,
            theme: config.theme.clone(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Markup injected into the document head: viewport and the utility-class stylesheet.
    #[must_use]
    pub fn custom_head(&self) -> String {
        head_extras(&self.theme)
    }

    /// Opens the window and mounts `root`. Blocks until the window is closed.
    pub fn launch(self, root: fn() -> Element) {
        info!(title = %self.title, width = self.width, height = self.height, "Opening window");

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(self.custom_head());

        LaunchBuilder::desktop().with_cfg(cfg).launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_window_config() {
        let app = DesktopApp::new();
        assert_eq!(app.title, "Showcase");
        assert!((app.width - 1200.0).abs() < f64::EPSILON);
        assert!((app.height - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_overrides_title_and_size() {
        let app = DesktopApp::new().with_title("Gallery").with_size(640.0, 480.0);
        assert_eq!(app.title, "Gallery");
        assert!((app.width - 640.0).abs() < f64::EPSILON);
        assert!((app.height - 480.0).abs() < f64::EPSILON);
    }

    #[test]
    fn head_loads_the_stylesheet() {
        let head = DesktopApp::new().custom_head();
        assert!(head.contains(r#"name="viewport""#));
        assert!(head.contains("cdn.tailwindcss.com"));
    }
}
