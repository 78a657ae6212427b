//! # UI
//!
//! Presentational components for the showcase demos. Every component is a pure
//! function of its props; the single piece of behavior is the hero button alert.
//!
//! * [`components`] holds the reusable leaves (`Button`, `Card`, `FeatureCard`) and
//!   the static sections (`Navbar`, `Hero`, `Footer`).
//! * [`pages`] composes them into the three demo roots.
//! * [`render`] pre-renders a demo to HTML with `dioxus-ssr`.
//! * [`style`] owns the utility-class strings.
//!
//! ```rust
//! use showcase_domain::Demo;
//!
//! let html = showcase_ui::render::render_page(Demo::Landing);
//! assert!(html.contains("Get Started"));
//! ```

pub mod components;
pub mod pages;
pub mod render;
pub mod style;

pub use showcase_domain as domain;
