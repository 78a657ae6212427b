//! Kernel utilities shared across the applications.
//! Keep this crate lightweight; it re-exports the domain models and owns config loading
//! and the logging bootstrap shared by the binaries.
//!
//! ## Config loading
//! ```rust,no_run
//! use showcase_kernel::config::load_config;
//! use showcase_kernel::domain::config::ShowcaseConfig;
//!
//! let cfg: ShowcaseConfig = load_config(Some("showcase")).unwrap_or_default();
//! ```

pub mod config;
mod error;
pub mod logging;

pub use crate::error::{ConfigError, ConfigErrorExt, Result};
pub use showcase_domain as domain;
