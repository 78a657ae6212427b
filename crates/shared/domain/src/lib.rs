//! # Domain Models
//!
//! Plain display records shared by every demo page, the fixed content lists the
//! pages iterate, and the configuration model loaded by the applications.
//! Keep it lean: no I/O and no rendering, just data and simple helpers.

pub mod color;
pub mod config;
pub mod content;
pub mod demo;

pub use color::ColorToken;
pub use content::{CardRecord, FeatureRecord};
pub use demo::Demo;
