//! Command line front-end: lists the demos and pre-renders them to static HTML.

pub mod cli;
pub mod export;
