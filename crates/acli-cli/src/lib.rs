//! acli CLI library
//!
//! This library provides the command tree, prompts, and terminal output
//! for the acli binary. The configuration store itself lives in
//! `acli-core`; this crate is the glue that parses arguments, reads the
//! environment, and renders results.

pub mod cli;
pub mod ui;

pub use cli::{run, Cli};
pub use ui::{StyledOutput, Table, Theme};
