//! CLI command implementations for kw-templates.
//!
//! Each module corresponds to a subcommand (`kw-templates <command>`).

pub mod list;
pub mod render;
