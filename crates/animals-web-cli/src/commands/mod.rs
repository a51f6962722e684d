//! CLI command implementations for animals-web.
//!
//! Each module corresponds to a subcommand (`animals-web <command>`).

pub mod init;
pub mod render;
