//! Command implementations for the CLI.

mod config;
mod convert;
mod panel;

pub use config::cmd_config;
pub use convert::cmd_convert;
pub use panel::cmd_panel;
