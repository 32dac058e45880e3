//! One module per subcommand. Handlers translate arguments into core calls
//! and print the result; no generation logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod names;
