//! Command handler modules for the Twenty-One CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Dependency injection: output streams (`&mut dyn Write`) and, for
//!   interactive commands, stdin (`&mut dyn BufRead`) passed as parameters
//! - Error propagation: all errors propagated via the `CliError` enum

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
