mod commands;
mod handlers;

pub use commands::{Cli, Commands, ReportAction, ReportCommand};
pub use handlers::{handle_list, handle_recent, handle_report, handle_reset, handle_search};
