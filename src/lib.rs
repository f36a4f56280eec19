pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::StdConsole, CliConfig};
pub use crate::core::repl::{dispatch, Outcome, ReplEngine};
pub use crate::domain::ports::Console;
pub use crate::utils::error::{ConvertError, Result};
