pub mod convert;
pub mod repl;

pub use crate::domain::model::{Category, Command};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
