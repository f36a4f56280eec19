use crate::utils::error::Result;

/// The terminal seam of the REPL. Production uses [`crate::StdConsole`];
/// tests script it.
pub trait Console {
    /// Shows the prompt (no trailing newline) and reads the next input line,
    /// with its trailing line break removed but interior whitespace intact.
    /// Returns `Ok(None)` when input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Writes one line of user-visible output.
    fn write_line(&mut self, line: &str) -> Result<()>;
}
