use crate::core::convert::{convert, render};
use crate::domain::ports::Console;
use crate::domain::units;
use crate::utils::error::Result;
use crate::utils::validation::parse_command;

/// Shown before every read; no trailing newline.
pub const PROMPT: &str = "Convert [AMOUNT SOURCE_UNIT in DESTINATION_UNIT, or (q)uit]: ";

/// Entering exactly this line (nothing else on it) ends the session.
pub const QUIT: &str = "q";

/// What one input line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A line to print back: either a conversion result or an error message.
    Reply(String),
    /// The quit sentinel; the session ends with no further output.
    Quit,
}

/// Handles a single line of user input.
///
/// # Examples
/// ```
/// use unitconv::core::repl::{dispatch, Outcome};
///
/// assert_eq!(
///     dispatch("1 m in km"),
///     Outcome::Reply("1 m = 0.001000 km".to_string())
/// );
/// assert_eq!(dispatch("q"), Outcome::Quit);
/// ```
pub fn dispatch(line: &str) -> Outcome {
    if line == QUIT {
        return Outcome::Quit;
    }

    match parse_command(line) {
        Ok(command) => {
            let converted = convert(&command);
            Outcome::Reply(render(&command, converted))
        }
        Err(err) => Outcome::Reply(err.to_string()),
    }
}

/// The greeting printed once at startup, framed by blank lines.
///
/// The listing labels are the user-facing names: the mass units print under
/// "Weights" and the liquid units under "Volumes", regardless of how the
/// table tags them.
pub fn banner() -> String {
    let mut banner = String::from(
        "\nWelcome to the Unit Converter!\n\
         You can convert distances, weights and volumes to one another, but only\n\
         within units of the same category, which are shown below. E.g.: 1 mi in ft\n\n",
    );
    banner.push_str(&format!("   Distances: {}\n", units::DISTANCE_UNITS.join(" ")));
    banner.push_str(&format!("   Weights: {}\n", units::VOLUME_UNITS.join(" ")));
    banner.push_str(&format!("   Volumes: {}\n", units::WEIGHT_UNITS.join(" ")));
    banner
}

/// The read-eval-print loop, generic over the console it talks to.
pub struct ReplEngine<C: Console> {
    console: C,
}

impl<C: Console> ReplEngine<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Prints the banner, then keeps prompting until the quit sentinel or
    /// the end of input. Only console failures end the loop early.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("🚀 Starting conversion session");
        self.console.write_line(&banner())?;

        loop {
            let line = match self.console.read_line(PROMPT)? {
                Some(line) => line,
                // Input exhausted; same as quitting.
                None => break,
            };

            tracing::debug!("Handling command: {:?}", line);

            match dispatch(&line) {
                Outcome::Reply(reply) => self.console.write_line(&reply)?,
                Outcome::Quit => break,
            }
        }

        tracing::info!("✅ Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quits_only_on_the_exact_sentinel() {
        assert_eq!(dispatch("q"), Outcome::Quit);
        // Anything else, including padded or uppercased variants, is treated
        // as a command and fails validation.
        assert_eq!(
            dispatch("q "),
            Outcome::Reply("Error: Invalid format.".to_string())
        );
        assert_eq!(
            dispatch(" q"),
            Outcome::Reply("Error: Invalid format.".to_string())
        );
        assert_eq!(
            dispatch("Q"),
            Outcome::Reply("Error: Invalid format.".to_string())
        );
    }

    #[test]
    fn replies_with_the_conversion_result() {
        assert_eq!(
            dispatch("1.5 km in mi"),
            Outcome::Reply("1.5 km = 0.932057 mi".to_string())
        );
    }

    #[test]
    fn replies_with_the_validation_error_verbatim() {
        assert_eq!(
            dispatch("1 m to km"),
            Outcome::Reply("Error: Invalid connector:to. Please use 'in'".to_string())
        );
        assert_eq!(
            dispatch("1 g in L"),
            Outcome::Reply(
                "Error: Invalid categories. Tried to convert Volume g to Weight L".to_string()
            )
        );
    }

    #[test]
    fn banner_lists_units_under_user_facing_labels() {
        let banner = banner();
        assert!(banner.starts_with('\n'));
        assert!(banner.ends_with('\n'));
        assert!(banner.contains("   Distances: m cm mm km in ft yd mi\n"));
        assert!(banner.contains("   Weights: g kg mg oz lb\n"));
        assert!(banner.contains("   Volumes: L mL floz cup pint qt gal\n"));
        assert!(banner.contains("E.g.: 1 mi in ft"));
    }

    #[test]
    fn prompt_names_the_expected_shape() {
        assert_eq!(
            PROMPT,
            "Convert [AMOUNT SOURCE_UNIT in DESTINATION_UNIT, or (q)uit]: "
        );
    }
}
