use crate::domain::model::Command;

/// Converts through the base unit of the category: dividing by the source
/// factor yields the base amount, multiplying by the destination factor
/// yields the destination amount. No rounding happens here.
pub fn convert(command: &Command) -> f64 {
    command.amount / command.source.factor * command.dest.factor
}

/// Renders the result line. The left-hand side echoes the amount exactly as
/// the user typed it; the converted value is fixed to six decimal places.
pub fn render(command: &Command, converted: f64) -> String {
    format!(
        "{} {} = {:.6} {}",
        command.raw_amount, command.source.symbol, converted, command.dest.symbol
    )
}
