use crate::domain::model::Command;
use crate::domain::units;
use crate::utils::error::{ConvertError, Result};

/// The literal token that must separate the source and destination units.
pub const CONNECTOR: &str = "in";

/// Checks one raw command line and parses it into a [`Command`].
///
/// The checks run in a fixed order and the first failure wins: token count,
/// amount, source unit, destination unit, connector, category agreement.
/// Note that both unit checks run before the connector check.
pub fn parse_command(line: &str) -> Result<Command> {
    let args: Vec<&str> = line.split_whitespace().collect();
    let (raw_amount, source_token, connector, dest_token) = match args[..] {
        [amount, source, connector, dest] => (amount, source, connector, dest),
        _ => return Err(ConvertError::InvalidFormat),
    };

    let amount: f64 = raw_amount
        .parse()
        .map_err(|_| ConvertError::InvalidAmount(raw_amount.to_string()))?;

    let source = units::lookup(source_token)
        .ok_or_else(|| ConvertError::InvalidSourceUnit(source_token.to_string()))?;
    let dest = units::lookup(dest_token)
        .ok_or_else(|| ConvertError::InvalidDestinationUnit(dest_token.to_string()))?;

    if connector != CONNECTOR {
        return Err(ConvertError::InvalidConnector(connector.to_string()));
    }

    if source.category != dest.category {
        return Err(ConvertError::CategoryMismatch {
            source_category: source.category,
            source_unit: source.symbol,
            dest_category: dest.category,
            dest_unit: dest.symbol,
        });
    }

    Ok(Command {
        raw_amount: raw_amount.to_string(),
        amount,
        source,
        dest,
    })
}
