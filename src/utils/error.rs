use thiserror::Error;

use crate::domain::model::Category;
use crate::domain::units;

/// Everything that can go wrong while handling a command line. All variants
/// except `Io` are user-input errors: their `Display` text is the exact line
/// printed back to the user.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Error: Invalid format.")]
    InvalidFormat,

    #[error("Error: Invalid AMOUNT:{0}. Please enter a decimal")]
    InvalidAmount(String),

    #[error("Error: Invalid SOURCE_UNIT:{0}. Valid units: {valid}", valid = units::unit_list())]
    InvalidSourceUnit(String),

    #[error("Error: Invalid DESTINATION_UNIT:{0}. Valid units: {valid}", valid = units::unit_list())]
    InvalidDestinationUnit(String),

    #[error("Error: Invalid connector:{0}. Please use 'in'")]
    InvalidConnector(String),

    #[error(
        "Error: Invalid categories. Tried to convert {source_category} {source_unit} to {dest_category} {dest_unit}"
    )]
    CategoryMismatch {
        source_category: Category,
        source_unit: &'static str,
        dest_category: Category,
        dest_unit: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
