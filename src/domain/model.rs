use std::fmt;

use crate::domain::units::UnitDef;

/// Grouping tag for units; conversions are only allowed within one category.
///
/// `Weight` tags the liquid units and `Volume` the mass units. The tag names
/// are part of the mismatch error output, so they stay exactly as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Distance,
    Volume,
    Weight,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Distance => "Distance",
            Category::Volume => "Volume",
            Category::Weight => "Weight",
        };
        f.write_str(name)
    }
}

/// A conversion request that already passed validation.
#[derive(Debug, Clone)]
pub struct Command {
    /// The amount token exactly as the user typed it; echoed back in the
    /// result line.
    pub raw_amount: String,
    pub amount: f64,
    pub source: &'static UnitDef,
    pub dest: &'static UnitDef,
}
