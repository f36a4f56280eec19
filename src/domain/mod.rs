// Domain layer: the unit table, core models and ports (interfaces).

pub mod model;
pub mod ports;
pub mod units;
