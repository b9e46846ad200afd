// Domain layer: fixture records, query types and ports (interfaces).

pub mod model;
pub mod ports;
