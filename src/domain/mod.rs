// Domain layer: shared value types and the formatter ports. No I/O.

pub mod model;
pub mod ports;
