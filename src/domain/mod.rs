// Domain layer: value types and the clock port. No I/O here.

pub mod model;
pub mod ports;
