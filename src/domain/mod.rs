// Domain layer: record model and ports. Generation and export live in core.

pub mod model;
pub mod ports;
