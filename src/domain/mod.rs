// Domain layer: core models and ports (interfaces). No external dependencies.

pub mod model;
pub mod ports;
