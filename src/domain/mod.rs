// Domain layer: core models and ports. No dependencies beyond std.

pub mod model;
pub mod ports;
