// Domain layer: the adoption record and the terminal port. No external dependencies beyond std.

pub mod model;
pub mod ports;
