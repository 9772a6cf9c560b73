// Domain layer: participants, courses and the ports the registry depends on.

pub mod model;
pub mod ports;
