// Domain layer: the vehicle types and the behavior trait they share.

pub mod model;
pub mod ports;
