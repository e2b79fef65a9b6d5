// Domain layer: symbols and the seams (ports) the adder is built around.

pub mod model;
pub mod ports;
