// Domain layer: payment order model, wire names and collaborator ports.

pub mod model;
pub mod ports;
pub mod wire;
