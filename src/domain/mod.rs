// Domain layer: demonstration model, ports, and the animal hierarchy shared by the OCP/LSP examples.

pub mod animals;
pub mod model;
pub mod ports;
