// Adapters layer: concrete sinks the demonstration engine writes to.

pub mod console;
pub mod memory;
