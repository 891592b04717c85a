pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod principles;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{console::ConsoleSink, memory::MemorySink};
pub use config::{RunSettings, TomlConfig};
pub use crate::core::engine::DemoEngine;
pub use domain::model::{Principle, Transcript, Variant};
pub use domain::ports::{ConfigProvider, Demonstration, OutputFormat, Sink};
pub use utils::error::{Result, SolidError};
