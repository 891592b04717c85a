pub mod engine;

pub use crate::domain::model::{Principle, Transcript, Variant};
pub use crate::domain::ports::{ConfigProvider, Demonstration, OutputFormat, Sink};
pub use crate::utils::error::Result;
