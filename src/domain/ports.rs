use crate::domain::model::{Principle, Transcript, Variant};
use crate::utils::error::Result;

/// One principle's pair of examples.
pub trait Demonstration {
    fn principle(&self) -> Principle;
    fn run(&self, variant: Variant) -> Result<Transcript>;
}

pub trait Sink {
    fn emit(&mut self, transcript: &Transcript) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ConfigProvider {
    fn principles(&self) -> &[Principle];
    fn variants(&self) -> &[Variant];
    fn output_format(&self) -> OutputFormat;
    fn show_definitions(&self) -> bool;
}
