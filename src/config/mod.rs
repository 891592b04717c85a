pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat, Principle, Variant};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_one_of, validate_unique, Validate};
use serde::Serialize;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "solid-demos")]
#[command(about = "Paired violation/compliant examples of the five SOLID principles")]
pub struct CliConfig {
    #[arg(
        short,
        long = "principle",
        value_delimiter = ',',
        help = "Principles to run (srp, ocp, lsp, isp, dip); defaults to all"
    )]
    pub principles: Vec<Principle>,

    #[arg(
        long = "variant",
        value_delimiter = ',',
        help = "Halves to run (violation, compliant); defaults to both"
    )]
    pub variants: Vec<Variant>,

    #[arg(long, value_enum, help = "Output format for transcripts")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "TOML file with [demo], [output] and [logging] tables")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Do not print the one-line definition of each principle")]
    pub no_definitions: bool,

    #[arg(long, help = "List the available principles and exit")]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 最終執行設定：預設值 ← TOML 設定檔 ← 命令列參數
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSettings {
    pub principles: Vec<Principle>,
    pub variants: Vec<Variant>,
    pub format: OutputFormat,
    pub show_definitions: bool,
    pub log_level: Option<String>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            principles: Principle::all().to_vec(),
            variants: Variant::both().to_vec(),
            format: OutputFormat::Text,
            show_definitions: true,
            log_level: None,
        }
    }
}

impl RunSettings {
    pub fn with_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(principles) = toml.principles() {
            self.principles = principles.to_vec();
        }
        if let Some(variants) = toml.variants() {
            self.variants = variants.to_vec();
        }
        if let Some(format) = toml.output_format() {
            self.format = format;
        }
        if let Some(show) = toml.show_definitions() {
            self.show_definitions = show;
        }
        if let Some(level) = toml.log_level() {
            self.log_level = Some(level.to_string());
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn with_cli(mut self, cli: &CliConfig) -> Self {
        if !cli.principles.is_empty() {
            self.principles = cli.principles.clone();
        }
        if !cli.variants.is_empty() {
            self.variants = cli.variants.clone();
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.no_definitions {
            self.show_definitions = false;
        }
        self
    }

    /// 讀取設定檔 (若有指定) 並套用命令列參數
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(path) = &cli.config {
            let toml = TomlConfig::from_file(path)?;
            settings = settings.with_toml(&toml);
        }
        let settings = settings.with_cli(cli);
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for RunSettings {
    fn principles(&self) -> &[Principle] {
        &self.principles
    }

    fn variants(&self) -> &[Variant] {
        &self.variants
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn show_definitions(&self) -> bool {
        self.show_definitions
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("demo.principles", &self.principles)?;
        validate_non_empty_list("demo.variants", &self.variants)?;
        validate_unique("demo.variants", &self.variants)?;

        if let Some(level) = &self.log_level {
            validate_one_of("logging.level", level.as_str(), &LOG_LEVELS)?;
        }

        Ok(())
    }
}
