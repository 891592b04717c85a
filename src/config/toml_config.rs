use crate::core::{OutputFormat, Principle, Variant};
use crate::utils::error::{Result, SolidError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub demo: Option<DemoConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    pub principles: Option<Vec<Principle>>,
    pub variants: Option<Vec<Variant>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub show_definitions: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SolidError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SOLID_PRINCIPLES})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SolidError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn principles(&self) -> Option<&[Principle]> {
        self.demo.as_ref()?.principles.as_deref()
    }

    pub fn variants(&self) -> Option<&[Variant]> {
        self.demo.as_ref()?.variants.as_deref()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref()?.format
    }

    pub fn show_definitions(&self) -> Option<bool> {
        self.output.as_ref()?.show_definitions
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[demo]
principles = ["ocp", "isp"]
variants = ["compliant"]

[output]
format = "json"
show_definitions = false

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.principles(), Some(&[Principle::Ocp, Principle::Isp][..]));
        assert_eq!(config.variants(), Some(&[Variant::Compliant][..]));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.show_definitions(), Some(false));
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.principles().is_none());
        assert!(config.output_format().is_none());
        assert!(config.log_level().is_none());
    }

    #[test]
    fn test_unknown_principle_is_rejected() {
        let result = TomlConfig::from_toml_str("[demo]\nprinciples = [\"kiss\"]\n");
        assert!(matches!(
            result,
            Err(SolidError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_names_match_command_line_parsing() {
        let config = TomlConfig::from_toml_str(
            "[demo]\nprinciples = [\"SRP\", \"Lsp\"]\nvariants = [\"bad\", \"good\"]\n",
        )
        .unwrap();

        assert_eq!(config.principles(), Some(&[Principle::Srp, Principle::Lsp][..]));
        assert_eq!(
            config.variants(),
            Some(&[Variant::Violation, Variant::Compliant][..])
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SOLID_DEMOS_TEST_FORMAT", "json");

        let config =
            TomlConfig::from_toml_str("[output]\nformat = \"${SOLID_DEMOS_TEST_FORMAT}\"\n")
                .unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Json));

        std::env::remove_var("SOLID_DEMOS_TEST_FORMAT");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let config =
            TomlConfig::from_toml_str("[logging]\nlevel = \"${SOLID_DEMOS_UNSET_LEVEL}\"\n")
                .unwrap();
        assert_eq!(config.log_level(), Some("${SOLID_DEMOS_UNSET_LEVEL}"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[demo]\nprinciples = [\"dip\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.principles(), Some(&[Principle::Dip][..]));
    }
}
