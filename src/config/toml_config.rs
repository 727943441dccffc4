use crate::config::OutputFormat;
use crate::utils::error::{PlaytextError, Result};
use crate::utils::validation::{validate_no_nul, validate_one_of, Validate};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub text: Option<TextConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextConfig {
    pub input: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PlaytextError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        content.parse()
    }

    pub fn input(&self) -> Option<&str> {
        self.text.as_ref().and_then(|t| t.input.as_deref())
    }

    pub fn format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse)
            .transpose()
    }
}

impl FromStr for TomlConfig {
    type Err = PlaytextError;

    fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = self.input() {
            validate_no_nul("text.input", input)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        Ok(())
    }
}
