pub mod toml_config;

use crate::core::pipeline::DEFAULT_INPUT;
use crate::utils::error::{PlaytextError, Result};
use crate::utils::validation::{validate_no_nul, Validate};
use clap::{Parser, ValueEnum};
use std::str::FromStr;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["plain", "json"];
}

impl FromStr for OutputFormat {
    type Err = PlaytextError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(PlaytextError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "text_transform")]
#[command(about = "Trim, collapse whitespace and reverse a sentence")]
pub struct CliConfig {
    /// Text to transform instead of the built-in sentence
    #[arg(long)]
    pub input: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective settings after merging CLI flags over the TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSettings {
    pub input: String,
    pub format: OutputFormat,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            format: OutputFormat::Plain,
        }
    }
}

impl Validate for TextSettings {
    fn validate(&self) -> Result<()> {
        validate_no_nul("input", &self.input)
    }
}

impl CliConfig {
    pub fn resolve(&self) -> Result<TextSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };
        self.merge(file.as_ref())
    }

    pub fn merge(&self, file: Option<&TomlConfig>) -> Result<TextSettings> {
        let mut settings = TextSettings::default();

        if let Some(file) = file {
            file.validate()?;
            if let Some(input) = file.input() {
                settings.input = input.to_string();
            }
            if let Some(format) = file.format()? {
                settings.format = format;
            }
        }

        if let Some(input) = &self.input {
            settings.input = input.clone();
        }
        if let Some(format) = self.format {
            settings.format = format;
        }

        settings.validate()?;
        Ok(settings)
    }
}
