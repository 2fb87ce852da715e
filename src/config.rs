use crate::pipeline::normalize::ExtractionMode;
use serde::Deserialize;
use std::{fs, io, path::Path};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub mode: ExtractionMode,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::default(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> String {
    "\t".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "Amazon Pick List".to_string()
}

impl Config {
    /// Load from a TOML file. A missing file means all defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(toml::from_str(&content)?)
    }
}

impl PipelineConfig {
    /// The delimiter as a single byte; anything but one ASCII char is rejected.
    pub fn delimiter_byte(&self) -> Result<u8, Box<dyn std::error::Error>> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )
            .into()),
        }
    }
}
