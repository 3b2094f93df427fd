pub mod toml_config;

use crate::utils::error::VroomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "cli")]
use crate::domain::model::VehicleKind;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = VroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(VroomError::InvalidConfigValueError {
                field: "output".to_string(),
                value: s.to_string(),
                reason: "Valid formats: text, json".to_string(),
            }),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "vroom")]
#[command(about = "Build vehicles and hear them go")]
pub struct CliConfig {
    /// Garage TOML file; when given, the vehicle flags are ignored
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "vehicle")]
    pub kind: VehicleKind,

    #[arg(long, allow_negative_numbers = true)]
    pub wheel_size: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub wheel_number: Option<i64>,

    #[arg(long, default_value = "text")]
    pub output: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        // missing wheel flags are reported by `assemble`, against the kind being built
        match &self.config {
            Some(path) => validate_path("config", path),
            None => Ok(()),
        }
    }
}
