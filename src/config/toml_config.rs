use crate::config::OutputFormat;
use crate::domain::model::VehicleKind;
use crate::utils::error::{Result, VroomError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarageConfig {
    pub garage: GarageSection,
    #[serde(default)]
    pub vehicles: Vec<VehicleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarageSection {
    pub name: String,
    pub output: Option<OutputFormat>,
}

/// One `[[vehicles]]` table. The attributes stay optional here so a missing
/// one is reported by name instead of as a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleEntry {
    pub kind: VehicleKind,
    pub wheel_size: Option<f64>,
    pub wheel_number: Option<i64>,
}

impl GarageConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VroomError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VroomError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VroomError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output(&self) -> Option<OutputFormat> {
        self.garage.output
    }
}

impl Validate for GarageConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("garage.name", &self.garage.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_garage() {
        let toml_content = r#"
[garage]
name = "lesson"
output = "json"

[[vehicles]]
kind = "vehicle"
wheel_size = 18
wheel_number = 4

[[vehicles]]
kind = "car"
wheel_size = 36.5
wheel_number = 4
"#;

        let config = GarageConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.garage.name, "lesson");
        assert_eq!(config.output(), Some(OutputFormat::Json));
        assert_eq!(config.vehicles.len(), 2);
        assert_eq!(config.vehicles[0].kind, VehicleKind::Vehicle);
        assert_eq!(config.vehicles[0].wheel_size, Some(18.0));
        assert_eq!(config.vehicles[1].kind, VehicleKind::Car);
        assert_eq!(config.vehicles[1].wheel_size, Some(36.5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VROOM_TEST_WHEELS", "6");

        let toml_content = r#"
[garage]
name = "env"

[[vehicles]]
kind = "car"
wheel_size = 20
wheel_number = ${VROOM_TEST_WHEELS}
"#;

        let config = GarageConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.vehicles[0].wheel_number, Some(6));

        std::env::remove_var("VROOM_TEST_WHEELS");
    }

    #[test]
    fn test_unknown_placeholder_is_left_alone() {
        let toml_content = r#"
[garage]
name = "${VROOM_TEST_SURELY_UNSET}"
"#;

        let config = GarageConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.garage.name, "${VROOM_TEST_SURELY_UNSET}");
        assert!(config.vehicles.is_empty());
    }

    #[test]
    fn test_validation_leaves_missing_attribute_to_assembly() {
        let toml_content = r#"
[garage]
name = "broken"

[[vehicles]]
kind = "car"
wheel_size = 18
"#;

        let config = GarageConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.vehicles[0].wheel_number, None);
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let config = GarageConfig::from_toml_str("[garage]\nname = \" \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_kind_is_a_parse_error() {
        let toml_content = r#"
[garage]
name = "x"

[[vehicles]]
kind = "boat"
wheel_size = 1
wheel_number = 1
"#;

        let result = GarageConfig::from_toml_str(toml_content);
        assert!(matches!(result, Err(VroomError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[garage]\nname = \"file-test\"\n")
            .unwrap();

        let config = GarageConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.garage.name, "file-test");
    }
}
