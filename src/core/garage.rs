use crate::config::toml_config::GarageConfig;
use crate::config::OutputFormat;
use crate::core::Motor;
use crate::domain::model::{Behavior, Car, Vehicle, VehicleKind};
use crate::utils::error::{Result, VroomError};
use serde::Serialize;
use std::fmt;

#[cfg(feature = "cli")]
use crate::config::CliConfig;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;

/// Build a vehicle of `kind` from attributes that may be missing.
pub fn assemble(
    kind: VehicleKind,
    wheel_size: Option<f64>,
    wheel_number: Option<i64>,
) -> Result<Box<dyn Motor>> {
    let missing = |attribute: &str| VroomError::MissingAttributeError {
        kind: kind.to_string(),
        attribute: attribute.to_string(),
    };
    let wheel_size = wheel_size.ok_or_else(|| missing("wheel_size"))?;
    let wheel_number = wheel_number.ok_or_else(|| missing("wheel_number"))?;

    let motor: Box<dyn Motor> = match kind {
        VehicleKind::Vehicle => Box::new(Vehicle::new(wheel_size, wheel_number)),
        VehicleKind::Car => Box::new(Car::new(wheel_size, wheel_number)),
    };
    Ok(motor)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveReport {
    pub kind: VehicleKind,
    pub parent: Option<VehicleKind>,
    #[serde(serialize_with = "serialize_wheel_size")]
    pub wheel_size: f64,
    pub wheel_number: i64,
    pub go: String,
    pub go_defined_by: VehicleKind,
    pub fill_up_tank: String,
    pub fill_up_tank_defined_by: VehicleKind,
}

/// JSON has no NaN or infinities, so those go out as their text form.
fn serialize_wheel_size<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

impl DriveReport {
    pub fn drive(motor: &dyn Motor) -> Self {
        let kind = motor.kind();
        Self {
            kind,
            parent: kind.parent(),
            wheel_size: motor.wheel_size(),
            wheel_number: motor.wheel_number(),
            go: motor.go().to_string(),
            go_defined_by: kind.resolve(Behavior::Go),
            fill_up_tank: motor.fill_up_tank().to_string(),
            fill_up_tank_defined_by: kind.resolve(Behavior::FillUpTank),
        }
    }
}

impl fmt::Display for DriveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] wheel_size={} wheel_number={}",
            self.kind, self.wheel_size, self.wheel_number
        )?;
        if let Some(parent) = self.parent {
            write!(f, " parent={}", parent)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  {}() -> {} ({})",
            Behavior::Go,
            self.go,
            self.go_defined_by
        )?;
        write!(
            f,
            "  {}() -> {} ({})",
            Behavior::FillUpTank,
            self.fill_up_tank,
            self.fill_up_tank_defined_by
        )
    }
}

#[derive(Debug)]
pub struct Garage {
    name: String,
    vehicles: Vec<Box<dyn Motor>>,
}

impl Garage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vehicles: Vec::new(),
        }
    }

    /// Assemble every `[[vehicles]]` entry in file order. The first entry that
    /// cannot be built aborts the whole garage.
    pub fn from_config(config: &GarageConfig) -> Result<Self> {
        let mut garage = Self::new(config.garage.name.clone());
        for entry in &config.vehicles {
            garage.park(assemble(entry.kind, entry.wheel_size, entry.wheel_number)?);
        }
        Ok(garage)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn park(&mut self, motor: Box<dyn Motor>) {
        tracing::debug!("Parking a {} in '{}'", motor.kind(), self.name);
        self.vehicles.push(motor);
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn run(&self) -> Vec<DriveReport> {
        tracing::info!("Driving {} vehicle(s) in '{}'", self.len(), self.name);

        let reports: Vec<DriveReport> = self
            .vehicles
            .iter()
            .map(|motor| {
                let report = DriveReport::drive(motor.as_ref());
                tracing::debug!(
                    kind = %report.kind,
                    go = %report.go,
                    go_defined_by = %report.go_defined_by,
                    "Drove vehicle"
                );
                report
            })
            .collect();

        let overridden = reports
            .iter()
            .filter(|r| r.go_defined_by != VehicleKind::Vehicle)
            .count();
        tracing::info!(
            "Done: {} report(s), {} with an overridden go()",
            reports.len(),
            overridden
        );
        reports
    }
}

#[cfg(feature = "cli")]
impl Garage {
    /// Build from `--config` when it is given (the vehicle flags are then
    /// ignored), otherwise one vehicle from the flags. Also returns the
    /// output format: the file's `garage.output` wins over `--output`.
    pub fn from_cli(config: &CliConfig) -> Result<(Self, OutputFormat)> {
        match &config.config {
            Some(path) => {
                tracing::info!("📁 Loading garage from: {}", path);
                let garage_config = GarageConfig::from_file(path)?;
                garage_config.validate()?;

                let output = garage_config.output().unwrap_or(config.output);
                Ok((Self::from_config(&garage_config)?, output))
            }
            None => {
                let mut garage = Self::new("cli");
                garage.park(assemble(config.kind, config.wheel_size, config.wheel_number)?);
                Ok((garage, config.output))
            }
        }
    }
}

/// Everything the `vroom` binary does short of printing: validate the flags,
/// build the garage, drive it and render the reports.
#[cfg(feature = "cli")]
pub fn run_cli(config: &CliConfig) -> Result<String> {
    config.validate()?;
    let (garage, output) = Garage::from_cli(config)?;
    render(&garage.run(), output)
}

pub fn render(reports: &[DriveReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
