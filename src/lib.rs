pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
#[cfg(feature = "cli")]
pub use crate::core::garage::run_cli;

pub use crate::config::{toml_config::GarageConfig, OutputFormat};
pub use crate::core::garage::{assemble, render, DriveReport, Garage};
pub use crate::domain::model::{Behavior, Car, Vehicle, VehicleKind};
pub use crate::domain::ports::Motor;
pub use crate::utils::error::{Result, VroomError};
