pub mod garage;

pub use crate::domain::model::{Behavior, Car, Vehicle, VehicleKind};
pub use crate::domain::ports::Motor;
pub use crate::utils::error::Result;
