use crate::domain::ports::Motor;
use crate::utils::error::VroomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const VEHICLE_GO: &str = "vrrrrrrrooom!";
pub const CAR_GO: &str = "VRRROOOOOOOOOOOOOOOOOOOOOOOM!!!!!";
pub const FILL_UP_TANK: &str = "filling up!";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    pub wheel_size: f64,
    pub wheel_number: i64,
}

impl Vehicle {
    pub fn new(wheel_size: f64, wheel_number: i64) -> Self {
        Self {
            wheel_size,
            wheel_number,
        }
    }
}

impl Motor for Vehicle {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Vehicle
    }

    fn wheel_size(&self) -> f64 {
        self.wheel_size
    }

    fn wheel_number(&self) -> i64 {
        self.wheel_number
    }
}

/// A `Vehicle` that goes louder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Car {
    inner: Vehicle,
}

impl Car {
    pub fn new(wheel_size: f64, wheel_number: i64) -> Self {
        Self {
            inner: Vehicle::new(wheel_size, wheel_number),
        }
    }

    pub fn as_vehicle(&self) -> &Vehicle {
        &self.inner
    }
}

impl From<Vehicle> for Car {
    fn from(inner: Vehicle) -> Self {
        Self { inner }
    }
}

impl Motor for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn wheel_size(&self) -> f64 {
        self.inner.wheel_size
    }

    fn wheel_number(&self) -> i64 {
        self.inner.wheel_number
    }

    fn go(&self) -> &'static str {
        CAR_GO
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Vehicle,
    Car,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    Go,
    FillUpTank,
}

impl Behavior {
    pub const ALL: [Behavior; 2] = [Behavior::Go, Behavior::FillUpTank];
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 2] = [VehicleKind::Vehicle, VehicleKind::Car];

    pub fn parent(self) -> Option<VehicleKind> {
        match self {
            VehicleKind::Vehicle => None,
            VehicleKind::Car => Some(VehicleKind::Vehicle),
        }
    }

    /// Whether this kind supplies its own body for `behavior`.
    pub fn defines(self, behavior: Behavior) -> bool {
        match self {
            VehicleKind::Vehicle => true,
            VehicleKind::Car => behavior == Behavior::Go,
        }
    }

    /// The kind whose definition of `behavior` runs for an instance of `self`.
    pub fn resolve(self, behavior: Behavior) -> VehicleKind {
        let mut current = self;
        loop {
            if current.defines(behavior) {
                return current;
            }
            match current.parent() {
                Some(parent) => current = parent,
                // the root defines every behavior
                None => return current,
            }
        }
    }

    pub fn is_subkind_of(self, other: VehicleKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Vehicle => "vehicle",
            VehicleKind::Car => "car",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = VroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vehicle" => Ok(VehicleKind::Vehicle),
            "car" => Ok(VehicleKind::Car),
            _ => Err(VroomError::InvalidConfigValueError {
                field: "kind".to_string(),
                value: s.to_string(),
                reason: "Valid kinds: vehicle, car".to_string(),
            }),
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Go => f.write_str("go"),
            Behavior::FillUpTank => f.write_str("fill_up_tank"),
        }
    }
}
