use crate::domain::model::{Behavior, VehicleKind, FILL_UP_TANK, VEHICLE_GO};
use std::fmt;

/// Behavior surface shared by every vehicle.
///
/// The default bodies of `go` and `fill_up_tank` are the base `Vehicle`
/// definitions. A specialization overrides a behavior by implementing the
/// method itself; anything it leaves alone falls through to the default.
pub trait Motor: fmt::Debug + Send + Sync {
    fn kind(&self) -> VehicleKind;
    fn wheel_size(&self) -> f64;
    fn wheel_number(&self) -> i64;

    fn go(&self) -> &'static str {
        VEHICLE_GO
    }

    fn fill_up_tank(&self) -> &'static str {
        FILL_UP_TANK
    }

    /// Invoke a behavior by name, through the same dispatch as a direct call.
    fn perform(&self, behavior: Behavior) -> &'static str {
        match behavior {
            Behavior::Go => self.go(),
            Behavior::FillUpTank => self.fill_up_tank(),
        }
    }
}
