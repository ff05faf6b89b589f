use serde::{Deserialize, Serialize};

use super::fuel::FuelType;
use super::validation::{ensure_named, ensure_unique, ValidationError};

const MIN_VEHICLE_YEAR: i32 = 1950;
const MAX_VEHICLE_YEAR: i32 = 2100;

/// A fleet vehicle the driver works with, keyed by licence plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub plate: String,
    pub model: String,
    pub year: i32,
    pub fuel_type: FuelType,
    /// `false` when the vehicle is rented from a fleet operator.
    #[serde(default)]
    pub owned: bool,
}

pub fn validate_vehicles(vehicles: &[Vehicle]) -> Result<(), ValidationError> {
    ensure_named("vehicle", vehicles.iter().map(|v| v.plate.as_str()))?;
    ensure_unique("vehicle", vehicles.iter().map(|v| v.plate.as_str()))?;
    if let Some(v) = vehicles
        .iter()
        .find(|v| !(MIN_VEHICLE_YEAR..=MAX_VEHICLE_YEAR).contains(&v.year))
    {
        return Err(ValidationError::VehicleYearOutOfRange(v.year));
    }
    Ok(())
}
