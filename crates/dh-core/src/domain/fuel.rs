use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{ensure_named, ensure_unique, ValidationError};
use crate::ids::FuelRecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Ethanol,
    Diesel,
    Cng,
    Electric,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Ethanol => "ethanol",
            FuelType::Diesel => "diesel",
            FuelType::Cng => "cng",
            FuelType::Electric => "electric",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "gasoline" => Some(FuelType::Gasoline),
            "ethanol" => Some(FuelType::Ethanol),
            "diesel" => Some(FuelType::Diesel),
            "cng" => Some(FuelType::Cng),
            "electric" => Some(FuelType::Electric),
            _ => None,
        }
    }
}

/// One fill-up at a fuel station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    pub id: FuelRecordId,
    pub station: String,
    pub fuel_type: FuelType,
    pub liters: f64,
    pub price_per_liter: f64,
    pub odometer_km: i64,
    pub filled_at: DateTime<Utc>,
}

impl FuelRecord {
    pub fn total_cost(&self) -> f64 {
        self.liters * self.price_per_liter
    }
}

pub fn validate_fuel_records(records: &[FuelRecord]) -> Result<(), ValidationError> {
    ensure_named("fuel", records.iter().map(|r| r.station.as_str()))?;
    ensure_unique("fuel", records.iter().map(|r| r.id.as_str()))?;
    // JSON has no encoding for NaN or infinity; they would reach the remote as null.
    for record in records {
        if !record.liters.is_finite() || record.liters <= 0.0 {
            return Err(ValidationError::InvalidLiters {
                id: record.id.to_string(),
            });
        }
        if !record.price_per_liter.is_finite() || record.price_per_liter < 0.0 {
            return Err(ValidationError::InvalidPrice {
                id: record.id.to_string(),
            });
        }
    }
    Ok(())
}
