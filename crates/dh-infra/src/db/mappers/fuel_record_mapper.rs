use crate::db::mappers::fuel_type_from_str;
use crate::db::models::{FuelRecordRow, NewFuelRecordRow};
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::{anyhow, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use dh_core::{FuelRecord, FuelRecordId};

pub struct FuelRecordRowMapper;

impl InsertMapper<FuelRecord, NewFuelRecordRow> for FuelRecordRowMapper {
    fn to_row(&self, owner: &str, position: i32, domain: &FuelRecord) -> Result<NewFuelRecordRow> {
        Ok(NewFuelRecordRow {
            user_id: owner.to_string(),
            id: domain.id.as_str().to_string(),
            station: domain.station.clone(),
            fuel_type: domain.fuel_type.as_str().to_string(),
            liters: domain.liters,
            price_per_liter: domain.price_per_liter,
            odometer_km: domain.odometer_km,
            filled_at: domain
                .filled_at
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            position,
        })
    }
}

impl RowMapper<FuelRecordRow, FuelRecord> for FuelRecordRowMapper {
    fn to_domain(&self, row: &FuelRecordRow) -> Result<FuelRecord> {
        let filled_at = DateTime::parse_from_rfc3339(&row.filled_at)
            .map_err(|e| anyhow!("invalid filled_at timestamp {}: {}", row.filled_at, e))?
            .with_timezone(&Utc);

        Ok(FuelRecord {
            id: FuelRecordId::from(row.id.as_str()),
            station: row.station.clone(),
            fuel_type: fuel_type_from_str(&row.fuel_type)?,
            liters: row.liters,
            price_per_liter: row.price_per_liter,
            odometer_km: row.odometer_km,
            filled_at,
        })
    }
}
