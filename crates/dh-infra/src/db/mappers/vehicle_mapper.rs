use crate::db::mappers::fuel_type_from_str;
use crate::db::models::{NewVehicleRow, VehicleRow};
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::Result;
use dh_core::Vehicle;

pub struct VehicleRowMapper;

impl InsertMapper<Vehicle, NewVehicleRow> for VehicleRowMapper {
    fn to_row(&self, owner: &str, position: i32, domain: &Vehicle) -> Result<NewVehicleRow> {
        Ok(NewVehicleRow {
            user_id: owner.to_string(),
            plate: domain.plate.clone(),
            model: domain.model.clone(),
            year: domain.year,
            fuel_type: domain.fuel_type.as_str().to_string(),
            owned: domain.owned,
            position,
        })
    }
}

impl RowMapper<VehicleRow, Vehicle> for VehicleRowMapper {
    fn to_domain(&self, row: &VehicleRow) -> Result<Vehicle> {
        Ok(Vehicle {
            plate: row.plate.clone(),
            model: row.model.clone(),
            year: row.year,
            fuel_type: fuel_type_from_str(&row.fuel_type)?,
            owned: row.owned,
        })
    }
}
