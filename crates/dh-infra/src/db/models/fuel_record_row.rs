use crate::db::schema::fuel_record;
use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = fuel_record)]
pub struct FuelRecordRow {
    pub user_id: String,
    pub id: String,
    pub station: String,
    pub fuel_type: String,
    pub liters: f64,
    pub price_per_liter: f64,
    pub odometer_km: i64,
    /// RFC 3339, UTC, full sub-second precision.
    pub filled_at: String,
    pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = fuel_record)]
pub struct NewFuelRecordRow {
    pub user_id: String,
    pub id: String,
    pub station: String,
    pub fuel_type: String,
    pub liters: f64,
    pub price_per_liter: f64,
    pub odometer_km: i64,
    pub filled_at: String,
    pub position: i32,
}
