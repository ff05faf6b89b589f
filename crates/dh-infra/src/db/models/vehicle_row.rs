use crate::db::schema::vehicle;
use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = vehicle)]
pub struct VehicleRow {
    pub user_id: String,
    pub plate: String,
    pub model: String,
    pub year: i32,
    pub fuel_type: String,
    pub owned: bool,
    pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = vehicle)]
pub struct NewVehicleRow {
    pub user_id: String,
    pub plate: String,
    pub model: String,
    pub year: i32,
    pub fuel_type: String,
    pub owned: bool,
    pub position: i32,
}
