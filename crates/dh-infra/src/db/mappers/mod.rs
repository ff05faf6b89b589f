pub mod category_mapper;
pub mod fuel_record_mapper;
pub mod nickname_mapper;
pub mod payment_method_mapper;
pub mod vehicle_mapper;

pub use category_mapper::CategoryRowMapper;
pub use fuel_record_mapper::FuelRecordRowMapper;
pub use nickname_mapper::NicknameRowMapper;
pub use payment_method_mapper::PaymentMethodRowMapper;
pub use vehicle_mapper::VehicleRowMapper;

use anyhow::{anyhow, Result};
use dh_core::FuelType;

pub(crate) fn fuel_type_from_str(value: &str) -> Result<FuelType> {
    FuelType::parse(value).ok_or_else(|| anyhow!("invalid fuel_type: {}", value))
}
