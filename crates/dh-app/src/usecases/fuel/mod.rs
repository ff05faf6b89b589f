mod add_fuel_record;

pub use add_fuel_record::{AddFuelRecord, AddFuelRecordError, NewFuelRecord};
