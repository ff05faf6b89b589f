mod category_row;
mod fuel_record_row;
mod nickname_row;
mod payment_method_row;
mod vehicle_row;

pub use category_row::{CategoryRow, NewCategoryRow};
pub use fuel_record_row::{FuelRecordRow, NewFuelRecordRow};
pub use nickname_row::{NewNicknameRow, NicknameRow};
pub use payment_method_row::{NewPaymentMethodRow, PaymentMethodRow};
pub use vehicle_row::{NewVehicleRow, VehicleRow};
