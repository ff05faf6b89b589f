//! Driver-owned records mirrored between the remote profile and the local caches.

pub mod category;
pub mod fuel;
pub mod nickname;
pub mod payment;
pub mod validation;
pub mod vehicle;

pub use category::{Category, CategoryKind};
pub use fuel::{FuelRecord, FuelType};
pub use nickname::{Nickname, MAX_NICKNAME_LEN};
pub use payment::PaymentMethod;
pub use validation::ValidationError;
pub use vehicle::Vehicle;
