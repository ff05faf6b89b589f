mod executor;
mod mapper;

pub use executor::CacheExecutor;
pub use mapper::{InsertMapper, RowMapper};
