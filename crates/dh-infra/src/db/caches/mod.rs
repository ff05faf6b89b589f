//! Diesel-backed implementations of `LocalCachePort`, one per domain.
//!
//! Every save replaces the user's snapshot inside a single transaction:
//! delete all of the user's rows, then insert the new records with an explicit
//! `position`. Reads order by that column.

mod category_cache;
mod fuel_record_cache;
mod nickname_cache;
mod payment_cache;
mod vehicle_cache;

pub use category_cache::DieselCategoryCache;
pub use fuel_record_cache::DieselFuelRecordCache;
pub use nickname_cache::DieselNicknameCache;
pub use payment_cache::DieselPaymentCache;
pub use vehicle_cache::DieselVehicleCache;

use dh_core::ports::CacheError;

use crate::db::ports::InsertMapper;

fn storage_err(e: impl std::fmt::Display) -> CacheError {
    CacheError::Storage(e.to_string())
}

fn mapping_err(e: impl std::fmt::Display) -> CacheError {
    CacheError::Mapping(e.to_string())
}

/// Map records to rows, numbering them in slice order.
fn to_rows<D, R, M>(mapper: &M, owner: &str, records: &[D]) -> Result<Vec<R>, CacheError>
where
    M: InsertMapper<D, R>,
{
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let position = i32::try_from(index).map_err(mapping_err)?;
            mapper
                .to_row(owner, position, record)
                .map_err(mapping_err)
        })
        .collect()
}
