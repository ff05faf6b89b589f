mod read_through;
mod write_locks;
mod write_through;

pub use read_through::ReadThrough;
pub use write_locks::UserWriteLocks;
pub use write_through::{WriteThrough, WriteThroughError};
