//! Infrastructure adapters for DriverHub.
//!
//! - `db`: one SQLite database per cached domain, accessed through diesel
//! - `remote`: a file-backed stand-in for the remote profile document store
//! - `time`: system clock

pub mod db;
pub mod remote;
pub mod time;

pub use remote::JsonFileDocumentStore;
pub use time::SystemClock;
