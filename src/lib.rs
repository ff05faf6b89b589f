//! DriverHub
//!
//! Bootstrap and command-line front end for the DriverHub workspace: loads
//! configuration, initializes tracing, wires the SQLite caches and the profile
//! document store into the use cases, and runs one command.

pub mod bootstrap;
pub mod cli;
