pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_app_config, load_config, resolve_paths, AppConfig, ResolvedConfig};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{wire_dependencies, WiringError};
