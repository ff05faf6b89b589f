use clap::Parser;

use driverhub_lib::bootstrap::tracing::init_tracing_subscriber;
use driverhub_lib::bootstrap::{
    load_app_config, resolve_paths, wire_dependencies, AppRuntime,
};
use driverhub_lib::cli::{execute, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_app_config(cli.config.as_deref())?;
    let resolved = resolve_paths(&config)?;
    init_tracing_subscriber(&resolved.log_filter)?;

    let runtime = AppRuntime::new(wire_dependencies(&resolved)?);
    let output = execute(&runtime, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
