//! Command-line front end.
//!
//! Every command prints one JSON document on stdout. Read commands report
//! where the data came from (`cache`, `remote` or `missing`).

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};

use dh_app::NewFuelRecord;
use dh_core::{
    Category, CategoryId, CategoryKind, DriverProfile, FuelType, Nickname, PaymentMethod,
    SetupStep, SyncOutcome, UserId, Vehicle,
};

use crate::bootstrap::AppRuntime;

#[derive(Parser, Debug)]
#[command(name = "driverhub")]
#[command(about = "Local-first driver data sync and setup gate", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct UserArg {
    /// Driver's user id
    #[arg(long)]
    pub user: String,
}

impl UserArg {
    fn id(&self) -> UserId {
        UserId::from(self.user.as_str())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which setup step the driver must finish next
    Gate(UserArg),
    /// Setup completion flags
    Setup {
        #[command(subcommand)]
        action: SetupCommand,
    },
    /// Payment methods accepted by the driver
    Payments {
        #[command(subcommand)]
        action: PaymentsCommand,
    },
    /// Income and expense categories
    Categories {
        #[command(subcommand)]
        action: CategoriesCommand,
    },
    /// Display nickname
    Nickname {
        #[command(subcommand)]
        action: NicknameCommand,
    },
    /// Fleet vehicles
    Vehicles {
        #[command(subcommand)]
        action: VehiclesCommand,
    },
    /// Fuel fill-up history
    Fuel {
        #[command(subcommand)]
        action: FuelCommand,
    },
    /// Personal details
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum PaymentsCommand {
    Get(UserArg),
    Set {
        #[command(flatten)]
        user: UserArg,
        /// NAME:on|off, in display order
        #[arg(long = "method", value_parser = parse_payment_method, required = true)]
        methods: Vec<PaymentMethod>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoriesCommand {
    Get(UserArg),
    Set {
        #[command(flatten)]
        user: UserArg,
        /// ID:NAME:income|expense:#RRGGBB:ICON; an empty ID mints a new one
        #[arg(long = "category", value_parser = parse_category, required = true)]
        categories: Vec<Category>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NicknameCommand {
    Get(UserArg),
    Set {
        #[command(flatten)]
        user: UserArg,
        #[arg(long)]
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum VehiclesCommand {
    Get(UserArg),
    Set {
        #[command(flatten)]
        user: UserArg,
        /// PLATE:MODEL:YEAR:FUEL[:rented]
        #[arg(long = "vehicle", value_parser = parse_vehicle, required = true)]
        vehicles: Vec<Vehicle>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FuelCommand {
    Get(UserArg),
    Add {
        #[command(flatten)]
        user: UserArg,
        #[arg(long)]
        station: String,
        #[arg(long, value_parser = parse_fuel_type)]
        fuel: FuelType,
        #[arg(long)]
        liters: f64,
        /// Price per liter
        #[arg(long)]
        price: f64,
        /// Odometer reading in km
        #[arg(long)]
        odometer: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum SetupCommand {
    /// Mark one step complete without saving its data
    Mark {
        #[command(flatten)]
        user: UserArg,
        /// profile, vehicle, payment, categories or nickname
        #[arg(long, value_parser = parse_setup_step)]
        step: SetupStep,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    Set {
        #[command(flatten)]
        user: UserArg,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
}

fn parse_setup_step(raw: &str) -> Result<SetupStep, String> {
    SetupStep::from_key(raw).ok_or_else(|| {
        format!("unknown setup step {raw:?} (profile, vehicle, payment, categories, nickname)")
    })
}

fn parse_payment_method(raw: &str) -> Result<PaymentMethod, String> {
    let (name, state) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:on|off, got {raw:?}"))?;
    let active = match state {
        "on" => true,
        "off" => false,
        other => return Err(format!("expected on or off, got {other:?}")),
    };
    Ok(PaymentMethod::new(name, active))
}

fn parse_category(raw: &str) -> Result<Category, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [id, name, kind, color, icon] = parts.as_slice() else {
        return Err(format!("expected ID:NAME:KIND:COLOR:ICON, got {raw:?}"));
    };
    let kind = CategoryKind::parse(kind)
        .ok_or_else(|| format!("expected income or expense, got {kind:?}"))?;
    let id = if id.is_empty() {
        CategoryId::new()
    } else {
        CategoryId::from(*id)
    };
    Ok(Category {
        id,
        name: name.to_string(),
        kind,
        color: color.to_string(),
        icon: icon.to_string(),
    })
}

fn parse_fuel_type(raw: &str) -> Result<FuelType, String> {
    FuelType::parse(raw).ok_or_else(|| {
        format!("unknown fuel type {raw:?} (gasoline, ethanol, diesel, cng, electric)")
    })
}

fn parse_vehicle(raw: &str) -> Result<Vehicle, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let (plate, model, year, fuel, owned) = match parts.as_slice() {
        [plate, model, year, fuel] => (plate, model, year, fuel, true),
        [plate, model, year, fuel, "rented"] => (plate, model, year, fuel, false),
        _ => return Err(format!("expected PLATE:MODEL:YEAR:FUEL[:rented], got {raw:?}")),
    };
    let year = year
        .parse::<i32>()
        .map_err(|e| format!("invalid year {year:?}: {e}"))?;
    Ok(Vehicle {
        plate: plate.to_string(),
        model: model.to_string(),
        year,
        fuel_type: parse_fuel_type(fuel)?,
        owned,
    })
}

/// Collapse a read outcome into the printed document.
fn outcome_json<R: Serialize>(outcome: SyncOutcome<R>) -> Result<Value> {
    let (source, records) = match outcome {
        SyncOutcome::Cached(records) => ("cache", records),
        SyncOutcome::Fetched(records) => ("remote", records),
        SyncOutcome::Missing => ("missing", Vec::new()),
        SyncOutcome::Failed(err) => return Err(anyhow!(err).context("read failed")),
    };
    Ok(json!({ "source": source, "records": records }))
}

fn saved(count: usize) -> Value {
    json!({ "saved": count })
}

/// Run one command against the runtime and return what should be printed.
pub async fn execute(runtime: &AppRuntime, command: Command) -> Result<Value> {
    let uc = runtime.usecases();

    match command {
        Command::Gate(user) => {
            let state = uc
                .evaluate_setup_gate()
                .execute(&user.id())
                .await
                .context("failed to evaluate setup gate")?;
            Ok(json!({
                "state": state.label(),
                "redirect": state.redirect().map(|step| step.as_str()),
                "rendersContent": state.renders_guarded_content(),
            }))
        }

        Command::Setup { action } => match action {
            SetupCommand::Mark { user, step } => {
                uc.mark_setup_step()
                    .execute(&user.id(), step)
                    .await
                    .with_context(|| format!("failed to mark {} complete", step.as_str()))?;
                Ok(json!({ "marked": step.as_str() }))
            }
        },

        Command::Payments { action } => match action {
            PaymentsCommand::Get(user) => outcome_json(uc.read_payments().execute(&user.id()).await),
            PaymentsCommand::Set { user, methods } => {
                uc.write_payments().execute(&user.id(), &methods).await?;
                Ok(saved(methods.len()))
            }
        },

        Command::Categories { action } => match action {
            CategoriesCommand::Get(user) => {
                outcome_json(uc.read_categories().execute(&user.id()).await)
            }
            CategoriesCommand::Set { user, categories } => {
                uc.write_categories().execute(&user.id(), &categories).await?;
                Ok(saved(categories.len()))
            }
        },

        Command::Nickname { action } => match action {
            NicknameCommand::Get(user) => outcome_json(uc.read_nickname().execute(&user.id()).await),
            NicknameCommand::Set { user, value } => {
                uc.write_nickname()
                    .execute(&user.id(), &[Nickname::new(value)])
                    .await?;
                Ok(saved(1))
            }
        },

        Command::Vehicles { action } => match action {
            VehiclesCommand::Get(user) => outcome_json(uc.read_vehicles().execute(&user.id()).await),
            VehiclesCommand::Set { user, vehicles } => {
                uc.write_vehicles().execute(&user.id(), &vehicles).await?;
                Ok(saved(vehicles.len()))
            }
        },

        Command::Fuel { action } => match action {
            FuelCommand::Get(user) => {
                outcome_json(uc.read_fuel_records().execute(&user.id()).await)
            }
            FuelCommand::Add {
                user,
                station,
                fuel,
                liters,
                price,
                odometer,
            } => {
                let record = uc
                    .add_fuel_record()
                    .execute(
                        &user.id(),
                        NewFuelRecord {
                            station,
                            fuel_type: fuel,
                            liters,
                            price_per_liter: price,
                            odometer_km: odometer,
                        },
                    )
                    .await?;
                Ok(json!({ "added": record, "totalCost": record.total_cost() }))
            }
        },

        Command::Profile { action } => match action {
            ProfileCommand::Set {
                user,
                name,
                phone,
                city,
            } => {
                uc.update_profile()
                    .execute(
                        &user.id(),
                        &DriverProfile {
                            full_name: name,
                            phone,
                            city,
                        },
                    )
                    .await?;
                Ok(json!({ "saved": 1 }))
            }
        },
    }
}
