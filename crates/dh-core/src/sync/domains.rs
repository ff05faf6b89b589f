use serde_json::Value;

use super::{CodecError, SyncDomain};
use crate::domain::category::validate_categories;
use crate::domain::fuel::validate_fuel_records;
use crate::domain::nickname::validate_nickname;
use crate::domain::payment::validate_payment_methods;
use crate::domain::vehicle::validate_vehicles;
use crate::domain::{Category, FuelRecord, Nickname, PaymentMethod, ValidationError, Vehicle};
use crate::profile::ProfileField;
use crate::setup::SetupStep;

pub struct Payments;

impl SyncDomain for Payments {
    type Record = PaymentMethod;
    const NAME: &'static str = "payments";
    const FIELD: ProfileField = ProfileField::Payment;
    const STEP: Option<SetupStep> = Some(SetupStep::Payment);

    fn validate(records: &[PaymentMethod]) -> Result<(), ValidationError> {
        validate_payment_methods(records)
    }
}

pub struct Categories;

impl SyncDomain for Categories {
    type Record = Category;
    const NAME: &'static str = "categories";
    const FIELD: ProfileField = ProfileField::Categories;
    const STEP: Option<SetupStep> = Some(SetupStep::Categories);

    fn validate(records: &[Category]) -> Result<(), ValidationError> {
        validate_categories(records)
    }
}

pub struct Vehicles;

impl SyncDomain for Vehicles {
    type Record = Vehicle;
    const NAME: &'static str = "vehicles";
    const FIELD: ProfileField = ProfileField::Vehicle;
    const STEP: Option<SetupStep> = Some(SetupStep::Vehicle);

    fn validate(records: &[Vehicle]) -> Result<(), ValidationError> {
        validate_vehicles(records)
    }
}

pub struct FuelRecords;

impl SyncDomain for FuelRecords {
    type Record = FuelRecord;
    const NAME: &'static str = "fuel";
    const FIELD: ProfileField = ProfileField::FuelRecords;
    const STEP: Option<SetupStep> = None;

    fn validate(records: &[FuelRecord]) -> Result<(), ValidationError> {
        validate_fuel_records(records)
    }
}

/// The nickname is a bare string remotely and a single-row snapshot locally.
pub struct NicknameDomain;

impl SyncDomain for NicknameDomain {
    type Record = Nickname;
    const NAME: &'static str = "nickname";
    const FIELD: ProfileField = ProfileField::Nickname;
    const STEP: Option<SetupStep> = Some(SetupStep::Nickname);

    fn validate(records: &[Nickname]) -> Result<(), ValidationError> {
        validate_nickname(records)
    }

    fn encode(records: &[Nickname]) -> Result<Value, CodecError> {
        match records {
            [nickname] => Ok(Value::String(nickname.0.clone())),
            other => Err(CodecError::Unexpected(format!(
                "nickname snapshot must hold one value, got {}",
                other.len()
            ))),
        }
    }

    fn decode(value: Value) -> Result<Vec<Nickname>, CodecError> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::String(s) if s.trim().is_empty() => Ok(Vec::new()),
            Value::String(s) => Ok(vec![Nickname(s)]),
            other => Err(CodecError::Unexpected(format!(
                "nickname must be a string, got {other}"
            ))),
        }
    }
}
