use crate::db::models::{NewPaymentMethodRow, PaymentMethodRow};
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::Result;
use dh_core::PaymentMethod;

pub struct PaymentMethodRowMapper;

impl InsertMapper<PaymentMethod, NewPaymentMethodRow> for PaymentMethodRowMapper {
    fn to_row(&self, owner: &str, position: i32, domain: &PaymentMethod) -> Result<NewPaymentMethodRow> {
        Ok(NewPaymentMethodRow {
            user_id: owner.to_string(),
            name: domain.name.clone(),
            active: domain.active,
            position,
        })
    }
}

impl RowMapper<PaymentMethodRow, PaymentMethod> for PaymentMethodRowMapper {
    fn to_domain(&self, row: &PaymentMethodRow) -> Result<PaymentMethod> {
        Ok(PaymentMethod {
            name: row.name.clone(),
            active: row.active,
        })
    }
}
