use crate::db::schema::payment_method;
use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = payment_method)]
pub struct PaymentMethodRow {
    pub user_id: String,
    pub name: String,
    pub active: bool,
    pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = payment_method)]
pub struct NewPaymentMethodRow {
    pub user_id: String,
    pub name: String,
    pub active: bool,
    pub position: i32,
}
