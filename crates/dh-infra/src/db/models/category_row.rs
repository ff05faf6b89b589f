use crate::db::schema::category;
use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = category)]
pub struct CategoryRow {
    pub user_id: String,
    pub id: String,
    pub name: String,
    pub kind: String,
    pub color: String,
    pub icon: String,
    pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = category)]
pub struct NewCategoryRow {
    pub user_id: String,
    pub id: String,
    pub name: String,
    pub kind: String,
    pub color: String,
    pub icon: String,
    pub position: i32,
}
