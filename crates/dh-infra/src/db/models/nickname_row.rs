use crate::db::schema::user_nickname;
use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = user_nickname)]
pub struct NicknameRow {
    pub user_id: String,
    pub nickname: String,
    pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = user_nickname)]
pub struct NewNicknameRow {
    pub user_id: String,
    pub nickname: String,
    pub position: i32,
}
