use crate::db::models::{NewNicknameRow, NicknameRow};
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::Result;
use dh_core::Nickname;

pub struct NicknameRowMapper;

impl InsertMapper<Nickname, NewNicknameRow> for NicknameRowMapper {
    // Single-row table: position is always 0.
    fn to_row(&self, owner: &str, position: i32, domain: &Nickname) -> Result<NewNicknameRow> {
        Ok(NewNicknameRow {
            user_id: owner.to_string(),
            nickname: domain.as_str().to_string(),
            position,
        })
    }
}

impl RowMapper<NicknameRow, Nickname> for NicknameRowMapper {
    fn to_domain(&self, row: &NicknameRow) -> Result<Nickname> {
        Ok(Nickname::new(row.nickname.clone()))
    }
}
