use crate::db::models::{CategoryRow, NewCategoryRow};
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::{anyhow, Result};
use dh_core::{Category, CategoryId, CategoryKind};

pub struct CategoryRowMapper;

impl InsertMapper<Category, NewCategoryRow> for CategoryRowMapper {
    fn to_row(&self, owner: &str, position: i32, domain: &Category) -> Result<NewCategoryRow> {
        Ok(NewCategoryRow {
            user_id: owner.to_string(),
            id: domain.id.as_str().to_string(),
            name: domain.name.clone(),
            kind: domain.kind.as_str().to_string(),
            color: domain.color.clone(),
            icon: domain.icon.clone(),
            position,
        })
    }
}

impl RowMapper<CategoryRow, Category> for CategoryRowMapper {
    fn to_domain(&self, row: &CategoryRow) -> Result<Category> {
        let kind = CategoryKind::parse(&row.kind)
            .ok_or_else(|| anyhow!("invalid category kind: {}", row.kind))?;

        Ok(Category {
            id: CategoryId::from(row.id.as_str()),
            name: row.name.clone(),
            kind,
            color: row.color.clone(),
            icon: row.icon.clone(),
        })
    }
}
