use contracts::domain::format_mapping::aggregate::FormatMapping;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "format_mappings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub standardized_name: String,
    pub content_box: String,
    pub marke: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FormatMapping {
    fn from(m: Model) -> Self {
        FormatMapping {
            standardized_name: m.standardized_name,
            content_box: m.content_box,
            marke: m.marke,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<FormatMapping>> {
    let items = Entity::find()
        .order_by_asc(Column::StandardizedName)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<FormatMapping>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(record: &FormatMapping) -> anyhow::Result<()> {
    let active = ActiveModel {
        standardized_name: Set(record.standardized_name.clone()),
        content_box: Set(record.content_box.clone()),
        marke: Set(record.marke.clone()),
    };
    active.insert(conn()).await?;
    Ok(())
}

pub async fn update(record: &FormatMapping) -> anyhow::Result<()> {
    let active = ActiveModel {
        standardized_name: Set(record.standardized_name.clone()),
        content_box: Set(record.content_box.clone()),
        marke: Set(record.marke.clone()),
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
