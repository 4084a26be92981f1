use contracts::domain::platform::aggregate::Platform;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "platforms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub platform_id: String,
    pub platform: String,
    pub platform_name: String,
    pub standardized_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Platform {
    fn from(m: Model) -> Self {
        Platform {
            platform_id: m.platform_id,
            platform: m.platform,
            platform_name: m.platform_name,
            standardized_name: m.standardized_name,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Platform>> {
    let items = Entity::find()
        .order_by_asc(Column::PlatformId)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Platform>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(record: &Platform) -> anyhow::Result<()> {
    let active = ActiveModel {
        platform_id: Set(record.platform_id.clone()),
        platform: Set(record.platform.clone()),
        platform_name: Set(record.platform_name.clone()),
        standardized_name: Set(record.standardized_name.clone()),
    };
    active.insert(conn()).await?;
    Ok(())
}

pub async fn update(record: &Platform) -> anyhow::Result<()> {
    let active = ActiveModel {
        platform_id: Set(record.platform_id.clone()),
        platform: Set(record.platform.clone()),
        platform_name: Set(record.platform_name.clone()),
        standardized_name: Set(record.standardized_name.clone()),
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
