use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "temp_creator")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub category_id: Option<String>,
    pub name_template: String,
    pub numbering_type: String,
    pub position: String,
    pub default_limit: i32,
    pub default_bitrate: i32,
    pub allow_rename: bool,
    pub allow_limit: bool,
    pub allow_lock: bool,
    pub allow_hide: bool,
    pub allow_kick: bool,
    pub allow_permit: bool,
    pub allow_bitrate: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
