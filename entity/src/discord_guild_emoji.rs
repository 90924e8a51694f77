use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_guild_emoji")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub emoji_id: String,
    pub guild_id: String,
    pub name: String,
    pub animated: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
