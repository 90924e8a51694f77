use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket_panel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: Option<String>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub color: String,
    pub button_label: String,
    pub button_emoji: String,
    pub ticket_category: Option<String>,
    pub ticket_name_template: String,
    #[sea_orm(column_type = "Text")]
    pub categories: String,
    #[sea_orm(column_type = "Text")]
    pub custom_fields: String,
    #[sea_orm(column_type = "Text")]
    pub support_roles: String,
    #[sea_orm(column_type = "Text")]
    pub ping_roles: String,
    pub claim_enabled: bool,
    pub transcript_enabled: bool,
    pub ticket_counter: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
