use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_token")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub token: String,
    pub user_id: i32,
    pub created_at: DateTimeUtc,
    pub expires_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dashboard_user::Entity",
        from = "Column::UserId",
        to = "super::dashboard_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DashboardUser,
}

impl Related<super::dashboard_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DashboardUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
