//! Reaction role factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a button reaction role bound to a fresh message & role.
pub async fn create_reaction_role(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::reaction_role::Model, DbErr> {
    let id = next_id();
    entity::reaction_role::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(format!("{}", id)),
        message_id: ActiveValue::Set(format!("{}", id + 1_000_000)),
        title: ActiveValue::Set("Roles".to_string()),
        description: ActiveValue::Set("Pick a role".to_string()),
        kind: ActiveValue::Set("button".to_string()),
        emoji: ActiveValue::Set("✅".to_string()),
        role_id: ActiveValue::Set(format!("{}", id + 2_000_000)),
        label: ActiveValue::Set(format!("Role {}", id)),
        color: ActiveValue::Set("primary".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
