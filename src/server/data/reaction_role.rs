//! Reaction role data repository.
//!
//! A reaction role "panel" is stored as one row per selectable role. All rows of a panel
//! share channel, title, description and message id.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    model::reaction_role::UpdateReactionRoleDto,
    server::{
        error::AppError,
        model::reaction_role::{CreateReactionRolesParam, ReactionRole, PENDING_MESSAGE_ID},
    },
};

pub struct ReactionRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionRoleRepository<'a> {
    /// Creates a new ReactionRoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReactionRoleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<ReactionRole>, AppError> {
        entity::prelude::ReactionRole::find()
            .filter(entity::reaction_role::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::reaction_role::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ReactionRole::from_entity)
            .collect()
    }

    pub async fn find_by_id(
        &self,
        guild_id: u64,
        id: i32,
    ) -> Result<Option<ReactionRole>, AppError> {
        entity::prelude::ReactionRole::find_by_id(id)
            .filter(entity::reaction_role::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(ReactionRole::from_entity)
            .transpose()
    }

    /// Returns every row of the panel the row `id` belongs to.
    ///
    /// Rows of a panel were inserted together, so they share channel, title, message id
    /// and creation time. Empty when the row does not exist in the guild.
    pub async fn get_panel(&self, guild_id: u64, id: i32) -> Result<Vec<ReactionRole>, AppError> {
        let Some(anchor) = entity::prelude::ReactionRole::find_by_id(id)
            .filter(entity::reaction_role::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        entity::prelude::ReactionRole::find()
            .filter(entity::reaction_role::Column::GuildId.eq(anchor.guild_id))
            .filter(entity::reaction_role::Column::ChannelId.eq(anchor.channel_id))
            .filter(entity::reaction_role::Column::MessageId.eq(anchor.message_id))
            .filter(entity::reaction_role::Column::Title.eq(anchor.title))
            .filter(entity::reaction_role::Column::CreatedAt.eq(anchor.created_at))
            .order_by_asc(entity::reaction_role::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ReactionRole::from_entity)
            .collect()
    }

    /// Stores the Discord message a panel was posted as on all of its rows.
    pub async fn set_message_id(&self, ids: &[i32], message_id: &str) -> Result<(), AppError> {
        entity::prelude::ReactionRole::update_many()
            .col_expr(
                entity::reaction_role::Column::MessageId,
                sea_orm::sea_query::Expr::value(message_id),
            )
            .filter(entity::reaction_role::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds the row a Discord reaction refers to.
    pub async fn find_by_message_emoji(
        &self,
        message_id: &str,
        emoji: &str,
    ) -> Result<Option<ReactionRole>, AppError> {
        entity::prelude::ReactionRole::find()
            .filter(entity::reaction_role::Column::MessageId.eq(message_id))
            .filter(entity::reaction_role::Column::Emoji.eq(emoji))
            .one(self.db)
            .await?
            .map(ReactionRole::from_entity)
            .transpose()
    }

    /// Inserts one row per role of a new panel within a single transaction.
    ///
    /// All rows start with the pending message id until the panel is posted.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `param` - Shared panel fields and the role entries
    ///
    /// # Returns
    /// - `Ok(Vec<ReactionRole>)` - Created rows in entry order
    /// - `Err(AppError)` - Database error, nothing is stored
    pub async fn create_many(
        &self,
        guild_id: u64,
        param: CreateReactionRolesParam,
    ) -> Result<Vec<ReactionRole>, AppError> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let mut created = Vec::with_capacity(param.roles.len());
        for entry in param.roles {
            let entity = entity::reaction_role::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                channel_id: ActiveValue::Set(param.channel_id.clone()),
                message_id: ActiveValue::Set(PENDING_MESSAGE_ID.to_string()),
                title: ActiveValue::Set(param.title.clone()),
                description: ActiveValue::Set(param.description.clone()),
                kind: ActiveValue::Set(param.kind.clone()),
                emoji: ActiveValue::Set(entry.emoji),
                role_id: ActiveValue::Set(entry.role_id),
                label: ActiveValue::Set(entry.label),
                color: ActiveValue::Set(param.color.clone()),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            created.push(entity);
        }

        txn.commit().await?;

        created.into_iter().map(ReactionRole::from_entity).collect()
    }

    /// Applies the fields present in `param` to one row.
    ///
    /// # Returns
    /// - `Ok(Some(ReactionRole))` - The updated row
    /// - `Ok(None)` - No row with that id in the guild
    /// - `Err(AppError)` - Database error during update
    pub async fn update(
        &self,
        guild_id: u64,
        id: i32,
        param: UpdateReactionRoleDto,
    ) -> Result<Option<ReactionRole>, AppError> {
        let Some(existing) = entity::prelude::ReactionRole::find_by_id(id)
            .filter(entity::reaction_role::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(emoji) = param.emoji {
            active.emoji = ActiveValue::Set(emoji);
        }
        if let Some(label) = param.label {
            active.label = ActiveValue::Set(label);
        }
        if let Some(color) = param.color {
            active.color = ActiveValue::Set(color);
        }

        let updated = active.update(self.db).await?;
        Ok(Some(ReactionRole::from_entity(updated)?))
    }

    pub async fn delete(&self, guild_id: u64, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::ReactionRole::delete_many()
            .filter(entity::reaction_role::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::reaction_role::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
