//! Temporary voice channel service.
//!
//! Creators are "join to create" voice channels. When a member joins one, the bot
//! spawns a personal channel named after the creator's template and tracks it here
//! until it empties.

use sea_orm::DatabaseConnection;

use crate::{
    model::temp_channel::{CreateTempCreatorDto, UpdateTempCreatorDto},
    server::{
        data::temp_channel::{TempChannelRepository, TempCreatorRepository},
        error::AppError,
        model::temp_channel::{
            CreateTempChannelParam, CreateTempCreatorParam, TempChannel, TempCreator,
        },
        util::template::{format_index, render},
    },
};

const NUMBERING_TYPES: [&str; 5] = ["number", "letter", "superscript", "subscript", "roman"];
const POSITIONS: [&str; 2] = ["top", "bottom"];

pub struct TempChannelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TempChannelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn channels(&self, guild_id: u64) -> Result<Vec<TempChannel>, AppError> {
        TempChannelRepository::new(self.db).get_all(guild_id).await
    }

    pub async fn find_channel(&self, channel_id: &str) -> Result<Option<TempChannel>, AppError> {
        TempChannelRepository::new(self.db).find(channel_id).await
    }

    /// Removes the record of a temporary channel.
    ///
    /// # Returns
    /// - `Ok(())` - Record removed
    /// - `Err(AppError::NotFound)` - No such channel in the guild
    pub async fn delete_channel(&self, guild_id: u64, channel_id: &str) -> Result<(), AppError> {
        if !TempChannelRepository::new(self.db)
            .delete(guild_id, channel_id)
            .await?
        {
            return Err(AppError::NotFound("Temp channel not found".to_string()));
        }

        Ok(())
    }

    pub async fn register_channel(
        &self,
        guild_id: u64,
        param: CreateTempChannelParam,
    ) -> Result<TempChannel, AppError> {
        TempChannelRepository::new(self.db)
            .create(guild_id, param)
            .await
    }

    pub async fn creators(&self, guild_id: u64) -> Result<Vec<TempCreator>, AppError> {
        TempCreatorRepository::new(self.db).get_all(guild_id).await
    }

    pub async fn get_creator(&self, guild_id: u64, id: i32) -> Result<TempCreator, AppError> {
        TempCreatorRepository::new(self.db)
            .find(guild_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Temp creator not found".to_string()))
    }

    /// Finds the creator whose voice channel was just joined.
    pub async fn creator_for_channel(
        &self,
        guild_id: u64,
        channel_id: &str,
    ) -> Result<Option<TempCreator>, AppError> {
        TempCreatorRepository::new(self.db)
            .find_by_channel(guild_id, channel_id)
            .await
    }

    /// Creates a creator with defaults for every omitted setting.
    ///
    /// # Returns
    /// - `Ok(TempCreator)` - The created creator
    /// - `Err(AppError::BadRequest)` - Missing channel or unknown numbering/position
    pub async fn create_creator(
        &self,
        guild_id: u64,
        dto: CreateTempCreatorDto,
    ) -> Result<TempCreator, AppError> {
        let param = CreateTempCreatorParam::from(dto);

        if param.channel_id.is_empty() {
            return Err(AppError::BadRequest("Channel is required".to_string()));
        }
        validate_options(Some(&param.numbering_type), Some(&param.position))?;

        TempCreatorRepository::new(self.db)
            .create(guild_id, param)
            .await
    }

    pub async fn update_creator(
        &self,
        guild_id: u64,
        id: i32,
        dto: UpdateTempCreatorDto,
    ) -> Result<TempCreator, AppError> {
        if dto
            .channel_id
            .as_deref()
            .is_some_and(|channel| channel.trim().is_empty())
        {
            return Err(AppError::BadRequest("Channel is required".to_string()));
        }
        validate_options(dto.numbering_type.as_deref(), dto.position.as_deref())?;

        TempCreatorRepository::new(self.db)
            .update(guild_id, id, dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Temp creator not found".to_string()))
    }

    pub async fn delete_creator(&self, guild_id: u64, id: i32) -> Result<(), AppError> {
        if !TempCreatorRepository::new(self.db)
            .delete(guild_id, id)
            .await?
        {
            return Err(AppError::NotFound("Temp creator not found".to_string()));
        }

        Ok(())
    }

    /// Builds the name of the next channel spawned by `creator` for `display_name`.
    ///
    /// `{number}` becomes the lowest index whose rendered name is not already used by
    /// a channel of this creator.
    pub async fn next_channel_name(
        &self,
        creator: &TempCreator,
        display_name: &str,
    ) -> Result<String, AppError> {
        let existing: Vec<String> = TempChannelRepository::new(self.db)
            .get_for_creator(creator.id)
            .await?
            .into_iter()
            .map(|channel| channel.name)
            .collect();

        Ok(next_free_name(creator, display_name, &existing))
    }
}

fn next_free_name(creator: &TempCreator, display_name: &str, existing: &[String]) -> String {
    let name_for = |index: u32| {
        let number = format_index(index, &creator.numbering_type);
        render(
            &creator.name_template,
            &[("user", display_name), ("number", &number)],
        )
    };

    (1..)
        .map(name_for)
        .find(|name| !existing.contains(name))
        .unwrap_or_default()
}

fn validate_options(numbering_type: Option<&str>, position: Option<&str>) -> Result<(), AppError> {
    if let Some(numbering_type) = numbering_type {
        if !NUMBERING_TYPES.contains(&numbering_type) {
            return Err(AppError::BadRequest(format!(
                "Unknown numbering type '{}'",
                numbering_type
            )));
        }
    }
    if let Some(position) = position {
        if !POSITIONS.contains(&position) {
            return Err(AppError::BadRequest(format!(
                "Unknown position '{}'",
                position
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    async fn setup() -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_table(entity::prelude::TempCreator)
            .with_table(entity::prelude::TempChannel)
            .build()
            .await
            .unwrap()
    }

    /// Tests creator defaults and the required channel.
    ///
    /// Expected: defaults applied, Err(BadRequest) without channel
    #[tokio::test]
    async fn creates_creator_with_defaults() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = TempChannelService::new(db);
        let creator = service
            .create_creator(
                1,
                CreateTempCreatorDto {
                    channel_id: "10".to_string(),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(creator.name_template, "🔊 {user}'s channel");
        assert_eq!(creator.numbering_type, "number");
        assert_eq!(creator.position, "bottom");
        assert_eq!(creator.default_bitrate, 64000);
        assert!(creator.allow_kick);

        let result = service
            .create_creator(1, CreateTempCreatorDto::default())
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests that unknown creators give NotFound.
    ///
    /// Expected: Err(NotFound) for get, update and delete
    #[tokio::test]
    async fn missing_creator_not_found() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = TempChannelService::new(db);
        assert!(matches!(
            service.get_creator(1, 404).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service
                .update_creator(1, 404, UpdateTempCreatorDto::default())
                .await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_creator(1, 404).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_channel(1, "404").await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Tests that channel names skip indices already in use.
    ///
    /// Expected: "Room II" while "Room I" exists, "Room I" once it is gone
    #[tokio::test]
    async fn next_name_uses_free_index() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = TempChannelService::new(db);
        let creator = service
            .create_creator(
                1,
                CreateTempCreatorDto {
                    channel_id: "10".to_string(),
                    name_template: Some("Room {number}".to_string()),
                    numbering_type: Some("roman".to_string()),
                    ..Default::default()
                },
            )
            .await?;

        service
            .register_channel(
                1,
                CreateTempChannelParam {
                    channel_id: "500".to_string(),
                    owner_id: "5".to_string(),
                    creator_id: Some(creator.id),
                    name: "Room I".to_string(),
                },
            )
            .await?;

        assert_eq!(service.next_channel_name(&creator, "Bob").await?, "Room II");

        service.delete_channel(1, "500").await?;
        assert_eq!(service.next_channel_name(&creator, "Bob").await?, "Room I");

        Ok(())
    }

    /// Tests that the display name fills the user placeholder.
    ///
    /// Expected: "🔊 Alice's channel"
    #[tokio::test]
    async fn renders_user_placeholder() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let model = factory::temp_voice::TempCreatorFactory::new(db, "1")
            .name_template("🔊 {user}'s channel")
            .build()
            .await?;
        let creator = TempCreator::from_entity(model)?;

        let name = TempChannelService::new(db)
            .next_channel_name(&creator, "Alice")
            .await?;
        assert_eq!(name, "🔊 Alice's channel");

        Ok(())
    }
}
