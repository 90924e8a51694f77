//! Leveling service covering message XP, voice XP, rewards & leaderboards.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{guild::GuildSettings, leveling::CreateLevelRewardDto},
    server::{
        data::{
            guild_config::GuildConfigRepository,
            leveling::{LevelRewardRepository, VoiceSessionRepository},
            member::MemberRepository,
        },
        error::AppError,
        model::{
            leveling::{CreateLevelRewardParam, LevelReward, VoiceSession},
            member::{Member, XpGain},
        },
        util::level::{calculate_level, MAX_LEVEL, MAX_XP},
    },
};

/// Number of sessions returned by the voice session listing.
const VOICE_SESSION_LIMIT: u64 = 50;

/// Level-up that the bot still has to announce and reward on Discord.
#[derive(Debug, Clone)]
pub struct LevelUp {
    pub member: Member,
    pub level: i32,
    /// Roles to grant, from `level_roles` and enabled role rewards.
    pub role_ids: Vec<String>,
    /// Channel configured for announcements, if any.
    pub announce_channel: Option<String>,
    pub language: String,
}

impl LevelUp {
    fn from_gain(gain: XpGain, settings: &GuildSettings, rewards: Vec<LevelReward>) -> Self {
        let level = gain.member.level;

        let mut role_ids: Vec<String> = settings
            .level_roles
            .get(&level.to_string())
            .cloned()
            .into_iter()
            .collect();
        for reward in rewards.into_iter().filter(|r| r.reward_type == "role") {
            if !role_ids.contains(&reward.reward_value) {
                role_ids.push(reward.reward_value);
            }
        }

        Self {
            member: gain.member,
            level,
            role_ids,
            announce_channel: Some(settings.level_up_channel.clone()).filter(|c| !c.is_empty()),
            language: settings.language.clone(),
        }
    }
}

pub struct LevelingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn leaderboard(&self, guild_id: u64, limit: u64) -> Result<Vec<Member>, AppError> {
        MemberRepository::new(self.db)
            .leaderboard(guild_id, limit)
            .await
    }

    /// Gets the leveling data of a member, creating an empty record when absent.
    pub async fn get_member(&self, guild_id: u64, user_id: &str) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .get_or_create(guild_id, user_id)
            .await
    }

    /// Position of a member on the leaderboard, starting at 1.
    pub async fn rank(&self, guild_id: u64, member: &Member) -> Result<u64, AppError> {
        MemberRepository::new(self.db)
            .rank(guild_id, member.xp)
            .await
    }

    /// Overwrites XP and/or level of a member.
    ///
    /// When only `xp` is given the level is recomputed from it.
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(AppError::BadRequest)` - Neither value given, or a value outside
    ///   `0..=MAX_XP` / `0..=MAX_LEVEL`
    pub async fn update_member(
        &self,
        guild_id: u64,
        user_id: &str,
        xp: Option<i64>,
        level: Option<i32>,
    ) -> Result<Member, AppError> {
        if xp.is_none() && level.is_none() {
            return Err(AppError::BadRequest(
                "Either xp or level must be provided".to_string(),
            ));
        }
        if xp.is_some_and(|xp| xp < 0) || level.is_some_and(|level| level < 0) {
            return Err(AppError::BadRequest(
                "XP and level must not be negative".to_string(),
            ));
        }
        if xp.is_some_and(|xp| xp > MAX_XP) || level.is_some_and(|level| level > MAX_LEVEL) {
            return Err(AppError::BadRequest(format!(
                "XP must be at most {} and level at most {}",
                MAX_XP, MAX_LEVEL
            )));
        }

        let repo = MemberRepository::new(self.db);
        let current = repo.get_or_create(guild_id, user_id).await?;

        let xp = xp.unwrap_or(current.xp);
        let level = level.unwrap_or_else(|| calculate_level(xp));

        repo.set_progress(guild_id, user_id, xp, level).await
    }

    pub async fn rewards(&self, guild_id: u64) -> Result<Vec<LevelReward>, AppError> {
        LevelRewardRepository::new(self.db).get_all(guild_id).await
    }

    /// Creates a level reward.
    ///
    /// # Returns
    /// - `Ok(LevelReward)` - Created reward, enabled
    /// - `Err(AppError::BadRequest)` - Level below 1, unknown type or empty value
    pub async fn create_reward(
        &self,
        guild_id: u64,
        dto: CreateLevelRewardDto,
    ) -> Result<LevelReward, AppError> {
        let param = CreateLevelRewardParam::from(dto);

        if param.level < 1 {
            return Err(AppError::BadRequest("Level must be at least 1".to_string()));
        }
        if param.reward_type != "role" && param.reward_type != "emoji" {
            return Err(AppError::BadRequest(
                "Reward type must be 'role' or 'emoji'".to_string(),
            ));
        }
        if param.reward_value.is_empty() {
            return Err(AppError::BadRequest("Reward value is required".to_string()));
        }

        LevelRewardRepository::new(self.db)
            .create(guild_id, param)
            .await
    }

    pub async fn delete_reward(&self, guild_id: u64, id: i32) -> Result<(), AppError> {
        if !LevelRewardRepository::new(self.db)
            .delete(guild_id, id)
            .await?
        {
            return Err(AppError::NotFound("Reward not found".to_string()));
        }

        Ok(())
    }

    pub async fn toggle_reward(
        &self,
        guild_id: u64,
        id: i32,
        enabled: bool,
    ) -> Result<LevelReward, AppError> {
        LevelRewardRepository::new(self.db)
            .set_enabled(guild_id, id, enabled)
            .await?
            .ok_or_else(|| AppError::NotFound("Reward not found".to_string()))
    }

    pub async fn voice_sessions(&self, guild_id: u64) -> Result<Vec<VoiceSession>, AppError> {
        VoiceSessionRepository::new(self.db)
            .latest(guild_id, VOICE_SESSION_LIMIT)
            .await
    }

    /// Returns `(ended sessions, sessions still running)`.
    pub async fn voice_stats(&self, guild_id: u64) -> Result<(u64, u64), AppError> {
        VoiceSessionRepository::new(self.db).stats(guild_id).await
    }

    /// Credits message XP to the author of a guild message.
    ///
    /// Messages in ignored channels, messages while leveling is disabled and messages
    /// inside the cooldown window are only counted.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Author of the message
    /// - `channel_id` - Channel the message was sent in
    /// - `now` - Time the message was received
    ///
    /// # Returns
    /// - `Ok(Some(LevelUp))` - The member reached a new level
    /// - `Ok(None)` - No XP awarded or no level change
    pub async fn award_message_xp(
        &self,
        guild_id: u64,
        user_id: &str,
        channel_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<LevelUp>, AppError> {
        let settings = GuildConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await?
            .settings;
        let member_repo = MemberRepository::new(self.db);

        if !settings.leveling_enabled
            || settings
                .ignored_channels
                .iter()
                .any(|ignored| ignored == channel_id)
        {
            member_repo.count_message(guild_id, user_id).await?;
            return Ok(None);
        }

        let member = member_repo.get_or_create(guild_id, user_id).await?;
        if let Some(last_xp_at) = member.last_xp_at {
            if (now - last_xp_at).num_seconds() < settings.xp_cooldown {
                member_repo.count_message(guild_id, user_id).await?;
                return Ok(None);
            }
        }

        let gain = member_repo
            .add_xp(guild_id, user_id, settings.xp_per_message, now, true)
            .await?;

        self.level_up(guild_id, gain, &settings).await
    }

    /// Opens a voice session for a member joining `channel_id`.
    ///
    /// # Arguments
    /// - `members_in_channel` - Members present after the join, including this one
    pub async fn start_voice_session(
        &self,
        guild_id: u64,
        user_id: &str,
        channel_id: &str,
        members_in_channel: usize,
        now: DateTime<Utc>,
    ) -> Result<VoiceSession, AppError> {
        let settings = GuildConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await?
            .settings;

        let min_users = usize::try_from(settings.voice_xp_min_users).unwrap_or(0);
        let eligible = settings.voice_xp_enabled
            && channel_id != settings.voice_afk_channel
            && members_in_channel >= min_users;

        let repo = VoiceSessionRepository::new(self.db);
        if let Some(open) = repo.find_open(guild_id, user_id).await? {
            repo.end(open.id, now, 0).await?;
        }

        repo.start(guild_id, user_id, channel_id, eligible, now).await
    }

    /// Closes the open voice session of a member and credits voice XP.
    ///
    /// # Returns
    /// - `Ok(Some(LevelUp))` - The credited XP raised the level
    /// - `Ok(None)` - No open session, no XP or no level change
    pub async fn end_voice_session(
        &self,
        guild_id: u64,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<LevelUp>, AppError> {
        let repo = VoiceSessionRepository::new(self.db);
        let Some(session) = repo.find_open(guild_id, user_id).await? else {
            return Ok(None);
        };

        let settings = GuildConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await?
            .settings;

        let xp = if session.eligible && settings.voice_xp_enabled {
            session.minutes_until(now) * settings.voice_xp_per_minute
        } else {
            0
        };

        repo.end(session.id, now, xp).await?;

        if xp <= 0 {
            return Ok(None);
        }

        let gain = MemberRepository::new(self.db)
            .add_xp(guild_id, user_id, xp, now, false)
            .await?;

        self.level_up(guild_id, gain, &settings).await
    }

    async fn level_up(
        &self,
        guild_id: u64,
        gain: XpGain,
        settings: &GuildSettings,
    ) -> Result<Option<LevelUp>, AppError> {
        if !gain.leveled_up() {
            return Ok(None);
        }

        let rewards = LevelRewardRepository::new(self.db)
            .get_enabled_for_level(guild_id, gain.member.level)
            .await?;

        Ok(Some(LevelUp::from_gain(gain, settings, rewards)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    use crate::{model::guild::UpdateGuildConfigDto, server::service::guild::GuildService};

    async fn setup() -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .with_table(entity::prelude::GuildMember)
            .with_table(entity::prelude::LevelReward)
            .with_table(entity::prelude::VoiceSession)
            .build()
            .await
            .unwrap()
    }

    /// Tests that message XP respects the cooldown.
    ///
    /// Expected: XP only for the first and third message
    #[tokio::test]
    async fn message_xp_respects_cooldown() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = LevelingService::new(db);
        let start = Utc::now();
        service.award_message_xp(1, "5", "10", start).await?;
        service
            .award_message_xp(1, "5", "10", start + Duration::seconds(30))
            .await?;
        service
            .award_message_xp(1, "5", "10", start + Duration::seconds(61))
            .await?;

        let member = service.get_member(1, "5").await?;
        assert_eq!(member.xp, 30);
        assert_eq!(member.messages, 3);

        Ok(())
    }

    /// Tests that ignored channels never award XP.
    ///
    /// Expected: message counted without XP
    #[tokio::test]
    async fn ignored_channel_awards_nothing() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        GuildService::new(db)
            .update(
                1,
                UpdateGuildConfigDto {
                    ignored_channels: Some(vec!["10".to_string()]),
                    ..Default::default()
                }
                .into(),
            )
            .await?;

        let service = LevelingService::new(db);
        let level_up = service.award_message_xp(1, "5", "10", Utc::now()).await?;

        assert!(level_up.is_none());
        let member = service.get_member(1, "5").await?;
        assert_eq!(member.xp, 0);
        assert_eq!(member.messages, 1);

        Ok(())
    }

    /// Tests that a level-up collects configured role and reward roles.
    ///
    /// Expected: level 1 with both roles and the configured channel
    #[tokio::test]
    async fn level_up_collects_roles() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        GuildService::new(db)
            .update(
                1,
                UpdateGuildConfigDto {
                    level_roles: Some([("1".to_string(), "111".to_string())].into()),
                    level_up_channel: Some("77".to_string()),
                    ..Default::default()
                }
                .into(),
            )
            .await?;
        factory::leveling::LevelRewardFactory::new(db, "1")
            .level(1)
            .reward("role", "222")
            .build()
            .await?;
        factory::leveling::LevelRewardFactory::new(db, "1")
            .level(1)
            .reward("role", "333")
            .enabled(false)
            .build()
            .await?;
        factory::guild_member::GuildMemberFactory::new(db, "1")
            .user_id("5")
            .xp(90)
            .build()
            .await?;

        let level_up = LevelingService::new(db)
            .award_message_xp(1, "5", "10", Utc::now())
            .await?
            .expect("member should level up");

        assert_eq!(level_up.level, 1);
        assert_eq!(level_up.role_ids, vec!["111".to_string(), "222".to_string()]);
        assert_eq!(level_up.announce_channel.as_deref(), Some("77"));

        Ok(())
    }

    /// Tests that updating only XP recomputes the level.
    ///
    /// Expected: level 2 for 210 XP, explicit level kept otherwise
    #[tokio::test]
    async fn update_member_recomputes_level() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = LevelingService::new(db);
        let member = service.update_member(1, "5", Some(210), None).await?;
        assert_eq!(member.level, 2);

        let member = service.update_member(1, "5", Some(0), Some(7)).await?;
        assert_eq!(member.level, 7);

        let result = service.update_member(1, "5", None, None).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests the upper bounds on dashboard edits.
    ///
    /// Expected: Err(BadRequest) above the limits, Ok exactly at them
    #[tokio::test]
    async fn update_member_rejects_out_of_range_values() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = LevelingService::new(db);
        let result = service.update_member(1, "5", Some(i64::MAX), None).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let result = service.update_member(1, "5", None, Some(i32::MAX)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let member = service.update_member(1, "5", Some(MAX_XP), None).await?;
        assert_eq!(member.xp, MAX_XP);
        assert_eq!(member.level, calculate_level(MAX_XP));

        let member = service.update_member(1, "5", None, Some(MAX_LEVEL)).await?;
        assert_eq!(member.level, MAX_LEVEL);

        Ok(())
    }

    /// Tests reward validation and missing rewards.
    ///
    /// Expected: Err(BadRequest) for level 0 or empty value, Err(NotFound) for unknown ids
    #[tokio::test]
    async fn validates_rewards() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = LevelingService::new(db);
        let invalid = [
            CreateLevelRewardDto {
                level: 0,
                reward_type: "role".to_string(),
                reward_value: "1".to_string(),
                reward_name: None,
            },
            CreateLevelRewardDto {
                level: 3,
                reward_type: "role".to_string(),
                reward_value: "  ".to_string(),
                reward_name: None,
            },
        ];
        for dto in invalid {
            assert!(matches!(
                service.create_reward(1, dto).await,
                Err(AppError::BadRequest(_))
            ));
        }

        assert!(matches!(
            service.delete_reward(1, 404).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.toggle_reward(1, 404, false).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Tests voice XP for eligible and AFK sessions.
    ///
    /// Expected: minutes times rate for the normal channel, nothing for the AFK channel
    #[tokio::test]
    async fn voice_session_credits_minutes() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        GuildService::new(db)
            .update(
                1,
                UpdateGuildConfigDto {
                    voice_xp_enabled: Some(true),
                    voice_xp_per_minute: Some(5),
                    voice_xp_min_users: Some(2),
                    voice_afk_channel: Some("99".to_string()),
                    ..Default::default()
                }
                .into(),
            )
            .await?;

        let service = LevelingService::new(db);
        let start = Utc::now() - Duration::minutes(30);

        service.start_voice_session(1, "5", "20", 2, start).await?;
        service
            .end_voice_session(1, "5", start + Duration::minutes(10))
            .await?;

        service.start_voice_session(1, "6", "99", 3, start).await?;
        service
            .end_voice_session(1, "6", start + Duration::minutes(10))
            .await?;

        assert_eq!(service.get_member(1, "5").await?.xp, 50);
        assert_eq!(service.get_member(1, "6").await?.xp, 0);
        assert_eq!(service.voice_stats(1).await?, (2, 0));

        Ok(())
    }
}
