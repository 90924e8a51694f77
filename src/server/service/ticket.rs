//! Ticket panel & ticket service.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::ticket::{CreateTicketPanelDto, TicketStatsDto, UpdateTicketPanelDto},
    server::{
        data::ticket::{TicketPanelRepository, TicketRepository},
        error::AppError,
        model::ticket::{
            CreateTicketPanelParam, CreateTicketParam, Ticket, TicketPanel, TicketStatus,
        },
        util::template::render,
    },
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn panels(&self, guild_id: u64) -> Result<Vec<TicketPanel>, AppError> {
        TicketPanelRepository::new(self.db).get_all(guild_id).await
    }

    pub async fn get_panel(&self, guild_id: u64, id: i32) -> Result<TicketPanel, AppError> {
        TicketPanelRepository::new(self.db)
            .find(guild_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket panel not found".to_string()))
    }

    /// Creates a ticket panel with defaults for every omitted setting.
    ///
    /// # Returns
    /// - `Ok(TicketPanel)` - The created, not yet posted panel
    /// - `Err(AppError::BadRequest)` - No channel given
    pub async fn create_panel(
        &self,
        guild_id: u64,
        dto: CreateTicketPanelDto,
    ) -> Result<TicketPanel, AppError> {
        let param = CreateTicketPanelParam::from(dto);
        if param.channel_id.is_empty() {
            return Err(AppError::BadRequest("Channel is required".to_string()));
        }

        TicketPanelRepository::new(self.db)
            .create(guild_id, param)
            .await
    }

    pub async fn update_panel(
        &self,
        guild_id: u64,
        id: i32,
        dto: UpdateTicketPanelDto,
    ) -> Result<TicketPanel, AppError> {
        if dto
            .channel_id
            .as_deref()
            .is_some_and(|channel| channel.trim().is_empty())
        {
            return Err(AppError::BadRequest("Channel is required".to_string()));
        }

        TicketPanelRepository::new(self.db)
            .update(guild_id, id, dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket panel not found".to_string()))
    }

    pub async fn delete_panel(&self, guild_id: u64, id: i32) -> Result<(), AppError> {
        if !TicketPanelRepository::new(self.db)
            .delete(guild_id, id)
            .await?
        {
            return Err(AppError::NotFound("Ticket panel not found".to_string()));
        }

        Ok(())
    }

    /// Remembers the Discord message a panel was posted as.
    pub async fn mark_panel_sent(&self, id: i32, message_id: &str) -> Result<(), AppError> {
        TicketPanelRepository::new(self.db)
            .set_message_id(id, message_id)
            .await
    }

    /// Lists tickets newest first, optionally filtered by status.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Unknown status filter
    pub async fn tickets(
        &self,
        guild_id: u64,
        status: Option<&str>,
    ) -> Result<Vec<Ticket>, AppError> {
        let status = match status.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => Some(TicketStatus::parse(value).ok_or_else(|| {
                AppError::BadRequest(format!("Unknown ticket status '{}'", value))
            })?),
            None => None,
        };

        TicketRepository::new(self.db).get_all(guild_id, status).await
    }

    pub async fn stats(&self, guild_id: u64) -> Result<TicketStatsDto, AppError> {
        TicketRepository::new(self.db).stats(guild_id).await
    }

    /// Claims an open ticket for `user_id`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such ticket in the guild
    /// - `Err(AppError::BadRequest)` - Ticket is not open
    pub async fn claim(&self, guild_id: u64, id: i32, user_id: &str) -> Result<Ticket, AppError> {
        let repo = TicketRepository::new(self.db);
        let ticket = self.find_ticket(&repo, guild_id, id).await?;

        if ticket.status != TicketStatus::Open {
            return Err(AppError::BadRequest(format!(
                "Only open tickets can be claimed, ticket is {}",
                ticket.status
            )));
        }

        repo.claim(id, user_id).await
    }

    /// Closes a ticket that is open or claimed.
    pub async fn close(&self, guild_id: u64, id: i32, user_id: &str) -> Result<Ticket, AppError> {
        let repo = TicketRepository::new(self.db);
        let ticket = self.find_ticket(&repo, guild_id, id).await?;

        if ticket.status == TicketStatus::Closed {
            return Err(AppError::BadRequest("Ticket is already closed".to_string()));
        }

        repo.close(id, user_id, Utc::now()).await
    }

    /// Reserves the next ticket number of a panel and renders the channel name.
    ///
    /// # Returns
    /// - `Ok((TicketPanel, number, channel_name))` - Everything needed to create the channel
    /// - `Err(AppError::NotFound)` - No such panel in the guild
    pub async fn reserve_ticket(
        &self,
        guild_id: u64,
        panel_id: i32,
        user_name: &str,
    ) -> Result<(TicketPanel, i32, String), AppError> {
        let repo = TicketPanelRepository::new(self.db);
        let panel = self.get_panel(guild_id, panel_id).await?;

        let number = repo
            .next_ticket_number(panel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket panel not found".to_string()))?;

        let channel_name = ticket_channel_name(&panel.ticket_name_template, number, user_name);

        Ok((panel, number, channel_name))
    }

    pub async fn record_ticket(
        &self,
        guild_id: u64,
        param: CreateTicketParam,
    ) -> Result<Ticket, AppError> {
        TicketRepository::new(self.db).create(guild_id, param).await
    }

    async fn find_ticket(
        &self,
        repo: &TicketRepository<'_>,
        guild_id: u64,
        id: i32,
    ) -> Result<Ticket, AppError> {
        repo.find(guild_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))
    }
}

/// Renders a ticket channel name, zero padding the number to four digits.
fn ticket_channel_name(template: &str, number: i32, user_name: &str) -> String {
    let number = format!("{:04}", number);
    render(template, &[("number", &number), ("user", user_name)]).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    async fn setup() -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_table(entity::prelude::TicketPanel)
            .with_table(entity::prelude::Ticket)
            .build()
            .await
            .unwrap()
    }

    #[test]
    fn renders_channel_name() {
        assert_eq!(ticket_channel_name("ticket-{number}", 7, "Bob"), "ticket-0007");
        assert_eq!(ticket_channel_name("{user}-{number}", 12, "Bob"), "bob-0012");
    }

    /// Tests the claim and close transitions.
    ///
    /// Expected: open → claimed → closed, repeated transitions rejected
    #[tokio::test]
    async fn claim_then_close() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let ticket = factory::create_ticket(db, "1", None, "5", 1).await?;

        let service = TicketService::new(db);
        let claimed = service.claim(1, ticket.id, "9").await?;
        assert_eq!(claimed.status, TicketStatus::Claimed);
        assert_eq!(claimed.claimed_by.as_deref(), Some("9"));

        assert!(matches!(
            service.claim(1, ticket.id, "9").await,
            Err(AppError::BadRequest(_))
        ));

        let closed = service.close(1, ticket.id, "9").await?;
        assert_eq!(closed.status, TicketStatus::Closed);
        assert!(closed.closed_at.is_some());

        assert!(matches!(
            service.close(1, ticket.id, "9").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.claim(1, 404, "9").await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Tests the status filter of the ticket listing.
    ///
    /// Expected: filtered list, Err(BadRequest) for an unknown status
    #[tokio::test]
    async fn filters_by_status() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let first = factory::create_ticket(db, "1", None, "5", 1).await?;
        factory::create_ticket(db, "1", None, "6", 2).await?;

        let service = TicketService::new(db);
        service.close(1, first.id, "9").await?;

        assert_eq!(service.tickets(1, Some("open")).await?.len(), 1);
        assert_eq!(service.tickets(1, Some("closed")).await?.len(), 1);
        assert_eq!(service.tickets(1, None).await?.len(), 2);
        assert!(matches!(
            service.tickets(1, Some("archived")).await,
            Err(AppError::BadRequest(_))
        ));

        Ok(())
    }

    /// Tests panel defaults and ticket number reservation.
    ///
    /// Expected: defaults applied, numbers increase per reservation
    #[tokio::test]
    async fn creates_panel_and_reserves_numbers() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = TicketService::new(db);
        let panel = service
            .create_panel(
                1,
                CreateTicketPanelDto {
                    channel_id: "10".to_string(),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(panel.title, "🎫 Support Tickets");
        assert_eq!(panel.ticket_name_template, "ticket-{number}");
        assert!(panel.claim_enabled);

        let (_, first, name) = service.reserve_ticket(1, panel.id, "Bob").await?;
        let (_, second, _) = service.reserve_ticket(1, panel.id, "Bob").await?;
        assert_eq!((first, second), (1, 2));
        assert_eq!(name, "ticket-0001");

        assert!(matches!(
            service
                .create_panel(1, CreateTicketPanelDto::default())
                .await,
            Err(AppError::BadRequest(_))
        ));

        Ok(())
    }
}
