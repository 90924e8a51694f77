use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth, bot, custom_command, game, guild, leveling, moderation, news, reaction_role,
        server_data, temp_channel, ticket,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::me,
        auth::logout,
        auth::list_users,
        auth::set_admin,
        auth::delete_user,
        guild::get_guilds,
        guild::get_guild,
        guild::update_guild,
        guild::get_guild_stats,
        guild::get_permissions,
        guild::update_permission,
        moderation::get_warnings,
        moderation::clear_warnings,
        moderation::get_mod_logs,
        leveling::get_leaderboard,
        leveling::get_member,
        leveling::update_member,
        leveling::get_rewards,
        leveling::create_reward,
        leveling::delete_reward,
        leveling::toggle_reward,
        leveling::get_voice_sessions,
        leveling::get_voice_stats,
        custom_command::get_commands,
        custom_command::create_command,
        custom_command::delete_command,
        news::get_news,
        news::create_news,
        news::delete_news,
        temp_channel::get_temp_channels,
        temp_channel::delete_temp_channel,
        temp_channel::get_temp_creators,
        temp_channel::get_temp_creator,
        temp_channel::create_temp_creator,
        temp_channel::update_temp_creator,
        temp_channel::delete_temp_creator,
        reaction_role::get_reaction_roles,
        reaction_role::create_reaction_roles,
        reaction_role::update_reaction_role,
        reaction_role::delete_reaction_role,
        reaction_role::send_reaction_role_panel,
        game::get_active_games,
        game::get_game_stats,
        ticket::get_panels,
        ticket::get_panel,
        ticket::create_panel,
        ticket::update_panel,
        ticket::delete_panel,
        ticket::send_panel,
        ticket::get_tickets,
        ticket::get_ticket_stats,
        ticket::claim_ticket,
        ticket::close_ticket,
        server_data::get_server_data,
        server_data::sync_server_data,
        bot::get_status,
        bot::configure,
        bot::start,
        bot::stop,
        bot::get_logs,
        bot::test,
    ),
    tags(
        (name = auth::AUTH_TAG, description = "Dashboard accounts & bearer tokens"),
        (name = guild::GUILD_TAG, description = "Per-guild configuration"),
        (name = moderation::MODERATION_TAG, description = "Warnings & moderation log"),
        (name = leveling::LEVELING_TAG, description = "XP, rewards & voice sessions"),
        (name = custom_command::COMMAND_TAG, description = "Custom chat commands"),
        (name = news::NEWS_TAG, description = "Scheduled news posts"),
        (name = temp_channel::TEMP_CHANNEL_TAG, description = "Temporary voice channels"),
        (name = reaction_role::REACTION_ROLE_TAG, description = "Reaction role panels"),
        (name = game::GAME_TAG, description = "Game records"),
        (name = ticket::TICKET_TAG, description = "Ticket panels & tickets"),
        (name = server_data::SERVER_DATA_TAG, description = "Cached Discord server data"),
        (name = bot::BOT_TAG, description = "Bot lifecycle & logs"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let guild_routes = Router::new()
        .route("/", get(guild::get_guild).put(guild::update_guild))
        .route("/stats", get(guild::get_guild_stats))
        .route(
            "/permissions",
            get(guild::get_permissions).put(guild::update_permission),
        )
        .route("/warnings", get(moderation::get_warnings))
        .route("/warnings/{user_id}", delete(moderation::clear_warnings))
        .route("/modlogs", get(moderation::get_mod_logs))
        .route("/leaderboard", get(leveling::get_leaderboard))
        .route(
            "/users/{user_id}",
            get(leveling::get_member).put(leveling::update_member),
        )
        .route(
            "/level-rewards",
            get(leveling::get_rewards).post(leveling::create_reward),
        )
        .route("/level-rewards/{reward_id}", delete(leveling::delete_reward))
        .route(
            "/level-rewards/{reward_id}/toggle",
            put(leveling::toggle_reward),
        )
        .route("/voice-sessions", get(leveling::get_voice_sessions))
        .route("/voice-stats", get(leveling::get_voice_stats))
        .route(
            "/commands",
            get(custom_command::get_commands).post(custom_command::create_command),
        )
        .route("/commands/{name}", delete(custom_command::delete_command))
        .route("/news", get(news::get_news).post(news::create_news))
        .route("/news/{news_id}", delete(news::delete_news))
        .route("/temp-channels", get(temp_channel::get_temp_channels))
        .route(
            "/temp-channels/{channel_id}",
            delete(temp_channel::delete_temp_channel),
        )
        .route(
            "/temp-creators",
            get(temp_channel::get_temp_creators).post(temp_channel::create_temp_creator),
        )
        .route(
            "/temp-creators/{creator_id}",
            get(temp_channel::get_temp_creator)
                .put(temp_channel::update_temp_creator)
                .delete(temp_channel::delete_temp_creator),
        )
        .route(
            "/reaction-roles",
            get(reaction_role::get_reaction_roles).post(reaction_role::create_reaction_roles),
        )
        .route(
            "/reaction-roles/{reaction_role_id}",
            put(reaction_role::update_reaction_role).delete(reaction_role::delete_reaction_role),
        )
        .route(
            "/reaction-roles/{reaction_role_id}/send",
            post(reaction_role::send_reaction_role_panel),
        )
        .route("/games", get(game::get_active_games))
        .route("/games/stats", get(game::get_game_stats))
        .route(
            "/ticket-panels",
            get(ticket::get_panels).post(ticket::create_panel),
        )
        .route(
            "/ticket-panels/{panel_id}",
            get(ticket::get_panel)
                .put(ticket::update_panel)
                .delete(ticket::delete_panel),
        )
        .route("/ticket-panels/{panel_id}/send", post(ticket::send_panel))
        .route("/tickets", get(ticket::get_tickets))
        .route("/tickets/stats", get(ticket::get_ticket_stats))
        .route("/tickets/{ticket_id}/claim", post(ticket::claim_ticket))
        .route("/tickets/{ticket_id}/close", post(ticket::close_ticket))
        .route("/server-data", get(server_data::get_server_data))
        .route("/server-data/sync", post(server_data::sync_server_data));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/users", get(auth::list_users))
        .route("/api/auth/users/{user_id}", delete(auth::delete_user))
        .route("/api/auth/users/{user_id}/admin", put(auth::set_admin))
        .route("/api/guilds", get(guild::get_guilds))
        .nest("/api/guilds/{guild_id}", guild_routes)
        .route("/api/bot/status", get(bot::get_status))
        .route("/api/bot/configure", post(bot::configure))
        .route("/api/bot/start", post(bot::start))
        .route("/api/bot/stop", post(bot::stop))
        .route("/api/bot/logs", get(bot::get_logs))
        .route("/api/bot/test", post(bot::test))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
