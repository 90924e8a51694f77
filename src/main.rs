mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{bot::supervisor::BotSupervisor, config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        startup::seed_bot_settings(&db, &config).await?;
        let http_client = startup::setup_reqwest_client()?;

        tracing::info!("Starting server");

        // The bot runs under a supervisor so the dashboard can start & stop it
        let bot = BotSupervisor::new(db.clone(), http_client.clone());
        startup::autostart_bot(&config, &db, &bot).await?;

        let mut router = dioxus::server::router(App);
        let server_routes =
            server::router::router().with_state(AppState::new(db, http_client, bot));
        router = router.merge(server_routes);

        Ok(router)
    })
}
