pub mod ai;
pub mod auth;
pub mod commands;
pub mod dashboard;
pub mod games;
pub mod leveling;
pub mod moderation;
pub mod news;
pub mod not_found;
pub mod permissions;
pub mod reaction_roles;
pub mod settings;
pub mod temp_channels;
pub mod tickets;
pub mod users;
pub mod welcome;

pub use ai::Ai;
pub use auth::Auth;
pub use commands::Commands;
pub use dashboard::Dashboard;
pub use games::Games;
pub use leveling::Leveling;
pub use moderation::Moderation;
pub use news::News;
pub use not_found::NotFound;
pub use permissions::Permissions;
pub use reaction_roles::ReactionRoles;
pub use settings::Settings;
pub use temp_channels::TempChannels;
pub use tickets::Tickets;
pub use users::Users;
pub use welcome::Welcome;

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::*;
    use crate::client::store::{guild::GuildState, toast::Toaster};

    const GUILD_PAGES: usize = 11;

    #[derive(Debug, Clone, Routable, PartialEq)]
    enum PageHost {
        #[route("/")]
        AllFeaturePages {},
    }

    #[component]
    fn AllFeaturePages() -> Element {
        rsx! {
            Moderation {}
            Permissions {}
            TempChannels {}
            ReactionRoles {}
            Games {}
            Tickets {}
            Leveling {}
            Welcome {}
            Commands {}
            Ai {}
            News {}
        }
    }

    #[component]
    fn NoGuildSelected() -> Element {
        use_context_provider(|| Signal::new(GuildState::default()));
        use_context_provider(Toaster::new);

        rsx! { Router::<PageHost> {} }
    }

    /// Tests that every guild scoped page asks for a server while none is selected.
    #[test]
    fn feature_pages_wait_for_a_guild() {
        let mut dom = VirtualDom::new(NoGuildSelected);
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches("Select a server first").count(), GUILD_PAGES);
        assert!(!html.contains("loading-spinner"));
    }
}
