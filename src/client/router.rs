use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    Ai, Auth, Commands, Dashboard, Games, Leveling, Moderation, News, NotFound, Permissions,
    ReactionRoles, Settings, TempChannels, Tickets, Users, Welcome,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/auth")]
    Auth {},

    #[layout(RequiresLoggedIn)]
        #[layout(Layout)]
            #[route("/")]
            Dashboard {},
            #[route("/moderation")]
            Moderation {},
            #[route("/permissions")]
            Permissions {},
            #[route("/temp-channels")]
            TempChannels {},
            #[route("/reaction-roles")]
            ReactionRoles {},
            #[route("/games")]
            Games {},
            #[route("/tickets")]
            Tickets {},
            #[route("/leveling")]
            Leveling {},
            #[route("/welcome")]
            Welcome {},
            #[route("/commands")]
            Commands {},
            #[route("/ai")]
            Ai {},
            #[route("/news")]
            News {},
            #[route("/settings")]
            Settings {},
        #[end_layout]
    #[end_layout]

    #[layout(RequiresAdmin)]
        #[layout(Layout)]
            #[route("/users")]
            Users {},
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
