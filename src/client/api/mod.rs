#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;
#[cfg(feature = "web")]
pub mod bot;
#[cfg(feature = "web")]
pub mod command;
#[cfg(feature = "web")]
pub mod game;
#[cfg(feature = "web")]
pub mod guild;
#[cfg(feature = "web")]
pub mod leveling;
#[cfg(feature = "web")]
pub mod moderation;
#[cfg(feature = "web")]
pub mod news;
#[cfg(feature = "web")]
pub mod reaction_role;
#[cfg(feature = "web")]
pub mod server_data;
#[cfg(feature = "web")]
pub mod temp_channel;
#[cfg(feature = "web")]
pub mod ticket;
