//! Client-side state shared through the Dioxus context.
//!
//! Values that must survive a reload (token, user & selected guild) are mirrored
//! into browser localStorage by `storage`.

pub mod guild;
pub mod storage;
pub mod toast;
pub mod user;
