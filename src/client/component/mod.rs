pub mod layout;
pub mod modal;
pub mod page;
pub mod protected_layout;
pub mod server_data_selector;
pub mod toast;
pub mod utc_datetime_input;

pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{use_guild_id, ErrorPage, GuildRequired, LoadingPage, Page};
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn};
pub use server_data_selector::ServerDataSelector;
pub use toast::ToastRegion;
pub use utc_datetime_input::{parse_schedule, UtcDateTimeInput};
