pub const SITE_NAME: &str = "Command Center";

/// Interval between two bot status polls of the layout shell
pub const STATUS_POLL_MS: u32 = 10_000;

/// How long a toast stays visible
pub const TOAST_TIMEOUT_MS: u32 = 4_000;
