//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return, so conversion code can be tested without a
//! gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_role;
//!
//! let admin_role = create_test_role(111111111, "Admin", 0xFF0000, 10);
//! ```

pub mod role;

pub use role::create_test_role;
