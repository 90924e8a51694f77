//! Command center backend.
//!
//! Compiled only with the `server` feature. It serves the dashboard API under `/api`,
//! stores everything in SQLite through SeaORM and runs the Discord bot in-process.
//!
//! # Layers
//!
//! - `controller/` - axum handlers: authenticate, convert DTOs, call a service
//! - `service/` - feature rules shared by handlers, bot and scheduler
//! - `data/` - SeaORM repositories returning domain models
//! - `model/` - domain models and service parameters
//! - `middleware/` - bearer token guard
//! - `error/` - `AppError` and its HTTP mapping
//!
//! # Runtime
//!
//! - `config` reads the environment, `startup` connects and migrates the database,
//!   seeds bot credentials and optionally starts the bot
//! - `state` is the axum state: database, HTTP client and bot supervisor
//! - `router` wires the routes and the OpenAPI document at `/api/docs`
//! - `bot/` holds the supervisor, event handlers, translations and log buffer
//! - `scheduler/` posts due news while the bot runs
//! - `util/` has the level curve, template and password helpers

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
