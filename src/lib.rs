//! Candy store: in-memory candy CRUD service over HTTP.

pub mod candy;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use candy::Candy;
pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use routes::{app, candy_routes, common_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::{CandyStore, Replaced};
