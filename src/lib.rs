pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod providers;
pub mod routing;
pub mod server;
