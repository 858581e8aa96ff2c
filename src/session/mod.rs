//! Session management, authentication and service operations.

mod account;
mod auth;
mod config;
mod files;
mod session;

pub use account::{AppDescriptor, DevApp, DevDescriptor};
pub use config::{DEFAULT_BASE_URL, DEFAULT_NETWORK_ID, SessionConfig};
pub use session::Session;
