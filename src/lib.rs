//! Multi-channel webhook forwarder: Alertmanager → ntfy.sh + Discord.
//!
//! Receives alert batches from Alertmanager's webhook receiver, renders each
//! alert into channel-specific messages, and performs best-effort delivery to
//! the configured push and chat channels.

pub mod config;
pub mod discord_client;
pub mod error;
pub mod formatter;
pub mod ntfy_client;
pub mod server;
pub mod types;

pub use config::ForwarderConfig;
pub use server::{forwarder_router, AppState};
