//! Console command implementations.

pub mod admins;
pub mod auth;
pub mod dashboard;
pub mod todos;
pub mod users;

use serde::Serialize;
use taskdesk_client::{AdminApi, ClientConfig, SessionStore};

/// Build the API client with the persisted session loaded.
pub fn api() -> Result<AdminApi, Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let store = SessionStore::from_env()?;
    Ok(AdminApi::with_store(config, store)?)
}

/// Pretty-print a payload to stdout.
#[allow(clippy::print_stdout)]
pub fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
