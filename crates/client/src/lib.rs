//! Taskdesk client - authenticated access to the Taskdesk admin API.
//!
//! This crate is the reusable core of the admin console: a thin, auth-aware
//! HTTP client plus the session lifecycle around it. Front-ends (the
//! `taskdesk` CLI, or anything else) are pure consumers of this contract.
//!
//! # Architecture
//!
//! - [`AdminApi`] exposes one async method per API operation and attaches the
//!   current session token as a bearer credential on every outgoing request.
//! - [`Session`] / [`SessionStore`] hold the signed-in identity: an opaque
//!   token and a minimal profile, persisted in two named slots on disk.
//! - Every operation reports failure through [`ApiError`], which keeps the
//!   service's two failure channels distinct: a body-level rejection
//!   (`success: false` with a message) and a transport-level error.
//!
//! The client performs no retries, no caching, and no token refresh. An
//! expired token simply makes subsequent calls fail at the server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod session;
pub mod types;

pub use api::AdminApi;
pub use config::ClientConfig;
pub use dashboard::DashboardSummary;
pub use error::ApiError;
pub use session::{Profile, Session, SessionStore};
pub use types::{LoginData, NewAdmin, Record};
