//! Wire types for the admin API.
//!
//! Resource records (users, admins, todos) are server-owned and treated as
//! opaque payloads - the client passes them through without validating or
//! reshaping them. Only the handful of shapes the client itself needs are
//! typed: the login payload, counts, and the signup request.

use secrecy::SecretString;
use serde::Deserialize;

use crate::session::Profile;

/// An opaque server-owned record, passed through unchanged.
pub type Record = serde_json::Value;

/// Payload of a successful login or signup: the bearer token plus whatever
/// profile fields the server includes alongside it.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone, Deserialize)]
pub struct LoginData {
    /// Opaque bearer token.
    pub token: String,
    /// Profile fields flattened next to the token.
    #[serde(flatten)]
    pub profile: Profile,
}

impl std::fmt::Debug for LoginData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginData")
            .field("token", &"[REDACTED]")
            .field("profile", &self.profile)
            .finish()
    }
}

/// Fields for registering a new admin account.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct NewAdmin {
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Email address, also the login identifier.
    pub email: String,
    /// Display username.
    pub username: String,
    /// Initial password.
    pub password: SecretString,
    /// Role, e.g. `ADMIN` or `SUPER_ADMIN` (the service's `adminType`).
    pub role: String,
}

impl std::fmt::Debug for NewAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAdmin")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// `{ "count": n }` payload of the count endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CountData {
    /// Number of records.
    pub count: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_data_flattens_profile() {
        let data: LoginData = serde_json::from_str(
            r#"{"token":"tok-1","firstname":"Ada","lastname":"Lovelace","role":"ADMIN"}"#,
        )
        .unwrap();
        assert_eq!(data.token, "tok-1");
        assert_eq!(data.profile.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_login_data_tolerates_missing_profile_fields() {
        let data: LoginData = serde_json::from_str(r#"{"token":"tok-1"}"#).unwrap();
        assert_eq!(data.profile, Profile::default());
    }

    #[test]
    fn test_login_data_debug_redacts_token() {
        let data: LoginData =
            serde_json::from_str(r#"{"token":"tok-secret","firstname":"Ada"}"#).unwrap();
        let debug_output = format!("{data:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("tok-secret"));
        assert!(debug_output.contains("Ada"));
    }

    #[test]
    fn test_new_admin_debug_redacts_password() {
        let admin = NewAdmin {
            firstname: "Ada".to_owned(),
            lastname: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            username: "ada".to_owned(),
            password: SecretString::from("hunter2"),
            role: "ADMIN".to_owned(),
        };
        let debug_output = format!("{admin:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_count_data_decodes() {
        let data: CountData = serde_json::from_str(r#"{"count":42}"#).unwrap();
        assert_eq!(data.count, 42);
    }
}
