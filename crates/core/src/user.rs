//! User entity and API payload types.
//!
//! These types are pure data with no I/O. Request payloads carry their own
//! completeness checks so handlers can reject bad bodies before touching
//! storage.

use serde::{Deserialize, Serialize};

/// A user as exposed by the read endpoints.
///
/// The stored password is deliberately not part of this type, so ordinary
/// read paths cannot leak it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A full stored row, password included.
///
/// Only the development inspection listing uses this type. Never serialize
/// it on a production-facing route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request payload for creating a new user.
///
/// Earlier revisions of the HTTP API used Spanish field names; the serde
/// aliases keep those request bodies parseable.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "correo")]
    pub email: String,
    #[serde(alias = "contraseña")]
    pub password: String,
}

impl NewUser {
    /// All three fields are required and must be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Request payload for updating an existing user.
///
/// `password` is optional; when omitted the stored password is kept as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct UserUpdate {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "correo")]
    pub email: String,
    #[serde(default, alias = "contraseña")]
    pub password: Option<String>,
}

impl UserUpdate {
    /// `name` and `email` must be non-empty; `password`, when present,
    /// must be non-empty too.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && self.password.as_deref().is_none_or(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_parses_english_keys() {
        let payload: NewUser =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@x.com","password":"p1"}"#).unwrap();

        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.email, "ana@x.com");
        assert_eq!(payload.password, "p1");
        assert!(payload.is_complete());
    }

    #[test]
    fn test_new_user_parses_spanish_keys() {
        let payload: NewUser =
            serde_json::from_str(r#"{"nombre":"Ana","correo":"ana@x.com","contraseña":"p1"}"#)
                .unwrap();

        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.email, "ana@x.com");
        assert_eq!(payload.password, "p1");
    }

    #[test]
    fn test_new_user_missing_field_fails_to_parse() {
        let result: Result<NewUser, _> =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@x.com"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_new_user_empty_field_is_incomplete() {
        let payload: NewUser =
            serde_json::from_str(r#"{"name":"","email":"ana@x.com","password":"p1"}"#).unwrap();

        assert!(!payload.is_complete());
    }

    #[test]
    fn test_user_update_password_defaults_to_none() {
        let payload: UserUpdate =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@x.com"}"#).unwrap();

        assert_eq!(payload.password, None);
        assert!(payload.is_complete());
    }

    #[test]
    fn test_user_update_empty_password_is_incomplete() {
        let payload: UserUpdate =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@x.com","password":""}"#).unwrap();

        assert!(!payload.is_complete());
    }

    #[test]
    fn test_user_serializes_without_password_field() {
        let user = User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Ana", "email": "ana@x.com"})
        );
    }
}
