//! filmlib Domain Types
//!
//! This module contains the in-memory record shapes handed to consuming
//! front ends. Dates are parsed calendar dates, never strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A film record as seen by the consuming UI
///
/// The identifier is assigned by the server and immutable afterwards; it is
/// the key for every targeted operation (update, delete, partial update).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Film {
    pub id: i64,

    pub title: String,

    /// Always present; toggled through its own endpoint.
    pub favorite: bool,

    /// Watch date. `None` means "not yet watched" — absence is a state of
    /// its own and must survive a round trip, never a sentinel date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Opaque integer score; the server owns the valid range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,

    /// Owning user, assigned by the server. Not client-editable on update.
    pub user: i64,
}

/// Credentials posted to the session endpoint on log-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
