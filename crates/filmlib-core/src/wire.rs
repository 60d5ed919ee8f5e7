//! filmlib Wire Mapping
//!
//! This module defines the JSON shapes exchanged with the film server and
//! the conversions to and from the domain record.
//!
//! The server spells the date field two ways: the creation endpoint expects
//! `watchdate`, the whole-record update endpoint expects `date`. Both
//! spellings are part of the server contract and are kept distinct here,
//! routed by operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Film;

/// A film record as returned by the read endpoints
///
/// `watchdate` carries a `YYYY-MM-DD` string when present; an absent or
/// null field decodes to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireFilm {
    pub id: i64,
    pub title: String,
    pub favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchdate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    pub user: i64,
}

/// Body for the creation endpoint (`POST /add`)
///
/// Includes the owning user and spells the date `watchdate`. Absent
/// optionals are omitted from the JSON entirely, matching a record whose
/// fields were never set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFilmBody {
    pub id: i64,
    pub title: String,
    pub favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchdate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    pub user: i64,
}

/// Body for the whole-record update endpoint (`PUT /films/{id}`)
///
/// Ownership is not client-editable, so `user` is omitted. The date field
/// is spelled `date` on this path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditFilmBody {
    pub id: i64,
    pub title: String,
    pub favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}

/// Body for the rating update endpoint (`PUT /films/{id}/rating/{rating}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingBody {
    pub id: i64,
    pub rating: i64,
}

impl From<WireFilm> for Film {
    fn from(wire: WireFilm) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            favorite: wire.favorite,
            date: wire.watchdate,
            rating: wire.rating,
            user: wire.user,
        }
    }
}

impl From<&Film> for WireFilm {
    fn from(film: &Film) -> Self {
        Self {
            id: film.id,
            title: film.title.clone(),
            favorite: film.favorite,
            watchdate: film.date,
            rating: film.rating,
            user: film.user,
        }
    }
}

impl From<&Film> for NewFilmBody {
    fn from(film: &Film) -> Self {
        Self {
            id: film.id,
            title: film.title.clone(),
            favorite: film.favorite,
            watchdate: film.date,
            rating: film.rating,
            user: film.user,
        }
    }
}

impl From<&Film> for EditFilmBody {
    fn from(film: &Film) -> Self {
        Self {
            id: film.id,
            title: film.title.clone(),
            favorite: film.favorite,
            date: film.date,
            rating: film.rating,
        }
    }
}
