//! Request handlers for the demo film server
//!
//! Every collection handler is gated on the session cookie; the film it
//! touches must belong to the logged-in user. Failure bodies are JSON so
//! the client can propagate them verbatim.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{Days, Local};
use filmlib_core::{Credentials, EditFilmBody, NewFilmBody, WireFilm};
use serde_json::{json, Value};

use crate::store::{user_by_id, Store, SESSION_COOKIE};

fn identity(user_id: i64) -> Value {
    match user_by_id(user_id) {
        Some(user) => json!({"id": user.id, "username": user.username, "name": user.name}),
        None => json!({"id": user_id}),
    }
}

fn not_authenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "not authenticated"})),
    )
        .into_response()
}

fn film_not_found(id: i64) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": format!("no film with id {id}")})),
    )
        .into_response()
}

/// Pull a live session's user out of the request's cookie header
fn session_user(store: &Store, headers: &HeaderMap) -> Option<i64> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    let sid = cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })?;
    store.session_user(sid)
}

pub async fn log_in(State(store): State<Store>, Json(credentials): Json<Credentials>) -> Response {
    match store.authenticate(&credentials.username, &credentials.password) {
        Some(user) => {
            let sid = store.open_session(user.id);
            tracing::info!("user {} logged in", user.username);

            let cookie = format!("{SESSION_COOKIE}={sid}; Path=/; HttpOnly");
            ([(header::SET_COOKIE, cookie)], Json(identity(user.id))).into_response()
        }
        None => {
            tracing::debug!("rejected log-in for {}", credentials.username);
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "incorrect username or password"})),
            )
                .into_response()
        }
    }
}

pub async fn log_out(State(store): State<Store>, headers: HeaderMap) -> StatusCode {
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        if let Some(sid) = cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then_some(value)
        }) {
            store.close_session(sid);
        }
    }
    StatusCode::NO_CONTENT
}

pub async fn current_user(State(store): State<Store>, headers: HeaderMap) -> Response {
    match session_user(&store, &headers) {
        Some(user) => Json(identity(user)).into_response(),
        None => not_authenticated(),
    }
}

pub async fn list_films(State(store): State<Store>, headers: HeaderMap) -> Response {
    let Some(user) = session_user(&store, &headers) else {
        return not_authenticated();
    };
    Json(store.films_of(user)).into_response()
}

pub async fn filter_films(
    State(store): State<Store>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    let Some(user) = session_user(&store, &headers) else {
        return not_authenticated();
    };

    let films = store.films_of(user);
    let films: Vec<WireFilm> = match name.as_str() {
        "all" => films,
        "favorites" => films.into_iter().filter(|film| film.favorite).collect(),
        "best-rated" => films
            .into_iter()
            .filter(|film| film.rating == Some(5))
            .collect(),
        "unseen" => films
            .into_iter()
            .filter(|film| film.watchdate.is_none())
            .collect(),
        "seen-last-month" => {
            let cutoff = Local::now().date_naive() - Days::new(30);
            films
                .into_iter()
                .filter(|film| film.watchdate.is_some_and(|date| date >= cutoff))
                .collect()
        }
        _ => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": format!("unknown filter {name}")})),
            )
                .into_response()
        }
    };

    Json(films).into_response()
}

pub async fn add_film(
    State(store): State<Store>,
    headers: HeaderMap,
    Json(body): Json<NewFilmBody>,
) -> Response {
    let Some(user) = session_user(&store, &headers) else {
        return not_authenticated();
    };

    let id = store.add(user, body);
    tracing::debug!("user {} added film {}", user, id);
    StatusCode::CREATED.into_response()
}

pub async fn edit_film(
    State(store): State<Store>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<EditFilmBody>,
) -> Response {
    let Some(user) = session_user(&store, &headers) else {
        return not_authenticated();
    };

    if store.edit(user, id, body) {
        StatusCode::OK.into_response()
    } else {
        film_not_found(id)
    }
}

pub async fn set_favorite(
    State(store): State<Store>,
    headers: HeaderMap,
    Path((id, value)): Path<(i64, u8)>,
) -> Response {
    let Some(user) = session_user(&store, &headers) else {
        return not_authenticated();
    };

    if value > 1 {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "favorite must be 0 or 1"})),
        )
            .into_response();
    }

    if store.set_favorite(user, id, value == 1) {
        StatusCode::OK.into_response()
    } else {
        film_not_found(id)
    }
}

pub async fn set_rating(
    State(store): State<Store>,
    headers: HeaderMap,
    Path((id, rating)): Path<(i64, i64)>,
) -> Response {
    let Some(user) = session_user(&store, &headers) else {
        return not_authenticated();
    };

    // The client treats ratings as opaque; the bounds live here.
    if !(0..=5).contains(&rating) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "rating must be between 0 and 5"})),
        )
            .into_response();
    }

    if store.set_rating(user, id, rating) {
        StatusCode::OK.into_response()
    } else {
        film_not_found(id)
    }
}

pub async fn delete_film(
    State(store): State<Store>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let Some(user) = session_user(&store, &headers) else {
        return not_authenticated();
    };

    if store.remove(user, id) {
        StatusCode::OK.into_response()
    } else {
        film_not_found(id)
    }
}
