//! Reqwest-based film API client

use crate::error::ApiError;
use filmlib_core::{Credentials, EditFilmBody, Film, NewFilmBody, RatingBody, WireFilm};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Film API client for a server exposing the film collection endpoints
///
/// The client is stateless apart from its cookie store: session identity is
/// carried by the server's cookie, attached by reqwest to every request
/// after log-in, and never mirrored in a field here.
///
/// # Example
///
/// ```ignore
/// use filmlib_http::FilmClient;
///
/// let client = FilmClient::new("http://localhost:3001/api");
///
/// let films = client.list_all().await?;
/// ```
pub struct FilmClient {
    client: Client,
    base_url: String,
}

impl FilmClient {
    /// Create a new film client with the given base URL
    ///
    /// The base URL may carry a trailing slash; it is trimmed. The client
    /// has no request timeout, so a hung transport hangs the awaiting task;
    /// see `with_timeout` to bound calls.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .cookie_store(true)
                .build()
                .unwrap(),
            base_url: trim_base(base_url),
        }
    }

    /// Create a film client whose calls fail after `timeout`
    ///
    /// An expired timeout surfaces as `ApiError::Unreachable`, the same as
    /// any other transport failure.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .cookie_store(true)
                .timeout(timeout)
                .build()
                .unwrap(),
            base_url: trim_base(base_url),
        }
    }

    /// Create a film client with custom settings
    ///
    /// The supplied client should have its cookie store enabled, otherwise
    /// the session endpoints cannot keep the caller logged in.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every film in the collection
    ///
    /// Calls `GET {base_url}/films` and decodes the body into domain
    /// records.
    pub async fn list_all(&self) -> Result<Vec<Film>, ApiError> {
        let url = format!("{}/films", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        let films: Vec<WireFilm> = read_json(response).await?;
        Ok(films.into_iter().map(Film::from).collect())
    }

    /// Fetch the films matching a named filter
    ///
    /// The filter name is lower-cased before being placed in the path, so
    /// `"Favorites"` and `"favorites"` target the identical endpoint.
    pub async fn list_filtered(&self, filter: &str) -> Result<Vec<Film>, ApiError> {
        let url = format!("{}/films/filter/{}", self.base_url, filter.to_lowercase());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        let films: Vec<WireFilm> = read_json(response).await?;
        Ok(films.into_iter().map(Film::from).collect())
    }

    /// Add a film to the collection
    ///
    /// Sends the whole record, owning user included, to `POST
    /// {base_url}/add`. Resolves to no value; the response body is never
    /// read on success.
    pub async fn add_film(&self, film: &Film) -> Result<(), ApiError> {
        let url = format!("{}/add", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&NewFilmBody::from(film))
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        expect_empty(response).await
    }

    /// Replace a film record
    ///
    /// Sends the record without its owning user (ownership is not
    /// client-editable) to `PUT {base_url}/films/{id}`.
    pub async fn update_film(&self, film: &Film) -> Result<(), ApiError> {
        let url = format!("{}/films/{}", self.base_url, film.id);

        let response = self
            .client
            .put(&url)
            .json(&EditFilmBody::from(film))
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        expect_empty(response).await
    }

    /// Toggle a film's favorite flag
    ///
    /// This is a toggle, not a set: `current_favorite` is the value the
    /// caller currently holds, and the path encodes its negation (`true`
    /// targets `/0`, `false` targets `/1`).
    pub async fn toggle_favorite(&self, id: i64, current_favorite: bool) -> Result<(), ApiError> {
        let target = if current_favorite { 0 } else { 1 };
        let url = format!("{}/films/{}/{}", self.base_url, id, target);

        let response = self
            .client
            .put(&url)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        expect_empty(response).await
    }

    /// Set a film's rating
    ///
    /// Calls `PUT {base_url}/films/{id}/rating/{rating}` with an `{id,
    /// rating}` body. The rating is opaque to this layer; the server owns
    /// the valid range.
    pub async fn update_rating(&self, id: i64, rating: i64) -> Result<(), ApiError> {
        let url = format!("{}/films/{}/rating/{}", self.base_url, id, rating);

        let response = self
            .client
            .put(&url)
            .json(&RatingBody { id, rating })
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        expect_empty(response).await
    }

    /// Delete a film from the collection
    pub async fn delete_film(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/films/{}", self.base_url, id);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        expect_empty(response).await
    }

    /// Open a session
    ///
    /// Posts the credentials to `POST {base_url}/sessions`. On success the
    /// server's identity JSON is returned as-is and its session cookie
    /// lands in the cookie store. On rejection only the `message` field of
    /// the error body is propagated.
    pub async fn log_in(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        let url = format!("{}/sessions", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|_| ApiError::UnparsableResponse)
        } else {
            match response.json::<Value>().await {
                Ok(body) => Err(ApiError::Rejected(rejection_message(&body))),
                Err(_) => Err(ApiError::UnparsableResponse),
            }
        }
    }

    /// Close the current session
    pub async fn log_out(&self) -> Result<(), ApiError> {
        let url = format!("{}/sessions/current", self.base_url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        expect_empty(response).await
    }

    /// Fetch the identity bound to the current session
    ///
    /// The identity JSON is returned as-is; its shape belongs to the
    /// server contract.
    pub async fn current_user(&self) -> Result<Value, ApiError> {
        let url = format!("{}/sessions/current", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        read_json(response).await
    }
}

fn trim_base(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

/// Classify a response on a read path and decode its payload
///
/// Success decodes the body as JSON; a failure status is handed to
/// `server_failure`. An undecodable body, on either path, is the decode
/// kind of failure.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        response
            .json()
            .await
            .map_err(|_| ApiError::UnparsableResponse)
    } else {
        Err(server_failure(response).await)
    }
}

/// Classify a response on a mutation path
///
/// Success resolves to no value without reading the body.
async fn expect_empty(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(server_failure(response).await)
    }
}

/// Turn a failure response into the uniform error
///
/// A JSON body is the server's own diagnostic, propagated verbatim;
/// anything else means the response could not be parsed.
async fn server_failure(response: Response) -> ApiError {
    match response.json::<Value>().await {
        Ok(body) => ApiError::Server(body),
        Err(_) => ApiError::UnparsableResponse,
    }
}

/// Narrow a log-in error body to its `message` field
///
/// The collaborating server promises a `message` on session failures; if
/// it is missing or not a string, the serialized body stands in so the
/// rejection stays a plain string either way.
fn rejection_message(body: &Value) -> String {
    match body.get("message").and_then(Value::as_str) {
        Some(message) => message.to_string(),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FilmClient::new("http://localhost:3001/api");
        assert_eq!(client.base_url(), "http://localhost:3001/api");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = FilmClient::new("http://localhost:3001/api/");
        assert_eq!(client.base_url(), "http://localhost:3001/api");
    }

    #[test]
    fn test_with_client_keeps_base_url() {
        let client = FilmClient::with_client(Client::new(), "https://films.example.com/api");
        assert_eq!(client.base_url(), "https://films.example.com/api");
    }

    #[test]
    fn test_rejection_message_prefers_message_field() {
        let body = serde_json::json!({"message": "bad credentials", "code": 401});
        assert_eq!(rejection_message(&body), "bad credentials");
    }

    #[test]
    fn test_rejection_message_falls_back_to_body() {
        let body = serde_json::json!({"code": 401});
        assert_eq!(rejection_message(&body), r#"{"code":401}"#);
    }
}
