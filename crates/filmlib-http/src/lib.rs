//! # filmlib HTTP Client
//!
//! HTTP access layer for the film library service.
//!
//! This crate provides:
//! - A reqwest-based client exposing the film collection through named
//!   operations (list, filter, create, update, delete, session lifecycle)
//! - A uniform error shape covering transport, decode, and server-reported
//!   failures
//!
//! Session state lives entirely in the client's cookie store: logging in
//! makes the server's session cookie ride on every later request, and no
//! identity is held anywhere else in this layer.
//!
//! ## Example
//!
//! ```ignore
//! use filmlib_http::FilmClient;
//! use filmlib_core::Credentials;
//!
//! let client = FilmClient::new("http://localhost:3001/api");
//!
//! client.log_in(&Credentials::new("harry", "pony")).await?;
//! let films = client.list_all().await?;
//! ```

mod client;
mod error;

pub use client::FilmClient;
pub use error::ApiError;
