//! # filmlib Core
//!
//! Record types and wire mapping for the film library client.
//!
//! This crate provides:
//! - The domain record (`Film`) used by consuming front ends
//! - The wire shapes exchanged with the film server
//! - Conversions between the two, in both directions
//!
//! ## Example
//!
//! ```rust,ignore
//! use filmlib_core::{Film, WireFilm};
//!
//! // Decode a record from the server
//! let wire: WireFilm = serde_json::from_str(json)?;
//! let film = Film::from(wire);
//!
//! // Encode it for the creation endpoint
//! let body = serde_json::to_string(&NewFilmBody::from(&film))?;
//! ```

pub mod types;
pub mod wire;

// Re-exports for convenience
pub use types::{Credentials, Film};
pub use wire::{EditFilmBody, NewFilmBody, RatingBody, WireFilm};
