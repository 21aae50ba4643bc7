//! # Spotify Integration Module
//!
//! This module provides the integration layer between the dashboard server and the
//! Spotify Web API. It implements the confidential-client OAuth 2.0 authorization-code
//! flow and the authenticated data retrieval the proxy endpoints are built on,
//! handling all HTTP communication, error mapping, and batch chunking.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code flow:
//! - **Authorization URL**: Builds the provider authorization URL with the fixed
//!   scope set, the CSRF state, and a forced consent dialog
//! - **Token Exchange**: Exchanges the callback's authorization code for tokens via
//!   a server-to-server POST authenticated with HTTP Basic client credentials
//!
//! ### Client Module
//!
//! [`client`] - Authenticated fetch helper and thin endpoint wrappers:
//! - **Bearer Requests**: Every call carries the session's access token
//! - **Error Mapping**: Non-success upstream statuses become [`crate::error::ApiError`]
//!   values carrying the upstream status; bodies are logged server-side only
//! - **No Retries**: An expired access token surfaces as a caller-visible failure,
//!   never a silent refresh
//!
//! ### Features Module
//!
//! [`features`] - Audio-feature retrieval for track batches:
//! - **Chunked Fetch**: The upstream endpoint accepts at most 100 track ids per
//!   call, so larger batches are split and recombined in order
//! - **Null Preservation**: Unknown tracks come back as `null` feature objects and
//!   are kept as such for the aggregation's divisor semantics
//!
//! ## Authentication Strategy
//!
//! The server is a confidential client: the client secret stays on the server and
//! the token exchange authenticates with `Basic base64(client_id:client_secret)`.
//! The CSRF state parameter is generated at login initiation, round-tripped through
//! the provider, and must match byte-for-byte before any exchange request is made.
//!
//! ## Error Types
//!
//! - [`auth::ExchangeError`] - token-exchange failures (transport or upstream status)
//! - [`crate::error::ApiError`] - authenticated fetch failures
//!
//! ## API Coverage
//!
//! - `GET /me` - profile of the authenticated user
//! - `GET /me/top/tracks` / `GET /me/top/artists` - top items with `limit` and
//!   `time_range`
//! - `GET /me/player/recently-played` - listening history
//! - `GET /audio-features` - batch audio-feature vectors
//! - `POST {token endpoint}` - authorization-code exchange

pub mod auth;
pub mod client;
pub mod features;
