//! # API crate — client for the managed posts backend
//!
//! The posts page never talks to a database. Records, sessions and live
//! queries belong to an external backend service, and this crate is the
//! HTTP client for it. [`RemoteBackend`] implements [`store::Backend`], so
//! the UI can use it interchangeably with [`store::MemoryBackend`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`remote`] | [`RemoteBackend`]: record creation, collection queries, session lookup over HTTP |
//! | [`poll`] | Turns a fetch function into a live stream by refreshing on an interval |
//!
//! ## Endpoints
//!
//! Paths are relative to [`store::BackendConfig::host`]:
//!
//! - `POST /api/collections/{collection}/records`: create a record
//! - `GET /api/collections/{collection}/records`: list records (`orderBy`, `direction`, `limit`)
//! - `GET /api/session/user`: the signed-in user, or `null`

pub mod poll;
pub mod remote;

pub use remote::RemoteBackend;
