pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod query;

mod memory;
pub use memory::MemoryBackend;

pub use backend::{Backend, Subscription};
pub use config::BackendConfig;
pub use error::{BackendError, ConfigError};
pub use models::{CurrentUser, NewPost, Post, POSTS};
pub use query::{query, Direction, Query};
