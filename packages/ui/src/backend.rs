//! Backend selection and context for the component tree.
//!
//! The binary reads a [`BackendConfig`] once and passes it into the tree as
//! context. [`BackendProvider`] turns it into an [`AppBackend`]:
//! - **host configured**: [`api::RemoteBackend`]
//! - **no host**: [`store::MemoryBackend`], for local development

use api::RemoteBackend;
use dioxus::prelude::*;
use store::{
    Backend, BackendConfig, BackendError, CurrentUser, MemoryBackend, NewPost, Post, Query,
    Subscription,
};

/// The backend the app talks to.
#[derive(Clone, Debug)]
pub enum AppBackend {
    Remote(RemoteBackend),
    Memory(MemoryBackend),
}

impl Backend for AppBackend {
    async fn create_record(&self, collection: &str, post: NewPost) -> Result<Post, BackendError> {
        match self {
            AppBackend::Remote(backend) => backend.create_record(collection, post).await,
            AppBackend::Memory(backend) => backend.create_record(collection, post).await,
        }
    }

    fn watch_query(&self, query: Query) -> Subscription<Vec<Post>> {
        match self {
            AppBackend::Remote(backend) => backend.watch_query(query),
            AppBackend::Memory(backend) => backend.watch_query(query),
        }
    }

    fn watch_current_user(&self) -> Subscription<Option<CurrentUser>> {
        match self {
            AppBackend::Remote(backend) => backend.watch_current_user(),
            AppBackend::Memory(backend) => backend.watch_current_user(),
        }
    }
}

/// Pick the backend described by `config`.
pub fn make_backend(config: &BackendConfig) -> AppBackend {
    match RemoteBackend::new(config.clone()) {
        Ok(remote) => {
            tracing::info!(host = ?config.host, "using remote backend");
            AppBackend::Remote(remote)
        }
        Err(BackendError::NoHost) => {
            tracing::warn!("no backend host configured, using in-memory backend");
            AppBackend::Memory(MemoryBackend::new())
        }
        Err(error) => {
            tracing::error!(%error, "remote backend unavailable, using in-memory backend");
            AppBackend::Memory(MemoryBackend::new())
        }
    }
}

/// Get the backend provided by [`BackendProvider`].
pub fn use_backend() -> AppBackend {
    use_context::<AppBackend>()
}

/// Provides an [`AppBackend`] built from the [`BackendConfig`] in context.
/// Wrap your app with this component.
#[component]
pub fn BackendProvider(children: Element) -> Element {
    let config = use_context::<BackendConfig>();
    use_context_provider(|| make_backend(&config));

    rsx! {
        {children}
    }
}
