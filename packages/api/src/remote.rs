//! # Remote backend — HTTP client for the managed service
//!
//! [`RemoteBackend`] is built from a [`BackendConfig`] that names a host.
//! Creation is a single `POST`; live subscriptions are emulated by
//! refreshing the query every [`BackendConfig::poll_interval`] and emitting a
//! snapshot whenever it changes (see [`crate::poll`]).
//!
//! Error mapping:
//!
//! | Situation | [`BackendError`] |
//! |-----------|------------------|
//! | request could not be sent | `Network` |
//! | non-2xx status | `Rejected { status, message }` (message taken from a JSON `message`/`error` field when present) |
//! | body does not decode | `Decode` |

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::{Backend, BackendConfig, BackendError, CurrentUser, NewPost, Post, Query, Subscription};

use crate::poll::poll_changes;

/// HTTP implementation of [`store::Backend`].
#[derive(Clone, Debug)]
pub struct RemoteBackend {
    client: Client,
    config: BackendConfig,
}

impl RemoteBackend {
    /// Create a client for the host in `config`.
    ///
    /// Fails with [`BackendError::NoHost`] when no host is configured.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        if config.host.is_none() {
            return Err(BackendError::NoHost);
        }
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> Result<String, BackendError> {
        self.config.endpoint(path).ok_or(BackendError::NoHost)
    }

    /// URL of the records endpoint of `collection`.
    pub fn records_url(&self, collection: &str) -> Result<String, BackendError> {
        self.url(&format!("/api/collections/{collection}/records"))
    }

    /// URL of the session endpoint.
    pub fn session_url(&self) -> Result<String, BackendError> {
        self.url("/api/session/user")
    }

    /// Run `query` once.
    pub async fn fetch_records(&self, query: &Query) -> Result<Vec<Post>, BackendError> {
        let response = self
            .client
            .get(self.records_url(query.collection())?)
            .query(&query.to_params())
            .send()
            .await
            .map_err(network_error)?;
        decode(response).await
    }

    /// Look up the signed-in user once.
    pub async fn fetch_current_user(&self) -> Result<Option<CurrentUser>, BackendError> {
        let response = self
            .client
            .get(self.session_url()?)
            .send()
            .await
            .map_err(network_error)?;
        decode(response).await
    }
}

impl Backend for RemoteBackend {
    async fn create_record(&self, collection: &str, post: NewPost) -> Result<Post, BackendError> {
        let response = self
            .client
            .post(self.records_url(collection)?)
            .json(&post)
            .send()
            .await
            .map_err(network_error)?;
        let record: Post = decode(response).await?;
        tracing::info!(collection, id = %record.id, "record created");
        Ok(record)
    }

    fn watch_query(&self, query: Query) -> Subscription<Vec<Post>> {
        let label = format!("query:{}", query.collection());
        let this = self.clone();
        let stream = poll_changes(label.clone(), self.config.poll_interval(), move || {
            let this = this.clone();
            let query = query.clone();
            async move { this.fetch_records(&query).await }
        });
        Subscription::new(label, stream)
    }

    fn watch_current_user(&self) -> Subscription<Option<CurrentUser>> {
        let this = self.clone();
        let stream = poll_changes(
            "current-user".to_string(),
            self.config.poll_interval(),
            move || {
                let this = this.clone();
                async move { this.fetch_current_user().await }
            },
        );
        Subscription::new("current-user", stream)
    }
}

fn network_error(error: reqwest::Error) -> BackendError {
    BackendError::Network(error.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::Rejected {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    let body = response.text().await.map_err(network_error)?;
    serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pull a human-readable message out of an error response body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
            ..
        })
        | Ok(ErrorBody {
            error: Some(message),
            ..
        }) => message,
        _ => body.trim().to_string(),
    }
}
