//! # Backend — the managed service behind the posts page
//!
//! Storage, authentication and live queries are owned by an external
//! backend service. [`Backend`] is the seam the UI talks to; implementations
//! are [`crate::MemoryBackend`] (tests and local development) and the HTTP
//! client in the `api` crate.
//!
//! Live data is delivered through a [`Subscription`]: a stream of snapshots
//! that stays subscribed for as long as the handle is alive. Dropping the
//! handle, or calling [`Subscription::unsubscribe`], ends delivery.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{LocalBoxStream, Stream, StreamExt};

use crate::error::BackendError;
use crate::models::{CurrentUser, NewPost, Post};
use crate::query::Query;

/// Async interface to the backend service.
pub trait Backend {
    /// Create a record in `collection` and return it with its assigned id.
    fn create_record(
        &self,
        collection: &str,
        post: NewPost,
    ) -> impl std::future::Future<Output = Result<Post, BackendError>>;

    /// Subscribe to the result of `query`. The first item is the current
    /// snapshot; later items follow every change.
    fn watch_query(&self, query: Query) -> Subscription<Vec<Post>>;

    /// Subscribe to the signed-in user. The first item is the current value.
    fn watch_current_user(&self) -> Subscription<Option<CurrentUser>>;
}

/// Cancellation handle for a live subscription.
///
/// Yields snapshots as a [`Stream`]. Delivery stops when the handle is
/// dropped.
pub struct Subscription<T> {
    label: String,
    stream: LocalBoxStream<'static, T>,
}

impl<T> Subscription<T> {
    pub fn new(label: impl Into<String>, stream: impl Stream<Item = T> + 'static) -> Self {
        let label = label.into();
        tracing::debug!(subscription = %label, "subscribed");
        Self {
            label,
            stream: stream.boxed_local(),
        }
    }

    /// Wait for the next snapshot. `None` once the source has ended.
    pub async fn next(&mut self) -> Option<T> {
        self.stream.next().await
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stop receiving updates.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl<T> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.stream.as_mut().poll_next(cx)
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        tracing::debug!(subscription = %self.label, "unsubscribed");
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
