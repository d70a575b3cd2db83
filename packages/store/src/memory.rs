use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::stream::Stream;
use tokio::sync::watch;

use crate::backend::{Backend, Subscription};
use crate::error::BackendError;
use crate::models::{CurrentUser, NewPost, Post};
use crate::query::Query;

/// In-memory Backend for testing and local development.
///
/// Every clone shares the same collections, session and subscribers.
#[derive(Clone, Debug)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    collections: HashMap<String, Vec<Post>>,
    queries: Vec<(Query, watch::Sender<Vec<Post>>)>,
    user: watch::Sender<Option<CurrentUser>>,
    next_failure: Option<BackendError>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        let (user, _) = watch::channel(None);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                collections: HashMap::new(),
                queries: Vec::new(),
                user,
                next_failure: None,
            })),
        }
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a session for `user`.
    pub fn sign_in(&self, user: CurrentUser) {
        tracing::debug!(email = %user.email, "session started");
        self.lock().user.send_replace(Some(user));
    }

    /// End the current session.
    pub fn sign_out(&self) {
        self.lock().user.send_replace(None);
    }

    /// Make the next `create_record` call fail with `error`.
    pub fn fail_next_create(&self, error: BackendError) {
        self.lock().next_failure = Some(error);
    }

    /// Records of `collection` in insertion order.
    pub fn records(&self, collection: &str) -> Vec<Post> {
        self.lock()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of live query subscriptions still held by someone.
    pub fn query_subscribers(&self) -> usize {
        let mut inner = self.lock();
        inner.queries.retain(|(_, tx)| !tx.is_closed());
        inner.queries.len()
    }

    /// Number of live current-user subscriptions.
    pub fn user_subscribers(&self) -> usize {
        self.lock().user.receiver_count()
    }
}

impl Inner {
    fn snapshot(&self, query: &Query) -> Vec<Post> {
        let mut records = self
            .collections
            .get(query.collection())
            .cloned()
            .unwrap_or_default();
        query.apply(&mut records);
        records
    }

    fn publish(&mut self, collection: &str) {
        self.queries.retain(|(_, tx)| !tx.is_closed());
        for (query, tx) in self.queries.iter() {
            if query.collection() == collection {
                tx.send_replace(self.snapshot(query));
            }
        }
    }
}

impl Backend for MemoryBackend {
    async fn create_record(&self, collection: &str, post: NewPost) -> Result<Post, BackendError> {
        let mut inner = self.lock();
        if let Some(error) = inner.next_failure.take() {
            tracing::debug!(collection, %error, "injected create failure");
            return Err(error);
        }

        let record = post.into_post(uuid::Uuid::new_v4().to_string());
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        inner.publish(collection);

        tracing::info!(collection, id = %record.id, "record created");
        Ok(record)
    }

    fn watch_query(&self, query: Query) -> Subscription<Vec<Post>> {
        let mut inner = self.lock();
        let (tx, rx) = watch::channel(inner.snapshot(&query));
        let label = format!("query:{}", query.collection());
        inner.queries.push((query, tx));
        Subscription::new(label, watch_stream(rx))
    }

    fn watch_current_user(&self) -> Subscription<Option<CurrentUser>> {
        let rx = self.lock().user.subscribe();
        Subscription::new("current-user", watch_stream(rx))
    }
}

/// Current value first, then one item per change until the sender is gone.
fn watch_stream<T: Clone + 'static>(rx: watch::Receiver<T>) -> impl Stream<Item = T> {
    futures::stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let value = rx.borrow_and_update().clone();
        Some((value, (rx, false)))
    })
}
