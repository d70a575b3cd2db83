//! Interval refresh for live queries.

use std::future::Future;
use std::time::Duration;

use futures::stream::Stream;
use store::BackendError;

/// Sleep on the platform's timer.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Call `fetch` immediately and then every `interval`, yielding a value
/// only when it differs from the last one yielded.
///
/// Failed fetches are logged and retried on the next tick; the stream never
/// ends on its own. Dropping it stops the polling.
pub fn poll_changes<T, F, Fut>(
    label: String,
    interval: Duration,
    fetch: F,
) -> impl Stream<Item = T>
where
    T: Clone + PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, BackendError>>,
{
    futures::stream::unfold(
        (fetch, None::<T>, true),
        move |(fetch, last, mut first)| {
            let label = label.clone();
            async move {
                loop {
                    if !first {
                        sleep(interval).await;
                    }
                    first = false;

                    match fetch().await {
                        Ok(value) if last.as_ref() != Some(&value) => {
                            return Some((value.clone(), (fetch, Some(value), false)));
                        }
                        Ok(_) => {}
                        Err(error) => {
                            tracing::warn!(subscription = %label, %error, "refresh failed");
                        }
                    }
                }
            }
        },
    )
}
