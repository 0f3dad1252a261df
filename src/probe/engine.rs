//! The probe engine: concurrent fan-out over the registry, fan-in of
//! results in completion order.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::stream::{FuturesUnordered, Stream, StreamExt};
use log::warn;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::error_handling::TracerError;
use crate::probe::{self, ProbeResult};
use crate::registry::Registry;

/// Launches one probe per site and returns the result stream.
///
/// All probes are spawned up front (unbounded fan-out, one task per site)
/// and share the client's connection pool; results surface in completion
/// order, not registry order. The stream is finite - one element per site -
/// and a fresh dispatch must be created per run.
///
/// Individual probe failures never abort the engine; they arrive as
/// `ProbeResult` data. Dropping the stream early does not deadlock
/// anything: in-flight probes finish (or hit their timeout) on their own.
///
/// # Errors
///
/// `TracerError::InvalidInput` if the username is empty or the registry
/// holds no sites. Nothing is dispatched in that case.
pub fn dispatch(
    registry: &Registry,
    username: &str,
    client: &reqwest::Client,
    timeout: Option<Duration>,
) -> Result<ProbeStream, TracerError> {
    dispatch_with_cap(registry, username, client, timeout, None)
}

/// Like [`dispatch`], with an optional ceiling on concurrently running
/// probes.
///
/// The cap is a semaphore acquired inside each task, so all tasks are
/// still spawned immediately and the stream still yields in completion
/// order; at most `cap` probes have a request in flight at a time.
pub fn dispatch_with_cap(
    registry: &Registry,
    username: &str,
    client: &reqwest::Client,
    timeout: Option<Duration>,
    cap: Option<usize>,
) -> Result<ProbeStream, TracerError> {
    if username.trim().is_empty() {
        return Err(TracerError::InvalidInput("username must not be empty".into()));
    }
    if registry.is_empty() {
        return Err(TracerError::InvalidInput(
            "site registry is empty after filtering".into(),
        ));
    }

    let username: Arc<str> = Arc::from(username);
    let limiter = cap.map(|n| Arc::new(Semaphore::new(n.max(1))));

    let mut tasks = FuturesUnordered::new();
    for site in registry.iter() {
        let site = Arc::clone(site);
        let username = Arc::clone(&username);
        let client = client.clone();
        let limiter = limiter.clone();

        tasks.push(tokio::spawn(async move {
            let _permit = match limiter {
                // acquire cannot fail: the semaphore is never closed
                Some(limiter) => limiter.acquire_owned().await.ok(),
                None => None,
            };
            probe::run(site, username, client, timeout).await
        }));
    }

    Ok(ProbeStream { tasks })
}

/// A finite stream of probe results in completion order.
///
/// Terminates once every launched probe has completed and been yielded;
/// waiting for the next element suspends on the underlying tasks, it never
/// busy-polls.
pub struct ProbeStream {
    tasks: FuturesUnordered<JoinHandle<ProbeResult>>,
}

impl ProbeStream {
    /// Number of probes that have not been yielded yet.
    pub fn remaining(&self) -> usize {
        self.tasks.len()
    }
}

impl Stream for ProbeStream {
    type Item = ProbeResult;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match this.tasks.poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(result))) => return Poll::Ready(Some(result)),
                Poll::Ready(Some(Err(join_error))) => {
                    // a probe task can only fail by panicking; skip it and
                    // keep draining the rest
                    warn!("probe task panicked: {join_error}");
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tasks.len();
        (0, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(n: usize) -> Registry {
        use crate::registry::{Category, SiteDefinition};
        let sites = (0..n)
            .map(|i| {
                SiteDefinition::new(
                    format!("site{i}.example"),
                    format!("https://site{i}.example/{{}}"),
                    None,
                    Category::Other,
                    false,
                    None,
                    None,
                    // every site rejects dots, so probes short-circuit
                    // without touching the network
                    true,
                )
            })
            .collect();
        Registry::from_sites(sites)
    }

    #[tokio::test]
    async fn test_empty_username_is_invalid_input() {
        let client = reqwest::Client::new();
        let result = dispatch(&registry_of(3), "  ", &client, None);
        assert!(matches!(result, Err(TracerError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_empty_registry_is_invalid_input() {
        let client = reqwest::Client::new();
        let result = dispatch(&registry_of(0), "someone", &client, None);
        assert!(matches!(result, Err(TracerError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_one_result_per_site_and_termination() {
        let client = reqwest::Client::new();
        // dotted username: every probe resolves via the precondition path
        let mut stream = dispatch(&registry_of(25), "a.b", &client, None).unwrap();

        let mut seen = std::collections::HashSet::new();
        while let Some(result) = stream.next().await {
            assert!(!result.exists);
            assert!(seen.insert(result.site.domain.clone()), "duplicate site");
        }
        assert_eq!(seen.len(), 25);
        assert_eq!(stream.remaining(), 0);
    }

    #[tokio::test]
    async fn test_cap_still_yields_every_result() {
        let client = reqwest::Client::new();
        let mut stream =
            dispatch_with_cap(&registry_of(10), "a.b", &client, None, Some(2)).unwrap();

        let mut count = 0;
        while stream.next().await.is_some() {
            count += 1;
        }
        assert_eq!(count, 10);
    }
}
