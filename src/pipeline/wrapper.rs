//! The request pipeline: activity tracking, classification and notification
//! around every outbound request.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::NotificationConfig;
use crate::error::ClientResult;

use super::activity::RequestActivity;
use super::classify::{RequestFailure, classify};
use super::toast::{ToastHost, ToastNotifier};

/// Wraps requests so that each one is counted, and each failure is
/// classified, shown as a toast, and returned to the caller.
///
/// Clones share the same activity counter and toast host.
#[derive(Debug, Clone)]
pub struct RequestPipeline {
    activity: RequestActivity,
    notifier: ToastNotifier,
}

impl RequestPipeline {
    /// Creates a pipeline from its collaborators.
    pub fn new(activity: RequestActivity, notifier: ToastNotifier) -> Self {
        Self { activity, notifier }
    }

    /// Creates a pipeline with a fresh activity counter showing toasts on `host`.
    pub fn with_host(host: Arc<dyn ToastHost>, config: NotificationConfig) -> Self {
        Self::new(RequestActivity::new(), ToastNotifier::new(host, config))
    }

    /// Returns the shared activity counter.
    pub fn activity(&self) -> &RequestActivity {
        &self.activity
    }

    /// Wraps one request.
    ///
    /// The in-flight count is incremented as soon as this is called, before
    /// the returned future is first polled. It is decremented exactly once
    /// when the request finishes or the returned future is dropped.
    ///
    /// On failure the error is classified, a toast is shown, and the
    /// classified error is returned. Nothing is retried.
    ///
    /// # Example
    ///
    /// ```
    /// use backoffice_client::config::NotificationConfig;
    /// use backoffice_client::error::ClientError;
    /// use backoffice_client::pipeline::{RequestFailure, RequestPipeline, ToastBoard};
    /// use std::sync::Arc;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let board = Arc::new(ToastBoard::new());
    /// let pipeline = RequestPipeline::with_host(board.clone(), NotificationConfig::default());
    ///
    /// let result: Result<u32, _> = pipeline
    ///     .wrap(async { Err(RequestFailure::status(403, "Forbidden", None)) })
    ///     .await;
    ///
    /// assert_eq!(result, Err(ClientError::Forbidden));
    /// assert_eq!(board.len(), 1);
    /// assert_eq!(pipeline.activity().active_count(), 0);
    /// # });
    /// ```
    pub fn wrap<T, F>(&self, request: F) -> impl Future<Output = ClientResult<T>> + use<T, F>
    where
        F: Future<Output = Result<T, RequestFailure>>,
    {
        let guard = self.activity.begin();
        let notifier = self.notifier.clone();
        let correlation_id = Uuid::new_v4();

        async move {
            let _guard = guard;
            debug!(correlation_id = %correlation_id, "Request dispatched");

            match request.await {
                Ok(payload) => {
                    debug!(correlation_id = %correlation_id, "Request succeeded");
                    Ok(payload)
                }
                Err(failure) => {
                    let error = classify(&failure);
                    warn!(
                        correlation_id = %correlation_id,
                        status = ?error.status(),
                        error = %error,
                        "Request failed"
                    );
                    notifier.notify(error.to_string());
                    Err(error)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::pipeline::ToastBoard;
    use std::task::{Context, Poll, Waker};
    use std::time::Duration;
    use tokio::sync::oneshot;

    fn pipeline() -> (RequestPipeline, Arc<ToastBoard>) {
        let board = Arc::new(ToastBoard::new());
        let pipeline = RequestPipeline::with_host(board.clone(), NotificationConfig::default());
        (pipeline, board)
    }

    #[tokio::test]
    async fn test_success_passes_payload_without_toast() {
        let (pipeline, board) = pipeline();

        let result = pipeline.wrap(async { Ok::<_, RequestFailure>(42) }).await;

        assert_eq!(result, Ok(42));
        assert!(board.is_empty());
        assert_eq!(pipeline.activity().active_count(), 0);
    }

    #[test]
    fn test_failure_outside_runtime_toast_is_still_dismissed() {
        let board = Arc::new(ToastBoard::new());
        let pipeline = RequestPipeline::with_host(
            board.clone(),
            NotificationConfig {
                display_ms: 10,
                fade_ms: 10,
            },
        );

        let mut pending = std::pin::pin!(
            pipeline.wrap(async { Err::<(), _>(RequestFailure::status(500, "Internal Server Error", None)) })
        );
        let mut cx = Context::from_waker(Waker::noop());
        match pending.as_mut().poll(&mut cx) {
            Poll::Ready(result) => assert_eq!(result, Err(ClientError::ServerError)),
            Poll::Pending => panic!("request future should complete on first poll"),
        }
        assert_eq!(board.len(), 1);
        assert_eq!(pipeline.activity().active_count(), 0);

        for _ in 0..200 {
            if board.is_empty() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("toast outlived its lifetime: {:?}", board.messages());
    }

    #[tokio::test]
    async fn test_count_increments_before_first_poll() {
        let (pipeline, _board) = pipeline();

        let pending = pipeline.wrap(async { Ok::<_, RequestFailure>(()) });
        assert_eq!(pipeline.activity().active_count(), 1);
        assert!(pipeline.activity().is_loading());

        pending.await.unwrap();
        assert_eq!(pipeline.activity().active_count(), 0);
        assert!(!pipeline.activity().is_loading());
    }

    #[tokio::test]
    async fn test_failure_is_classified_notified_and_returned() {
        let (pipeline, board) = pipeline();

        let result: ClientResult<()> = pipeline
            .wrap(async { Err(RequestFailure::status(401, "Unauthorized", None)) })
            .await;

        assert_eq!(result, Err(ClientError::SessionExpired));
        assert_eq!(board.messages(), vec!["Session expired. Please sign in again."]);
        assert_eq!(pipeline.activity().active_count(), 0);
    }

    #[tokio::test]
    async fn test_dropped_request_still_decrements_once() {
        let (pipeline, board) = pipeline();
        let (_tx, rx) = oneshot::channel::<()>();

        let pending = pipeline.wrap(async move {
            let _ = rx.await;
            Ok::<_, RequestFailure>(())
        });
        assert_eq!(pipeline.activity().active_count(), 1);

        let timed_out = tokio::time::timeout(Duration::from_millis(10), pending).await;
        assert!(timed_out.is_err());

        assert_eq!(pipeline.activity().active_count(), 0);
        assert!(!pipeline.activity().is_loading());
        assert!(board.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_requests_hold_indicator_until_all_finish() {
        let (pipeline, board) = pipeline();
        let mut senders = Vec::new();
        let mut tasks = Vec::new();

        for i in 0..3u16 {
            let (tx, rx) = oneshot::channel::<Result<u16, RequestFailure>>();
            senders.push(tx);
            let pending = pipeline.wrap(async move {
                rx.await.unwrap_or_else(|_| Err(RequestFailure::transport("sender dropped")))
            });
            tasks.push(tokio::spawn(pending));
            assert_eq!(pipeline.activity().active_count(), usize::from(i + 1));
        }

        let mut senders = senders.into_iter();
        senders.next().unwrap().send(Ok(1)).unwrap();
        senders
            .next()
            .unwrap()
            .send(Err(RequestFailure::status(500, "Internal Server Error", None)))
            .unwrap();

        let mut tasks = tasks.into_iter();
        assert_eq!(tasks.next().unwrap().await.unwrap(), Ok(1));
        assert_eq!(tasks.next().unwrap().await.unwrap(), Err(ClientError::ServerError));
        assert_eq!(pipeline.activity().active_count(), 1);
        assert!(pipeline.activity().is_loading());

        senders.next().unwrap().send(Ok(3)).unwrap();
        assert_eq!(tasks.next().unwrap().await.unwrap(), Ok(3));
        assert_eq!(pipeline.activity().active_count(), 0);
        assert!(!pipeline.activity().is_loading());
        assert_eq!(board.len(), 1);
    }
}
