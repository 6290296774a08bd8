//! Runs the scaffolding task off the event loop
//!
//! The task itself is blocking filesystem work, so it goes to the blocking
//! pool. A small watcher task awaits it and turns whatever happened (success,
//! error, panic) into exactly one [`AppEvent::GenerationFinished`].

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::generator::GeneratorError;
use crate::{BoilerplateError, Result};

use super::events::AppEvent;

pub struct CommandDispatcher {
    event_tx: UnboundedSender<AppEvent>,
    outstanding: Option<JoinHandle<()>>,
    dispatched: bool,
}

impl CommandDispatcher {
    pub fn new(event_tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            outstanding: None,
            dispatched: false,
        }
    }

    /// Start `task`; at most one task per wizard run is accepted
    pub fn dispatch<F>(&mut self, task: F) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<(), GeneratorError> + Send + 'static,
    {
        if self.dispatched {
            return Err(BoilerplateError::AlreadyDispatched);
        }
        self.dispatched = true;

        let event_tx = self.event_tx.clone();
        self.outstanding = Some(tokio::spawn(async move {
            let outcome = match tokio::task::spawn_blocking(task).await {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(join_error) => Err(format!("generation task did not complete: {}", join_error)),
            };
            debug!(ok = outcome.is_ok(), "Generation task finished");
            // The loop may already be gone after an interrupt; the result is dropped then
            let _ = event_tx.send(AppEvent::GenerationFinished(outcome));
        }));

        Ok(())
    }

    /// Let the outstanding task run on unobserved; its result is not awaited
    pub fn detach(&mut self) {
        if let Some(handle) = self.outstanding.take() {
            if !handle.is_finished() {
                debug!("Detaching generation task");
            }
        }
    }

    /// Join the outstanding task, giving up after `grace`. A task still running
    /// then is detached and left to finish on its own.
    pub async fn settle(&mut self, grace: Duration) {
        let Some(handle) = self.outstanding.take() else {
            return;
        };

        match tokio::time::timeout(grace, handle).await {
            Ok(Ok(())) => debug!("Generation task joined"),
            Ok(Err(e)) => warn!(error = %e, "Generation watcher failed"),
            Err(_) => warn!(
                grace_ms = grace.as_millis() as u64,
                "Generation task still running at exit; detaching it"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_dispatch_delivers_one_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut dispatcher = CommandDispatcher::new(tx);

        dispatcher.dispatch(|| Ok(())).unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event, AppEvent::GenerationFinished(Ok(())));

        dispatcher.settle(Duration::from_secs(1)).await;
        assert!(dispatcher.outstanding.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_second_dispatch_is_rejected() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut dispatcher = CommandDispatcher::new(tx);

        dispatcher.dispatch(|| Ok(())).unwrap();
        let second = dispatcher.dispatch(|| Ok(()));
        assert!(matches!(second, Err(BoilerplateError::AlreadyDispatched)));
    }

    #[tokio::test]
    async fn test_failure_is_reported_as_message() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut dispatcher = CommandDispatcher::new(tx);

        dispatcher
            .dispatch(|| {
                Err(GeneratorError::CreateDir {
                    path: PathBuf::from("shop/cmd"),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                })
            })
            .unwrap();

        match rx.recv().await.unwrap() {
            AppEvent::GenerationFinished(Err(message)) => {
                assert!(message.contains("shop/cmd"));
                assert!(message.contains("denied"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_panicking_task_still_reports() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut dispatcher = CommandDispatcher::new(tx);

        dispatcher.dispatch(|| panic!("boom")).unwrap();

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, AppEvent::GenerationFinished(Err(_))));
    }

    #[tokio::test]
    async fn test_settle_detaches_slow_task() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut dispatcher = CommandDispatcher::new(tx);

        dispatcher
            .dispatch(|| {
                std::thread::sleep(Duration::from_millis(300));
                Ok(())
            })
            .unwrap();

        dispatcher.settle(Duration::from_millis(10)).await;
        assert!(dispatcher.outstanding.is_none());
    }

    #[tokio::test]
    async fn test_detach_returns_without_waiting() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut dispatcher = CommandDispatcher::new(tx);

        dispatcher
            .dispatch(|| {
                std::thread::sleep(Duration::from_millis(300));
                Ok(())
            })
            .unwrap();

        let started = std::time::Instant::now();
        dispatcher.detach();
        assert!(started.elapsed() < Duration::from_millis(100));
        assert!(dispatcher.outstanding.is_none());

        // Still one task per run after detaching
        assert!(matches!(
            dispatcher.dispatch(|| Ok(())),
            Err(BoilerplateError::AlreadyDispatched)
        ));
    }
}
