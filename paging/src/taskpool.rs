use futures::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Bounded pool for page fetches.
///
/// Clones share the same permits and cancellation token. Dropping the last
/// clone cancels every fetch that has not settled yet.
#[derive(Clone)]
pub struct TaskPool {
    inner: Arc<PoolInner>,
}

struct PoolInner {
    semaphore: Arc<Semaphore>,
    cancel_token: CancellationToken,
}

impl TaskPool {
    pub fn new(n_tasks: usize) -> TaskPool {
        TaskPool {
            inner: Arc::new(PoolInner {
                semaphore: Arc::new(Semaphore::new(n_tasks)),
                cancel_token: CancellationToken::new(),
            }),
        }
    }

    /// Spawn `func` once a permit is free. Must be called from within a
    /// tokio runtime.
    pub fn execute<F, T>(&self, func: F)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send,
    {
        let semaphore = self.inner.semaphore.clone();
        let token = self.inner.cancel_token.clone();
        tokio::spawn(async move {
            let main = async {
                let Ok(_permit) = semaphore.acquire().await else {
                    return;
                };
                func.await;
            };

            // Task first: pooled fetches settle their own cancellation
            tokio::select! {
                biased;
                () = main => {},
                () = token.cancelled() => {
                    log::debug!("Pooled task cancelled before completion");
                }
            }
        });
    }

    /// Token that fires when the pool shuts down. Tasks that settle
    /// through a channel watch it to report their own cancellation.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.inner.cancel_token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancel_token.is_cancelled()
    }

    /// Cancel running tasks and refuse new permits.
    pub fn shutdown(&self) {
        log::info!("Shutting down task pool");
        self.inner.semaphore.close();
        self.inner.cancel_token.cancel();
    }
}

impl Drop for PoolInner {
    fn drop(&mut self) {
        self.semaphore.close();
        self.cancel_token.cancel();
    }
}

impl std::fmt::Debug for TaskPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskPool")
            .field("available_permits", &self.inner.semaphore.available_permits())
            .field("cancelled", &self.inner.cancel_token.is_cancelled())
            .finish()
    }
}
