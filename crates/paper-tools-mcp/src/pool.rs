//! Bounded worker pool with backpressure.
//!
//! At most `workers` provider calls run at once. Up to `queue_capacity`
//! more wait for a slot; anything past that is rejected immediately with
//! [`PoolError::Saturated`] instead of piling up.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::error::PoolError;

/// Shared handle to the pool.
#[derive(Clone)]
pub struct WorkerPool {
    inner: Arc<PoolInner>,
}

struct PoolInner {
    permits: Arc<Semaphore>,
    workers: usize,
    queue_capacity: usize,
    waiting: AtomicUsize,
}

/// Releases a queue slot when a waiting call finishes waiting or is dropped.
struct QueueSlot<'a>(&'a AtomicUsize);

impl Drop for QueueSlot<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl WorkerPool {
    /// Create a pool. A `workers` value of zero is treated as one.
    #[must_use]
    pub fn new(workers: usize, queue_capacity: usize) -> Self {
        let workers = workers.max(1);
        Self {
            inner: Arc::new(PoolInner {
                permits: Arc::new(Semaphore::new(workers)),
                workers,
                queue_capacity,
                waiting: AtomicUsize::new(0),
            }),
        }
    }

    /// Number of concurrent workers.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.inner.workers
    }

    /// Calls currently running.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.inner.workers - self.inner.permits.available_permits()
    }

    /// Calls currently waiting for a worker.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.inner.waiting.load(Ordering::SeqCst)
    }

    async fn acquire(&self) -> Result<OwnedSemaphorePermit, PoolError> {
        if let Ok(permit) = Arc::clone(&self.inner.permits).try_acquire_owned() {
            return Ok(permit);
        }

        let queued = self.inner.waiting.fetch_add(1, Ordering::SeqCst);
        let _slot = QueueSlot(&self.inner.waiting);
        if queued >= self.inner.queue_capacity {
            tracing::warn!(workers = self.inner.workers, queued, "Worker pool saturated");
            return Err(PoolError::Saturated { workers: self.inner.workers, queued });
        }

        Arc::clone(&self.inner.permits).acquire_owned().await.map_err(|_| PoolError::Closed)
    }

    /// Run an async call once a worker is free.
    pub async fn run<F, T>(&self, call: F) -> Result<T, PoolError>
    where
        F: Future<Output = T>,
    {
        let _permit = self.acquire().await?;
        Ok(call.await)
    }

    /// Run a blocking closure on the blocking thread pool once a worker is free.
    ///
    /// The worker stays occupied until the closure returns, even if the
    /// caller stops waiting.
    pub async fn run_blocking<F, T>(&self, work: F) -> Result<T, PoolError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let permit = self.acquire().await?;
        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            work()
        })
        .await
        .map_err(|e| PoolError::Join(e.to_string()))
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("workers", &self.inner.workers)
            .field("queue_capacity", &self.inner.queue_capacity)
            .finish()
    }
}
