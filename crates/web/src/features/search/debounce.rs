use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Last-query-wins gate for keystroke-driven search.
///
/// Every query takes a ticket and waits out the debounce window; a newer
/// query issued meanwhile invalidates the older ticket, so results from a
/// stale, slower query can never overwrite a newer one.
#[derive(Clone)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
    delay: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    /// Waits out the debounce window. Returns `true` if this caller is still
    /// the most recent one and should run its query, `false` if a newer call
    /// superseded it.
    pub async fn acquire(&self) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn lone_query_wins() {
        let debouncer = Debouncer::default();
        assert!(debouncer.acquire().await);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_query_supersedes_older() {
        let debouncer = Debouncer::default();

        let first = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.acquire().await }
        });
        // Let the first query register its ticket before the second arrives.
        tokio::task::yield_now().await;
        let second = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.acquire().await }
        });

        assert!(!first.await.unwrap());
        assert!(second.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn queries_in_separate_windows_both_win() {
        let debouncer = Debouncer::default();
        assert!(debouncer.acquire().await);
        assert!(debouncer.acquire().await);
    }
}
