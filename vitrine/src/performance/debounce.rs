use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::timer;

#[derive(Default)]
struct Pending {
    /// Bumped on every call; a timer only fires if it is still current.
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

/// Collapses bursts of calls into one.
///
/// By default the callback runs once, `delay` after the last call of a
/// burst. With [`leading`](Self::leading) it runs on the first call of a
/// burst instead, and further calls only extend the quiet period.
///
/// Timers need a tokio runtime; without one only leading calls fire.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    leading: bool,
    callback: Arc<dyn Fn() + Send + Sync>,
    pending: Arc<Mutex<Pending>>,
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("leading", &self.leading)
            .finish_non_exhaustive()
    }
}

impl Debouncer {
    pub fn new(delay: Duration, callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            delay,
            leading: false,
            callback: Arc::new(callback),
            pending: Arc::new(Mutex::new(Pending::default())),
        }
    }

    /// Fire on the leading edge of a burst instead of the trailing one.
    pub fn leading(mut self) -> Self {
        self.leading = true;
        self
    }

    /// Whether a burst is in progress.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|p| p.handle.is_some())
            .unwrap_or(false)
    }

    pub fn call(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|p| p.into_inner());
        let call_now = self.leading && pending.handle.is_none();

        if let Some(handle) = pending.handle.take() {
            handle.abort();
        }
        pending.generation = pending.generation.wrapping_add(1);
        let generation = pending.generation;

        let state = Arc::clone(&self.pending);
        let callback = Arc::clone(&self.callback);
        let leading = self.leading;
        pending.handle = timer::schedule(self.delay, move || {
            let mut pending = state.lock().unwrap_or_else(|p| p.into_inner());
            if pending.generation != generation {
                return;
            }
            pending.handle = None;
            drop(pending);
            if !leading {
                callback();
            }
        });
        drop(pending);

        if call_now {
            (self.callback)();
        }
    }

    /// Drop a pending trailing call.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|p| p.into_inner());
        pending.generation = pending.generation.wrapping_add(1);
        if let Some(handle) = pending.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&count);
        (count, move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_trailing_fires_once_after_quiet() {
        let (count, callback) = counter();
        let debouncer = Debouncer::new(Duration::from_millis(100), callback);

        for _ in 0..5 {
            debouncer.call();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_leading_fires_immediately() {
        let (count, callback) = counter();
        let debouncer = Debouncer::new(Duration::from_millis(100), callback).leading();

        debouncer.call();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        debouncer.call();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        debouncer.call();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (count, callback) = counter();
        let debouncer = Debouncer::new(Duration::from_millis(100), callback);
        debouncer.call();
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_leading_without_runtime() {
        let (count, callback) = counter();
        let debouncer = Debouncer::new(Duration::from_millis(100), callback).leading();
        debouncer.call();
        debouncer.call();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
