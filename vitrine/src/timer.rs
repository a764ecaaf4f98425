//! Deferred callbacks on the tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Run `f` once after `delay`.
///
/// Returns `None` (and drops `f`) when called outside a tokio runtime, so
/// components stay usable from synchronous code that never drives timers.
pub fn schedule<F>(delay: Duration, f: F) -> Option<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    let Ok(handle) = Handle::try_current() else {
        log::debug!("No runtime, dropping callback scheduled in {delay:?}");
        return None;
    };
    Some(handle.spawn(async move {
        tokio::time::sleep(delay).await;
        f();
    }))
}
