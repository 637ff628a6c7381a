use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// One-shot shutdown signal shared by all engines.
///
/// The flag only ever goes from unset to set. Setting it wakes every thread
/// blocked in [`JoinFlag::wait_timeout`].
#[derive(Debug, Default)]
pub struct JoinFlag {
    set: Mutex<bool>,
    changed: Condvar,
}

impl JoinFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag. Repeated calls are no-ops.
    pub fn request(&self) {
        let mut set = self.lock();
        if !*set {
            *set = true;
            log::debug!("join requested");
        }
        self.changed.notify_all();
    }

    pub fn is_set(&self) -> bool {
        *self.lock()
    }

    /// Blocks for at most `timeout`, returning early once the flag is set.
    ///
    /// Returns whether the flag is set.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let guard = self.lock();
        let (guard, _) = self
            .changed
            .wait_timeout_while(guard, timeout, |set| !*set)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }

    // A panicking engine must not prevent the others from shutting down.
    fn lock(&self) -> MutexGuard<'_, bool> {
        self.set.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn starts_unset() {
        assert!(!JoinFlag::new().is_set());
    }

    #[test]
    fn request_is_idempotent() {
        let flag = JoinFlag::new();
        flag.request();
        flag.request();
        assert!(flag.is_set());
    }

    #[test]
    fn wait_times_out_when_unset() {
        let flag = JoinFlag::new();
        assert!(!flag.wait_timeout(Duration::from_millis(5)));
    }

    #[test]
    fn wait_returns_immediately_when_set() {
        let flag = JoinFlag::new();
        flag.request();
        let start = Instant::now();
        assert!(flag.wait_timeout(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn request_wakes_waiter_on_other_thread() {
        let flag = Arc::new(JoinFlag::new());
        let waiter = {
            let flag = Arc::clone(&flag);
            thread::spawn(move || {
                let start = Instant::now();
                while !flag.wait_timeout(Duration::from_secs(10)) {}
                start.elapsed()
            })
        };

        thread::sleep(Duration::from_millis(10));
        flag.request();

        let waited = waiter.join().expect("waiter panicked");
        assert!(waited < Duration::from_secs(5));
    }
}
