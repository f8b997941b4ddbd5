use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::ai::provider::AiProvider;
use crate::config::AppConfig;

/// Single-flight guard for playbook generation. Submissions are never queued
/// or pipelined: while one request is outstanding, further attempts to
/// acquire the lock fail and no second outbound call is made.
#[derive(Default)]
pub struct GenerationLock {
    busy: AtomicBool,
}

impl GenerationLock {
    /// Try to mark a generation as in flight. Returns `None` if one already is.
    pub fn try_acquire(&self) -> Option<GenerationGuard<'_>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Some(GenerationGuard { lock: self })
        } else {
            None
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

/// Clears the busy flag when dropped, on success and failure paths alike.
pub struct GenerationGuard<'a> {
    lock: &'a GenerationLock,
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        self.lock.busy.store(false, Ordering::SeqCst);
    }
}

pub struct AppState {
    pub config: Mutex<AppConfig>,
    /// Built once at startup from the resolved credential. `None` means the
    /// key was absent: the UI still renders but generation is unusable.
    pub provider: Option<Arc<dyn AiProvider>>,
    pub generation: GenerationLock,
}

impl AppState {
    pub fn new(config: AppConfig, provider: Option<Arc<dyn AiProvider>>) -> Self {
        Self {
            config: Mutex::new(config),
            provider,
            generation: GenerationLock::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_single_flight() {
        let lock = GenerationLock::default();
        let guard = lock.try_acquire().expect("first acquire succeeds");
        assert!(lock.is_busy());
        assert!(lock.try_acquire().is_none());
        drop(guard);
        assert!(!lock.is_busy());
        assert!(lock.try_acquire().is_some());
    }

    #[test]
    fn test_lock_clears_on_drop_in_error_path() {
        let lock = GenerationLock::default();
        let attempt = || -> Result<(), ()> {
            let _guard = lock.try_acquire().ok_or(())?;
            Err(())
        };
        assert!(attempt().is_err());
        assert!(!lock.is_busy());
    }
}
