//! Process-environment access for config tests.

use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV: Mutex<()> = Mutex::new(());

/// Exclusive hold on the process environment for one test. Every variable
/// touched through it gets its first-seen value back on drop.
pub(super) struct ScopedEnv {
    saved: Vec<(&'static str, Option<OsString>)>,
    _held: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    pub(super) fn lock() -> Self {
        Self {
            saved: Vec::new(),
            _held: ENV.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    pub(super) fn set(&mut self, key: &'static str, value: &str) -> &mut Self {
        self.remember(key);
        // SAFETY: `ENV` is held for as long as `self` lives.
        unsafe { std::env::set_var(key, value) };
        self
    }

    pub(super) fn unset(&mut self, key: &'static str) -> &mut Self {
        self.remember(key);
        // SAFETY: `ENV` is held for as long as `self` lives.
        unsafe { std::env::remove_var(key) };
        self
    }

    fn remember(&mut self, key: &'static str) {
        if !self.saved.iter().any(|(saved, _)| *saved == key) {
            self.saved.push((key, std::env::var_os(key)));
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            // SAFETY: `_held` is released only after this body returns.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
