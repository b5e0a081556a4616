//! Home and desktop directory resolution.
//!
//! `DESKTOP_CLEANUP_HOME` overrides the home directory so tests and sandboxed
//! runs never touch the real desktop. When it is set, the desktop is taken to be
//! `<home>/Desktop`.

use crate::error::{CleanupError, Result};
use std::path::PathBuf;

pub const HOME_OVERRIDE_VAR: &str = "DESKTOP_CLEANUP_HOME";

pub fn home_dir() -> Result<PathBuf> {
    std::env::var_os(HOME_OVERRIDE_VAR)
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .ok_or_else(|| CleanupError::unavailable("~", "cannot determine home directory"))
}

/// The platform desktop, falling back to `<home>/Desktop`.
pub fn desktop_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_OVERRIDE_VAR) {
        return Ok(PathBuf::from(home).join("Desktop"));
    }
    match dirs::desktop_dir() {
        Some(dir) => Ok(dir),
        None => Ok(home_dir()?.join("Desktop")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::Mutex;

    // Serializes every test here that reads or writes the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_override<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous: Option<OsString> = std::env::var_os(HOME_OVERRIDE_VAR);
        // SAFETY: ENV_LOCK is held, and no other test in the crate touches the environment.
        unsafe {
            match value {
                Some(v) => std::env::set_var(HOME_OVERRIDE_VAR, v),
                None => std::env::remove_var(HOME_OVERRIDE_VAR),
            }
        }
        let result = f();
        unsafe {
            match previous {
                Some(v) => std::env::set_var(HOME_OVERRIDE_VAR, v),
                None => std::env::remove_var(HOME_OVERRIDE_VAR),
            }
        }
        result
    }

    #[test]
    fn test_override_sets_home_and_desktop() {
        let (home, desktop) = with_override(Some("/tmp/cleanup-home"), || {
            (home_dir().unwrap(), desktop_dir().unwrap())
        });

        assert_eq!(home, PathBuf::from("/tmp/cleanup-home"));
        assert_eq!(desktop, PathBuf::from("/tmp/cleanup-home/Desktop"));
    }

    #[test]
    fn test_without_override_uses_platform_dirs() {
        let (home, desktop) = with_override(None, || (home_dir().ok(), desktop_dir().ok()));

        assert_eq!(home, dirs::home_dir());
        if let Some(home) = home {
            let expected = dirs::desktop_dir().unwrap_or_else(|| home.join("Desktop"));
            assert_eq!(desktop, Some(expected));
        }
    }
}
