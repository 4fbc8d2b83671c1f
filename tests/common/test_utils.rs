#![allow(dead_code)]

/// Sets an environment variable for the duration of a test and restores the
/// previous value when dropped.
pub struct EnvVarGuard {
    name: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    pub fn set(name: &'static str, value: &str) -> Self {
        let previous = std::env::var(name).ok();
        // SAFETY: env-mutating tests live in a single test function.
        unsafe { std::env::set_var(name, value) };
        Self { name, previous }
    }

    pub fn unset(name: &'static str) -> Self {
        let previous = std::env::var(name).ok();
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(name) };
        Self { name, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: see `set`.
        unsafe {
            match &self.previous {
                Some(value) => std::env::set_var(self.name, value),
                None => std::env::remove_var(self.name),
            }
        }
    }
}

/// Consistent item names for bulk tests.
pub fn generate_test_items(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("test_item_{:06}", i)).collect()
}
