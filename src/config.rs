//! Watcher options.

use serde::{Deserialize, Serialize};

fn default_debounce_ms() -> u64 {
    300
}

fn default_recursive() -> bool {
    true
}

/// Options accepted at construction and forwarded unchanged by the
/// workspace factory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchOptions {
    /// How long a path must stay quiet before its change is reported,
    /// in milliseconds. A new raw event inside the window resets it.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Whether subdirectories of each watched root are monitored too.
    #[serde(default = "default_recursive")]
    pub recursive: bool,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            recursive: default_recursive(),
        }
    }
}

impl WatchOptions {
    /// Set the debounce window in milliseconds.
    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set whether roots are watched recursively.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WatchOptions::default();
        assert_eq!(options.debounce_ms, 300);
        assert!(options.recursive);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let options: WatchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.debounce_ms, 300);
        assert!(options.recursive);

        let options: WatchOptions = serde_json::from_str(r#"{"debounce_ms": 50}"#).unwrap();
        assert_eq!(options.debounce_ms, 50);
        assert!(options.recursive);
    }

    #[test]
    fn test_builder_setters() {
        let options = WatchOptions::default().debounce_ms(100).recursive(false);
        assert_eq!(options.debounce_ms, 100);
        assert!(!options.recursive);
    }
}
