//! Workspace factory: wires a watcher to the trainer's layout.

use std::path::Path;

use crate::config::WatchOptions;
use crate::event::EventCategory;
use crate::roots::WatchedRoot;
use crate::watcher::FileWatcher;

/// Directory holding generated problem files, relative to the workspace root.
pub const PROBLEMS_DIR: &str = "problems";
/// Directory holding problem templates, relative to the workspace root.
pub const TEMPLATES_DIR: &str = "templates";

/// Construct a stopped watcher over the two workspace areas:
/// `<root>/problems` reports `problem-changed`, `<root>/templates`
/// reports `template-changed`. Options are forwarded unchanged.
pub fn workspace_watcher(workspace_root: impl AsRef<Path>, options: WatchOptions) -> FileWatcher {
    let workspace_root = workspace_root.as_ref();
    FileWatcher::new(
        [
            WatchedRoot::new(
                workspace_root.join(PROBLEMS_DIR),
                EventCategory::ProblemChanged,
            ),
            WatchedRoot::new(
                workspace_root.join(TEMPLATES_DIR),
                EventCategory::TemplateChanged,
            ),
        ],
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_factory_wires_both_roots() {
        let watcher = workspace_watcher("/ws", WatchOptions::default().debounce_ms(150));

        let roots = watcher.roots();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].path(), PathBuf::from("/ws/problems"));
        assert_eq!(roots[0].category(), EventCategory::ProblemChanged);
        assert_eq!(roots[1].path(), PathBuf::from("/ws/templates"));
        assert_eq!(roots[1].category(), EventCategory::TemplateChanged);

        assert_eq!(watcher.options().debounce_ms, 150);
        assert!(!watcher.is_running());
    }
}
