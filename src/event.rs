//! Event and channel types delivered through the watcher pipeline.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Semantic label for a workspace change, derived from which watched
/// root the changed path falls under.
///
/// The set is closed: paths outside every watched root are never
/// reported, so there is no "unknown" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    ProblemChanged,
    TemplateChanged,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProblemChanged => "problem-changed",
            Self::TemplateChanged => "template-changed",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration selector for handlers: one specific category, or the
/// wildcard `All` channel that receives every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Category(EventCategory),
    All,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category(category) => category.as_str(),
            Self::All => "all",
        }
    }
}

impl From<EventCategory> for Channel {
    fn from(category: EventCategory) -> Self {
        Self::Category(category)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit delivered to handlers: one debounced change at `path`,
/// labeled with the category of the root it happened under.
///
/// The raw filesystem operation (create/modify/delete) is deliberately
/// not carried; handlers only learn that something changed at `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchEvent {
    pub category: EventCategory,
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&EventCategory::ProblemChanged).unwrap();
        assert_eq!(json, "\"problem-changed\"");
        let json = serde_json::to_string(&EventCategory::TemplateChanged).unwrap();
        assert_eq!(json, "\"template-changed\"");
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::All.to_string(), "all");
        assert_eq!(
            Channel::from(EventCategory::TemplateChanged).to_string(),
            "template-changed"
        );
    }

    #[test]
    fn test_event_round_trips_through_json() {
        let event = WatchEvent {
            category: EventCategory::ProblemChanged,
            path: PathBuf::from("/workspace/problems/two_sum.md"),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: WatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
