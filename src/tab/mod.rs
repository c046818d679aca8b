//! Tab management for multi-tab terminal support
//!
//! This module provides the core tab infrastructure including:
//! - `Tab`: One pane tree with its label and activity marker
//! - `TabManager`: The ordered tab set of a window plus the active tab
//! - `TabId`: Unique identifier for each tab

mod manager;

pub use manager::{CloseOutcome, TabManager};

use crate::pane::{PaneId, PaneManager};

/// Unique identifier for a tab
pub type TabId = u64;

/// Titles longer than this are shortened from the left
pub const MAX_TITLE_CHARS: usize = 30;

/// A single tab
#[derive(Debug)]
pub struct Tab {
    /// Unique identifier for this tab
    pub id: TabId,
    /// Label shown in the tab bar
    pub title: String,
    /// The pane tree of this tab
    pub pane_manager: PaneManager,
    /// Whether a background pane produced output or rang since last viewed
    pub has_activity: bool,
}

impl Tab {
    /// Create a tab labelled `Terminal {number}`
    pub fn new(id: TabId, number: u64, pane_manager: PaneManager) -> Self {
        Self {
            id,
            title: default_title(number),
            pane_manager,
            has_activity: false,
        }
    }

    /// Set the label, shortening long titles
    pub fn set_title(&mut self, title: &str) {
        self.title = shorten_title(title);
    }

    /// Check whether a pane belongs to this tab
    pub fn contains_pane(&self, id: PaneId) -> bool {
        self.pane_manager.get_pane(id).is_some()
    }

    /// Working directory of the tab's first pane
    pub fn get_cwd(&self) -> Option<String> {
        self.pane_manager.all_panes().first().and_then(|p| p.get_cwd())
    }

    /// Refresh the label from the first pane's working directory.
    ///
    /// Only applies when the first pane's program has not set a title.
    /// Returns true if the label changed.
    pub fn refresh_title_from_cwd(&mut self) -> bool {
        let Some(first) = self.pane_manager.all_panes().first().copied() else {
            return false;
        };
        if first.surface().title().is_some_and(|t| !t.is_empty()) {
            return false;
        }
        let Some(name) = first.get_cwd().as_deref().and_then(directory_label) else {
            return false;
        };
        let shortened = shorten_title(&name);
        if shortened == self.title {
            return false;
        }
        self.title = shortened;
        true
    }
}

/// Default label for the tab with the given counter value
pub fn default_title(number: u64) -> String {
    format!("Terminal {}", number)
}

/// Titles over [`MAX_TITLE_CHARS`] characters become `…` plus their last 29 characters
pub fn shorten_title(title: &str) -> String {
    let count = title.chars().count();
    if count <= MAX_TITLE_CHARS {
        return title.to_string();
    }
    let tail: String = title.chars().skip(count - (MAX_TITLE_CHARS - 1)).collect();
    format!("…{}", tail)
}

/// Basename of a directory, or the path itself for `/`
fn directory_label(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return (!path.is_empty()).then(|| "/".to_string());
    }
    std::path::Path::new(trimmed)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
}
