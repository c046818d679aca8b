//! Tab manager for coordinating multiple terminal tabs within a window

use super::{Tab, TabId};
use crate::pane::{ClosePaneResult, Pane, PaneId, PaneManager};

/// What closing a pane did to the tab set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// No tab holds the pane
    NotFound,
    /// The pane was removed from its tab
    PaneClosed,
    /// The pane was the last of its tab, and the tab was removed
    TabClosed(TabId),
    /// The pane is the only pane of the only tab; the window should close.
    /// The tree is left as it is.
    WindowShouldClose,
}

/// Manages the ordered set of tabs within a single window.
///
/// The focused pane of the window is the focused pane of the active tab.
#[derive(Debug)]
pub struct TabManager {
    /// All tabs in this window, in order
    tabs: Vec<Tab>,
    /// Currently active tab ID
    active_tab_id: Option<TabId>,
    /// Counter for generating unique tab IDs; also numbers default labels
    next_tab_id: TabId,
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManager {
    /// Create a new empty tab manager
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            next_tab_id: 1,
        }
    }

    /// Append a tab holding `pane_manager` and switch to it
    pub fn add_tab(&mut self, pane_manager: PaneManager) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id += 1;

        self.tabs.push(Tab::new(id, id, pane_manager));
        self.switch_to(id);

        log::info!("Created new tab {} (total: {})", id, self.tabs.len());
        id
    }

    /// Close a tab by ID
    /// Returns true if this was the last tab (window should close)
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let index = self.tabs.iter().position(|t| t.id == id);

        if let Some(idx) = index {
            log::info!("Closing tab {} (index {})", id, idx);

            self.tabs.remove(idx);

            // If we closed the active tab, switch to another
            if self.active_tab_id == Some(id) {
                self.active_tab_id = None;
                if !self.tabs.is_empty() {
                    // Prefer the tab at the same index (or previous if at end)
                    let new_idx = idx.min(self.tabs.len() - 1);
                    let new_id = self.tabs[new_idx].id;
                    self.switch_to(new_id);
                }
            }
        }

        self.tabs.is_empty()
    }

    /// Close a pane wherever it lives.
    ///
    /// A sole pane in the sole tab is not removed; the caller is told the
    /// window should close instead. A sole pane in one of several tabs
    /// removes the whole tab.
    pub fn close_pane(&mut self, pane_id: PaneId) -> CloseOutcome {
        let Some(tab_id) = self.tab_for_pane(pane_id) else {
            crate::debug_info!("TAB", "close_pane: pane {} not in any tab", pane_id);
            return CloseOutcome::NotFound;
        };

        let single_pane = self
            .get_tab(tab_id)
            .is_some_and(|t| t.pane_manager.pane_count() == 1);
        if single_pane {
            if self.tabs.len() <= 1 {
                log::info!("Closing last pane {} of last tab", pane_id);
                return CloseOutcome::WindowShouldClose;
            }
            self.close_tab(tab_id);
            return CloseOutcome::TabClosed(tab_id);
        }

        let Some(tab) = self.get_tab_mut(tab_id) else {
            return CloseOutcome::NotFound;
        };
        match tab.pane_manager.close_pane(pane_id) {
            ClosePaneResult::Closed => {
                if self.active_tab_id == Some(tab_id) {
                    self.focus_active_pane();
                }
                CloseOutcome::PaneClosed
            }
            ClosePaneResult::Emptied => {
                self.close_tab(tab_id);
                CloseOutcome::TabClosed(tab_id)
            }
            ClosePaneResult::NotFound => CloseOutcome::NotFound,
        }
    }

    /// Get a reference to the active tab
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
    }

    /// Get a mutable reference to the active tab
    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let active_id = self.active_tab_id;
        active_id.and_then(move |id| self.tabs.iter_mut().find(|t| t.id == id))
    }

    /// Index of the active tab
    pub fn active_tab_index(&self) -> Option<usize> {
        let id = self.active_tab_id?;
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Switch to a tab by ID.
    ///
    /// Clears the tab's activity marker and focuses its first pane.
    pub fn switch_to(&mut self, id: TabId) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.has_activity = false;
            if let Some(first) = tab.pane_manager.first_pane_id() {
                tab.pane_manager.focus_pane(first);
            }
            self.active_tab_id = Some(id);
            log::debug!("Switched to tab {}", id);
            self.focus_active_pane();
        }
    }

    /// Switch to the next tab (wraps around)
    pub fn next_tab(&mut self) {
        self.step_tab(1);
    }

    /// Switch to the previous tab (wraps around)
    pub fn prev_tab(&mut self) {
        self.step_tab(-1);
    }

    fn step_tab(&mut self, direction: i64) {
        if self.tabs.len() <= 1 {
            return;
        }
        let current_idx = self.active_tab_index().unwrap_or(0) as i64;
        let new_idx = (current_idx + direction).rem_euclid(self.tabs.len() as i64) as usize;
        let new_id = self.tabs[new_idx].id;
        self.switch_to(new_id);
    }

    /// Get the number of tabs
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Check if there are multiple tabs (the tab bar is only shown then)
    pub fn has_multiple_tabs(&self) -> bool {
        self.tabs.len() > 1
    }

    /// Get the active tab ID
    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    /// Get all tabs as a slice
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Get all tabs as mutable slice
    pub fn tabs_mut(&mut self) -> &mut [Tab] {
        &mut self.tabs
    }

    /// Get a tab by ID
    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a tab by ID
    pub fn get_tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// The tab holding a pane
    pub fn tab_for_pane(&self, pane_id: PaneId) -> Option<TabId> {
        self.tabs
            .iter()
            .find(|t| t.contains_pane(pane_id))
            .map(|t| t.id)
    }

    /// Find a pane in any tab
    pub fn find_pane_mut(&mut self, pane_id: PaneId) -> Option<&mut Pane> {
        self.tabs
            .iter_mut()
            .find_map(|t| t.pane_manager.get_pane_mut(pane_id))
    }

    /// Mark non-active tabs as having activity
    pub fn mark_activity(&mut self, tab_id: TabId) {
        if Some(tab_id) != self.active_tab_id
            && let Some(tab) = self.get_tab_mut(tab_id)
        {
            tab.has_activity = true;
        }
    }

    /// The window's focused pane: the focused pane of the active tab
    pub fn focused_pane_id(&self) -> Option<PaneId> {
        self.active_tab()?.pane_manager.focused_pane_id()
    }

    pub fn focused_pane(&self) -> Option<&Pane> {
        self.active_tab()?.pane_manager.focused_pane()
    }

    pub fn focused_pane_mut(&mut self) -> Option<&mut Pane> {
        self.active_tab_mut()?.pane_manager.focused_pane_mut()
    }

    /// Focus a pane in whichever tab holds it, switching tabs if needed.
    ///
    /// Returns false if no tab holds the pane.
    pub fn focus_pane(&mut self, pane_id: PaneId) -> bool {
        if !self.record_focus(pane_id) {
            return false;
        }
        self.focus_active_pane();
        true
    }

    /// Record that a pane received keyboard focus from the toolkit.
    ///
    /// Same bookkeeping as [`TabManager::focus_pane`] without asking the
    /// surface to grab focus again.
    pub fn record_focus(&mut self, pane_id: PaneId) -> bool {
        let Some(tab_id) = self.tab_for_pane(pane_id) else {
            return false;
        };
        self.active_tab_id = Some(tab_id);
        if let Some(tab) = self.get_tab_mut(tab_id) {
            tab.has_activity = false;
            tab.pane_manager.focus_pane(pane_id);
        }
        true
    }

    /// Move focus within the active tab; returns the newly focused pane
    pub fn navigate(&mut self, direction: i32) -> Option<PaneId> {
        let new_id = self.active_tab_mut()?.pane_manager.navigate(direction);
        self.focus_active_pane();
        new_id
    }

    /// Hand keyboard focus to the active tab's focused surface
    fn focus_active_pane(&mut self) {
        if let Some(pane) = self.focused_pane_mut() {
            pane.surface_mut().grab_focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::{Orientation, PaneSpawner};
    use crate::test_support::FakeSpawner;

    fn single(spawner: &mut FakeSpawner) -> PaneManager {
        PaneManager::with_initial_pane(spawner.spawn_pane(None).unwrap())
    }

    #[test]
    fn test_add_tab_switches_and_numbers() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let first = tabs.add_tab(single(&mut spawner));
        let second = tabs.add_tab(single(&mut spawner));

        assert_eq!(tabs.active_tab_id(), Some(second));
        assert_eq!(tabs.get_tab(first).unwrap().title, "Terminal 1");
        assert_eq!(tabs.get_tab(second).unwrap().title, "Terminal 2");
        assert!(tabs.has_multiple_tabs());
    }

    #[test]
    fn test_labels_are_monotonic_after_close() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let first = tabs.add_tab(single(&mut spawner));
        tabs.add_tab(single(&mut spawner));
        tabs.close_tab(first);
        let third = tabs.add_tab(single(&mut spawner));
        assert_eq!(tabs.get_tab(third).unwrap().title, "Terminal 3");
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let a = tabs.add_tab(single(&mut spawner));
        let b = tabs.add_tab(single(&mut spawner));
        let c = tabs.add_tab(single(&mut spawner));

        tabs.next_tab();
        assert_eq!(tabs.active_tab_id(), Some(a));
        tabs.prev_tab();
        assert_eq!(tabs.active_tab_id(), Some(c));
        tabs.prev_tab();
        assert_eq!(tabs.active_tab_id(), Some(b));
    }

    #[test]
    fn test_next_tab_single_is_noop() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let a = tabs.add_tab(single(&mut spawner));
        tabs.next_tab();
        assert_eq!(tabs.active_tab_id(), Some(a));
    }

    #[test]
    fn test_switch_focuses_first_pane_and_clears_activity() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let a = tabs.add_tab(single(&mut spawner));
        let first_pane = tabs.focused_pane_id().unwrap();
        tabs.active_tab_mut()
            .unwrap()
            .pane_manager
            .split(Orientation::Vertical, &mut spawner);
        assert_ne!(tabs.focused_pane_id(), Some(first_pane));

        tabs.add_tab(single(&mut spawner));
        tabs.mark_activity(a);
        assert!(tabs.get_tab(a).unwrap().has_activity);

        tabs.switch_to(a);
        assert_eq!(tabs.focused_pane_id(), Some(first_pane));
        assert!(!tabs.get_tab(a).unwrap().has_activity);
    }

    #[test]
    fn test_mark_activity_ignores_active_tab() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let a = tabs.add_tab(single(&mut spawner));
        tabs.mark_activity(a);
        assert!(!tabs.get_tab(a).unwrap().has_activity);
    }

    #[test]
    fn test_close_active_tab_prefers_same_index() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let a = tabs.add_tab(single(&mut spawner));
        let b = tabs.add_tab(single(&mut spawner));
        let c = tabs.add_tab(single(&mut spawner));

        tabs.switch_to(b);
        assert!(!tabs.close_tab(b));
        assert_eq!(tabs.active_tab_id(), Some(c));
        assert!(!tabs.close_tab(c));
        assert_eq!(tabs.active_tab_id(), Some(a));
        assert!(tabs.close_tab(a));
        assert_eq!(tabs.active_tab_id(), None);
    }

    #[test]
    fn test_close_sole_pane_of_sole_tab_requests_window_close() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        tabs.add_tab(single(&mut spawner));
        let pane = tabs.focused_pane_id().unwrap();

        assert_eq!(tabs.close_pane(pane), CloseOutcome::WindowShouldClose);
        assert_eq!(tabs.tab_count(), 1);
        assert_eq!(tabs.focused_pane_id(), Some(pane));
    }

    #[test]
    fn test_close_sole_pane_of_one_of_many_tabs_closes_tab() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let a = tabs.add_tab(single(&mut spawner));
        let b = tabs.add_tab(single(&mut spawner));
        let pane = tabs.focused_pane_id().unwrap();

        assert_eq!(tabs.close_pane(pane), CloseOutcome::TabClosed(b));
        assert_eq!(tabs.tab_count(), 1);
        assert_eq!(tabs.active_tab_id(), Some(a));
        assert!(tabs.focused_pane_id().is_some());
    }

    #[test]
    fn test_close_pane_in_background_tab() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let a = tabs.add_tab(single(&mut spawner));
        let outcome = tabs
            .active_tab_mut()
            .unwrap()
            .pane_manager
            .split(Orientation::Horizontal, &mut spawner)
            .unwrap();
        let b = tabs.add_tab(single(&mut spawner));

        assert_eq!(tabs.close_pane(outcome.pane_id), CloseOutcome::PaneClosed);
        assert_eq!(tabs.active_tab_id(), Some(b));
        assert_eq!(tabs.get_tab(a).unwrap().pane_manager.pane_count(), 1);
    }

    #[test]
    fn test_close_unknown_pane() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        tabs.add_tab(single(&mut spawner));
        assert_eq!(tabs.close_pane(9999), CloseOutcome::NotFound);
    }

    #[test]
    fn test_focus_pane_switches_tab() {
        let mut spawner = FakeSpawner::default();
        let mut tabs = TabManager::new();
        let a = tabs.add_tab(single(&mut spawner));
        let pane_a = tabs.focused_pane_id().unwrap();
        tabs.add_tab(single(&mut spawner));

        assert!(tabs.focus_pane(pane_a));
        assert_eq!(tabs.active_tab_id(), Some(a));
        assert!(!tabs.focus_pane(12345));
    }
}
