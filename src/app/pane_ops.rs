//! Pane and tab operations: split, close, navigate, new tab, zoom.

use super::WindowState;
use crate::pane::{LayoutTask, Orientation, PaneId, PaneManager, PaneSpawner, SplitOutcome};
use crate::tab::{CloseOutcome, TabId};
use z4term_config::defaults::{self, MIN_FONT_SIZE};

impl WindowState {
    /// Split the focused pane of the active tab.
    ///
    /// The new pane starts in the focused pane's working directory and takes
    /// focus. Its divider is bisected on the next layout pass. Returns `None`
    /// when nothing is focused or the new surface could not be spawned.
    pub fn split(&mut self, orientation: Orientation) -> Option<SplitOutcome> {
        let (mut spawner, tabs) = self.spawner();
        let outcome = tabs
            .active_tab_mut()?
            .pane_manager
            .split(orientation, &mut spawner)?;

        self.layout.push(LayoutTask::Bisect(outcome.split_id));
        if let Some(pane) = self.tab_manager.focused_pane_mut() {
            pane.surface_mut().grab_focus();
        }
        Some(outcome)
    }

    /// Close the focused pane
    pub fn close_focused_pane(&mut self) -> CloseOutcome {
        match self.tab_manager.focused_pane_id() {
            Some(id) => self.close_pane(id),
            None => CloseOutcome::NotFound,
        }
    }

    /// Close a pane wherever it lives.
    ///
    /// Closing the last pane of the last tab asks the host to close the
    /// window. Does nothing once the window is closing.
    pub fn close_pane(&mut self, pane_id: PaneId) -> CloseOutcome {
        if self.is_closing {
            return CloseOutcome::NotFound;
        }

        let outcome = self.tab_manager.close_pane(pane_id);
        crate::debug_info!("PANE_CLOSE", "Close pane {}: {:?}", pane_id, outcome);
        if outcome == CloseOutcome::WindowShouldClose {
            self.request_close();
        }
        outcome
    }

    /// Open a tab with one pane in the home directory and switch to it
    pub fn new_tab(&mut self) -> Option<TabId> {
        let (mut spawner, tabs) = self.spawner();
        let pane = spawner.spawn_pane(None)?;
        Some(tabs.add_tab(PaneManager::with_initial_pane(pane)))
    }

    /// Close a whole tab, as a middle-click on its label does.
    ///
    /// Closing the only tab closes the window instead.
    pub fn close_tab(&mut self, tab_id: TabId) {
        if self.is_closing || self.tab_manager.get_tab(tab_id).is_none() {
            return;
        }
        if self.tab_manager.tab_count() <= 1 {
            self.request_close();
            return;
        }
        self.tab_manager.close_tab(tab_id);
    }

    /// Move focus to the next pane of the active tab, wrapping around
    pub fn focus_next_pane(&mut self) -> Option<PaneId> {
        self.tab_manager.navigate(1)
    }

    /// Focus a pane, switching to its tab if needed
    pub fn focus_pane(&mut self, pane_id: PaneId) -> bool {
        self.tab_manager.focus_pane(pane_id)
    }

    /// Change the font size of every pane.
    ///
    /// A positive `direction` grows the font by one point, a negative one
    /// shrinks it (never below the minimum), zero resets it to the built-in
    /// default size.
    pub fn zoom(&mut self, direction: i32) {
        let current = self.surface_options.font_size;
        let size = match direction.signum() {
            1 => current.saturating_add(1),
            -1 => current.saturating_sub(1).max(MIN_FONT_SIZE),
            _ => defaults::font_size(),
        };
        self.surface_options.font_size = size;

        let family = self.surface_options.font_family.clone();
        for tab in self.tab_manager.tabs_mut() {
            for pane in tab.pane_manager.all_panes_mut() {
                pane.surface_mut().apply_font(&family, size);
            }
        }
        crate::debug_info!("ZOOM", "Font size {} -> {}", current, size);
    }
}
