//! Session restore at startup, session save at close, and the layout pass.

use super::spawner::SurfaceSpawner;
use super::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WindowState};
use crate::pane::{PaneBounds, PaneManager};
use crate::session::SessionDocument;
use crate::session::capture::capture_session;
use crate::session::restore::restore_pane_node;
use crate::session::storage::{save_session_to, take_session_from};
use std::path::Path;

impl WindowState {
    /// Populate the window from the session file, or with one default tab.
    ///
    /// The session file is consumed whether or not it parses. If no tab can
    /// be created at all the window asks to be closed.
    pub fn restore_or_init(&mut self, session_path: &Path) {
        match take_session_from(session_path) {
            Ok(Some(doc)) => {
                self.restore_session(&doc);
            }
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring session file {:?}: {}", session_path, e),
        }

        if self.tab_manager.tab_count() == 0 {
            self.new_tab();
        }
        if self.tab_manager.tab_count() == 0 {
            log::error!("Could not create any terminal; closing window");
            self.request_close();
        }
    }

    /// Rebuild tabs from a session document. Returns the number of tabs
    /// restored.
    ///
    /// Tabs whose tree restores to nothing are skipped. Window geometry is
    /// applied only when the document has tabs.
    pub fn restore_session(&mut self, doc: &SessionDocument) -> usize {
        if doc.tabs.is_empty() {
            return 0;
        }
        self.window_width = if doc.window_width > 0 {
            doc.window_width
        } else {
            DEFAULT_WINDOW_WIDTH
        };
        self.window_height = if doc.window_height > 0 {
            doc.window_height
        } else {
            DEFAULT_WINDOW_HEIGHT
        };

        let mut restored = 0;
        for (index, tab_doc) in doc.tabs.iter().enumerate() {
            let mut spawner = SurfaceSpawner {
                factory: self.factory.as_ref(),
                options: &self.surface_options,
                ids: &mut self.ids,
            };
            let Some(root) = restore_pane_node(tab_doc, 0, &mut spawner, &mut self.layout) else {
                log::warn!("Session restore: tab {} restored to nothing, skipping", index);
                continue;
            };
            self.tab_manager.add_tab(PaneManager::from_root(root));
            restored += 1;
        }

        log::info!(
            "Restored {} of {} tabs ({}x{})",
            restored,
            doc.tabs.len(),
            self.window_width,
            self.window_height
        );
        restored
    }

    /// Capture the current window geometry and every tab
    pub fn snapshot_session(&self) -> SessionDocument {
        capture_session(&self.tab_manager, self.window_width, self.window_height)
    }

    /// The user asked to close the window: save the session and stop
    /// reacting to pane closes. A failed save is logged.
    pub fn on_close_requested(&mut self, session_path: &Path) {
        self.is_closing = true;
        let doc = self.snapshot_session();
        if let Err(e) = save_session_to(&doc, session_path) {
            log::error!("Failed to save session: {:#}", e);
        }
    }

    /// Run the queued divider assignments against the laid-out content
    /// area. The host calls this once the pane widgets have their size.
    pub fn run_deferred_layout(&mut self, bounds: PaneBounds) -> usize {
        let roots = self
            .tab_manager
            .tabs_mut()
            .iter_mut()
            .filter_map(|tab| tab.pane_manager.root_mut());
        self.layout.run(roots, bounds)
    }
}
