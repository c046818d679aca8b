//! Surface notifications: titles, bell, activity, focus and child exit.

use super::{WindowRequest, WindowState};
use crate::pane::PaneId;
use crate::surface::SurfaceEvent;
use std::time::{Duration, Instant};

const BELL_NOTIFICATION_TITLE: &str = "Command finished";
const BELL_NOTIFICATION_BODY: &str = "A background terminal rang the bell.";

impl WindowState {
    /// Handle a notification raised by the surface of `pane_id` at `now`
    pub fn handle_surface_event(&mut self, pane_id: PaneId, event: SurfaceEvent, now: Instant) {
        crate::debug_trace!("SURFACE", "Pane {}: {:?}", pane_id, event);
        match event {
            SurfaceEvent::TitleChanged(title) => {
                if title.is_empty() {
                    return;
                }
                if let Some(tab_id) = self.tab_manager.tab_for_pane(pane_id)
                    && let Some(tab) = self.tab_manager.get_tab_mut(tab_id)
                {
                    tab.set_title(&title);
                }
            }
            SurfaceEvent::Bell => self.on_bell(pane_id, now),
            SurfaceEvent::ContentsChanged => {
                if !self.is_focused(pane_id) {
                    self.mark_pane_activity(pane_id);
                }
            }
            SurfaceEvent::FocusIn => {
                if let Some(previous) = self.tab_manager.focused_pane_id()
                    && previous != pane_id
                    && let Some(pane) = self.tab_manager.find_pane_mut(previous)
                {
                    pane.mark_unfocused(now);
                }
                if let Some(pane) = self.tab_manager.find_pane_mut(pane_id) {
                    pane.mark_focused();
                }
                self.tab_manager.record_focus(pane_id);
            }
            SurfaceEvent::FocusOut => {
                if let Some(pane) = self.tab_manager.find_pane_mut(pane_id) {
                    pane.mark_unfocused(now);
                }
            }
            SurfaceEvent::ChildExited(status) => {
                log::info!("Shell of pane {} exited with status {}", pane_id, status);
                self.close_pane(pane_id);
            }
        }
    }

    fn on_bell(&mut self, pane_id: PaneId, now: Instant) {
        if self.is_focused(pane_id) {
            return;
        }
        self.mark_pane_activity(pane_id);

        let threshold = Duration::from_secs(self.config.notification_threshold);
        let unfocused_for = self
            .tab_manager
            .find_pane_mut(pane_id)
            .and_then(|p| p.unfocused_for(now));
        if unfocused_for.is_some_and(|elapsed| elapsed >= threshold) {
            self.request(WindowRequest::Notify {
                title: BELL_NOTIFICATION_TITLE.to_string(),
                body: BELL_NOTIFICATION_BODY.to_string(),
            });
        }
    }

    fn is_focused(&self, pane_id: PaneId) -> bool {
        self.tab_manager.focused_pane_id() == Some(pane_id)
    }

    fn mark_pane_activity(&mut self, pane_id: PaneId) {
        if let Some(tab_id) = self.tab_manager.tab_for_pane(pane_id) {
            self.tab_manager.mark_activity(tab_id);
        }
    }

    /// Label tabs whose first pane has no program title with the basename
    /// of that pane's working directory. Returns the number of labels
    /// changed. The host calls this periodically.
    pub fn poll_tab_titles(&mut self) -> usize {
        self.tab_manager
            .tabs_mut()
            .iter_mut()
            .map(|tab| tab.refresh_title_from_cwd())
            .filter(|changed| *changed)
            .count()
    }
}
