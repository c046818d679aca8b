//! Keybinding action dispatch

use super::{WindowRequest, WindowState};
use crate::pane::Orientation;

impl WindowState {
    /// Run the window operation bound to `action`.
    ///
    /// Returns false for action names the window does not know; the key
    /// event is then left to the terminal.
    pub fn execute_keybinding_action(&mut self, action: &str) -> bool {
        match action {
            "split_vertical" => {
                // Side by side
                self.split(Orientation::Horizontal);
                true
            }
            "split_horizontal" => {
                // Stacked top/bottom
                self.split(Orientation::Vertical);
                true
            }
            "close_pane" => {
                self.close_focused_pane();
                true
            }
            "new_tab" => {
                self.new_tab();
                true
            }
            "new_window" => {
                self.request(WindowRequest::NewWindow);
                log::info!("New window requested via keybinding");
                true
            }
            "next_pane" => {
                self.focus_next_pane();
                true
            }
            "search" => {
                self.toggle_search();
                true
            }
            "zoom_in" => {
                self.zoom(1);
                true
            }
            "zoom_out" => {
                self.zoom(-1);
                true
            }
            "zoom_reset" => {
                self.zoom(0);
                true
            }
            "next_tab" => {
                self.tab_manager.next_tab();
                true
            }
            "prev_tab" => {
                self.tab_manager.prev_tab();
                true
            }
            "copy" => {
                self.copy_selection();
                true
            }
            "paste" => {
                self.paste_clipboard();
                true
            }
            _ => {
                log::debug!("Unknown keybinding action: {}", action);
                false
            }
        }
    }
}
