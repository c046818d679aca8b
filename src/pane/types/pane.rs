//! `Pane`: one terminal surface plus the state the window keeps about it.

use super::common::PaneId;
use crate::surface::TerminalSurface;
use std::time::{Duration, Instant};

/// A single terminal pane (a leaf of the pane tree)
pub struct Pane {
    /// Unique identifier for this pane
    pub id: PaneId,
    /// The terminal surface this pane owns
    surface: Box<dyn TerminalSurface>,
    /// Directory the surface was spawned in; used when the live cwd cannot be read
    cwd_hint: Option<String>,
    /// When the pane last lost focus; `None` while focused or never focused
    unfocused_since: Option<Instant>,
}

impl Pane {
    pub fn new(id: PaneId, surface: Box<dyn TerminalSurface>, cwd_hint: Option<String>) -> Self {
        Self {
            id,
            surface,
            cwd_hint,
            unfocused_since: None,
        }
    }

    pub fn surface(&self) -> &dyn TerminalSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn TerminalSurface {
        self.surface.as_mut()
    }

    /// Best-effort working directory: live value from the surface, else the
    /// directory the pane was spawned in.
    pub fn get_cwd(&self) -> Option<String> {
        self.surface.current_dir().or_else(|| self.cwd_hint.clone())
    }

    pub fn cwd_hint(&self) -> Option<&str> {
        self.cwd_hint.as_deref()
    }

    /// Record that the pane gained focus
    pub fn mark_focused(&mut self) {
        self.unfocused_since = None;
    }

    /// Record that the pane lost focus at `now`
    pub fn mark_unfocused(&mut self, now: Instant) {
        self.unfocused_since = Some(now);
    }

    /// How long the pane has been unfocused, if it is unfocused
    pub fn unfocused_for(&self, now: Instant) -> Option<Duration> {
        self.unfocused_since
            .map(|since| now.saturating_duration_since(since))
    }
}

impl std::fmt::Debug for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pane")
            .field("id", &self.id)
            .field("cwd_hint", &self.cwd_hint)
            .field("unfocused_since", &self.unfocused_since)
            .finish_non_exhaustive()
    }
}
