//! Per-window state
//!
//! `WindowState` owns everything one terminal window needs: the tab set with
//! its pane trees, the keymap, the pending layout work and the surface
//! factory used to spawn new panes. The host (the toolkit event loop) feeds
//! it key and surface events and drains its [`WindowRequest`]s.

use super::search::SearchState;
use super::spawner::{IdAllocator, SurfaceSpawner};
use super::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WindowRequest};
use crate::pane::LayoutQueue;
use crate::surface::{SurfaceFactory, SurfaceOptions};
use crate::tab::TabManager;
use z4term_config::Config;
use z4term_keybindings::Keymap;

pub struct WindowState {
    pub(crate) config: Config,
    pub(crate) keymap: Keymap,
    pub(crate) tab_manager: TabManager,
    /// Divider assignments waiting for the next layout pass
    pub(crate) layout: LayoutQueue,
    pub(crate) ids: IdAllocator,
    pub(crate) factory: Box<dyn SurfaceFactory>,
    /// Options for new surfaces; `font_size` tracks the current zoom
    pub(crate) surface_options: SurfaceOptions,
    pub(crate) search: SearchState,
    pub(crate) window_width: i32,
    pub(crate) window_height: i32,
    /// Set once the window is being torn down; later closes are ignored
    pub(crate) is_closing: bool,
    pub(crate) requests: Vec<WindowRequest>,
}

impl WindowState {
    /// Create an empty window. Call [`WindowState::restore_or_init`] to
    /// populate it.
    pub fn new(config: Config, factory: Box<dyn SurfaceFactory>) -> Self {
        let keymap = Keymap::from_config(&config.keybindings);
        for (binding, err) in keymap.dropped() {
            log::debug!(
                "Dropped keybinding {:?} for '{}': {}",
                binding.key,
                binding.action,
                err
            );
        }
        let surface_options = SurfaceOptions::from_config(&config);

        Self {
            config,
            keymap,
            tab_manager: TabManager::new(),
            layout: LayoutQueue::new(),
            ids: IdAllocator::new(),
            factory,
            surface_options,
            search: SearchState::default(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            is_closing: false,
            requests: Vec::new(),
        }
    }

    pub(crate) fn spawner(&mut self) -> (SurfaceSpawner<'_>, &mut TabManager) {
        (
            SurfaceSpawner {
                factory: self.factory.as_ref(),
                options: &self.surface_options,
                ids: &mut self.ids,
            },
            &mut self.tab_manager,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn tab_manager(&self) -> &TabManager {
        &self.tab_manager
    }

    pub fn tab_manager_mut(&mut self) -> &mut TabManager {
        &mut self.tab_manager
    }

    /// Current font size including zoom
    pub fn font_size(&self) -> u32 {
        self.surface_options.font_size
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn window_size(&self) -> (i32, i32) {
        (self.window_width, self.window_height)
    }

    /// Record the window's allocated size
    pub fn set_window_size(&mut self, width: i32, height: i32) {
        self.window_width = width;
        self.window_height = height;
    }

    pub fn is_closing(&self) -> bool {
        self.is_closing
    }

    /// The tab bar is shown only when there is more than one tab
    pub fn tab_bar_visible(&self) -> bool {
        self.tab_manager.has_multiple_tabs()
    }

    /// Number of layout tasks waiting for the next layout pass
    pub fn pending_layout(&self) -> usize {
        self.layout.len()
    }

    /// Drain the requests raised since the last call
    pub fn take_requests(&mut self) -> Vec<WindowRequest> {
        std::mem::take(&mut self.requests)
    }

    pub(crate) fn request(&mut self, request: WindowRequest) {
        crate::debug_info!("WINDOW", "Request {:?}", request);
        self.requests.push(request);
    }

    /// Mark the window as closing and ask the host to destroy it
    pub(crate) fn request_close(&mut self) {
        if self.is_closing {
            return;
        }
        self.is_closing = true;
        self.request(WindowRequest::Close);
    }
}
