//! Shared integration test helpers for z4term.
//!
//! Provides a fake terminal surface whose state stays observable after it
//! has been handed to a pane, a factory that spawns them, and shorthands for
//! building windows and key events.
//!
//! ```ignore
//! mod common;
//! use common::{FakeFactory, window};
//! ```

#![allow(dead_code)]

use regex::Regex;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use z4term::app::WindowState;
use z4term::config::Config;
use z4term::keybindings::{KeyEvent, KeySym, Modifiers};
use z4term::pane::{Pane, PaneId, PaneSpawner, SplitId};
use z4term::surface::{SurfaceFactory, SurfaceOptions, TerminalSurface};

/// Everything a fake surface was asked to do
#[derive(Debug, Default)]
pub struct SurfaceState {
    pub cwd: Option<String>,
    pub title: Option<String>,
    pub has_selection: bool,
    pub copies: usize,
    pub pastes: usize,
    pub focus_grabs: usize,
    pub font: Option<(String, u32)>,
    pub pattern: Option<String>,
    pub search_steps: Vec<&'static str>,
}

pub type SharedState = Rc<RefCell<SurfaceState>>;

pub struct FakeSurface {
    state: SharedState,
}

impl FakeSurface {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

impl TerminalSurface for FakeSurface {
    fn current_dir(&self) -> Option<String> {
        self.state.borrow().cwd.clone()
    }

    fn title(&self) -> Option<String> {
        self.state.borrow().title.clone()
    }

    fn has_selection(&self) -> bool {
        self.state.borrow().has_selection
    }

    fn copy_selection(&mut self) {
        self.state.borrow_mut().copies += 1;
    }

    fn paste_clipboard(&mut self) {
        self.state.borrow_mut().pastes += 1;
    }

    fn grab_focus(&mut self) {
        self.state.borrow_mut().focus_grabs += 1;
    }

    fn apply_font(&mut self, family: &str, size: u32) {
        self.state.borrow_mut().font = Some((family.to_string(), size));
    }

    fn set_search_pattern(&mut self, pattern: Option<&Regex>) {
        self.state.borrow_mut().pattern = pattern.map(|p| p.as_str().to_string());
    }

    fn search_next(&mut self) -> bool {
        self.state.borrow_mut().search_steps.push("next");
        true
    }

    fn search_previous(&mut self) -> bool {
        self.state.borrow_mut().search_steps.push("previous");
        true
    }
}

#[derive(Default)]
pub struct FactoryState {
    /// Every surface spawned, in spawn order
    pub surfaces: Vec<SharedState>,
    /// The cwd requested by every spawn, failed ones included
    pub requested_cwds: Vec<Option<String>>,
    pub fail: bool,
}

/// Surface factory handing out [`FakeSurface`]s; clones share state
#[derive(Clone, Default)]
pub struct FakeFactory {
    pub state: Rc<RefCell<FactoryState>>,
}

impl FakeFactory {
    /// State of the `n`th spawned surface (0-based)
    pub fn surface(&self, n: usize) -> SharedState {
        Rc::clone(&self.state.borrow().surfaces[n])
    }

    pub fn spawned(&self) -> usize {
        self.state.borrow().surfaces.len()
    }

    pub fn set_fail(&self, fail: bool) {
        self.state.borrow_mut().fail = fail;
    }
}

impl SurfaceFactory for FakeFactory {
    fn spawn(
        &self,
        cwd: Option<&str>,
        _options: &SurfaceOptions,
    ) -> anyhow::Result<Box<dyn TerminalSurface>> {
        let mut state = self.state.borrow_mut();
        state.requested_cwds.push(cwd.map(str::to_string));
        if state.fail {
            anyhow::bail!("spawn refused");
        }
        let surface = Rc::new(RefCell::new(SurfaceState {
            cwd: cwd.map(str::to_string),
            ..Default::default()
        }));
        state.surfaces.push(Rc::clone(&surface));
        Ok(Box::new(FakeSurface::new(surface)))
    }
}

/// Pane spawner for driving pane trees directly; IDs start at 1
#[derive(Default)]
pub struct TestSpawner {
    next_pane: PaneId,
    next_split: SplitId,
    pub states: Vec<SharedState>,
}

impl PaneSpawner for TestSpawner {
    fn spawn_pane(&mut self, cwd: Option<&str>) -> Option<Pane> {
        self.next_pane += 1;
        let state = Rc::new(RefCell::new(SurfaceState {
            cwd: cwd.map(str::to_string),
            ..Default::default()
        }));
        self.states.push(Rc::clone(&state));
        Some(Pane::new(
            self.next_pane,
            Box::new(FakeSurface::new(state)),
            cwd.map(str::to_string),
        ))
    }

    fn next_split_id(&mut self) -> SplitId {
        self.next_split += 1;
        self.next_split
    }
}

/// A window with default config, populated from `session_path`
pub fn window(factory: &FakeFactory, session_path: &Path) -> WindowState {
    window_with_config(Config::default(), factory, session_path)
}

pub fn window_with_config(config: Config, factory: &FakeFactory, session_path: &Path) -> WindowState {
    let mut window = WindowState::new(config, Box::new(factory.clone()));
    window.restore_or_init(session_path);
    window
}

/// A character key event
pub fn key(c: char, modifiers: Modifiers) -> KeyEvent {
    KeyEvent::new(KeySym::Character(c), modifiers)
}
