//! Fakes shared by unit tests.

use crate::pane::{Pane, PaneId, PaneNode, PaneSpawner, SplitId};
use crate::surface::TerminalSurface;
use regex::Regex;

/// Surface with a fixed working directory and no-op operations
pub(crate) struct FakeSurface {
    pub cwd: Option<String>,
}

impl TerminalSurface for FakeSurface {
    fn current_dir(&self) -> Option<String> {
        self.cwd.clone()
    }

    fn title(&self) -> Option<String> {
        None
    }

    fn has_selection(&self) -> bool {
        false
    }

    fn copy_selection(&mut self) {}

    fn paste_clipboard(&mut self) {}

    fn grab_focus(&mut self) {}

    fn apply_font(&mut self, _family: &str, _size: u32) {}

    fn set_search_pattern(&mut self, _pattern: Option<&Regex>) {}

    fn search_next(&mut self) -> bool {
        false
    }

    fn search_previous(&mut self) -> bool {
        false
    }
}

/// A leaf holding a fake surface with no working directory
pub(crate) fn leaf(id: PaneId) -> PaneNode {
    PaneNode::leaf(Pane::new(id, Box::new(FakeSurface { cwd: None }), None))
}

/// Spawner handing out sequential IDs starting at 1
#[derive(Default)]
pub(crate) struct FakeSpawner {
    pub(crate) next_pane: PaneId,
    pub(crate) next_split: SplitId,
    /// When set, every spawn fails
    pub fail: bool,
    /// The cwd requested by every successful spawn
    pub spawned_cwds: Vec<Option<String>>,
}

impl PaneSpawner for FakeSpawner {
    fn spawn_pane(&mut self, cwd: Option<&str>) -> Option<Pane> {
        if self.fail {
            return None;
        }
        self.next_pane += 1;
        let cwd = cwd.map(str::to_string);
        self.spawned_cwds.push(cwd.clone());
        Some(Pane::new(
            self.next_pane,
            Box::new(FakeSurface { cwd: cwd.clone() }),
            cwd,
        ))
    }

    fn next_split_id(&mut self) -> SplitId {
        self.next_split += 1;
        self.next_split
    }
}
