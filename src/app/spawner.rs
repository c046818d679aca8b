//! Pane and split identity allocation, and pane spawning over a surface factory

use crate::pane::{Pane, PaneId, PaneSpawner, SplitId};
use crate::surface::{SurfaceFactory, SurfaceOptions};

/// Monotonic counters for pane and split identities within one window
#[derive(Debug, Default)]
pub struct IdAllocator {
    next_pane_id: PaneId,
    next_split_id: SplitId,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_pane_id(&mut self) -> PaneId {
        self.next_pane_id += 1;
        self.next_pane_id
    }

    pub fn next_split_id(&mut self) -> SplitId {
        self.next_split_id += 1;
        self.next_split_id
    }
}

/// Spawns panes through the window's surface factory.
///
/// Built from disjoint borrows of window fields, so it can be handed to a
/// tab's pane manager while the tab itself is borrowed mutably.
pub(crate) struct SurfaceSpawner<'a> {
    pub factory: &'a dyn SurfaceFactory,
    pub options: &'a SurfaceOptions,
    pub ids: &'a mut IdAllocator,
}

impl PaneSpawner for SurfaceSpawner<'_> {
    fn spawn_pane(&mut self, cwd: Option<&str>) -> Option<Pane> {
        match self.factory.spawn(cwd, self.options) {
            Ok(surface) => {
                let id = self.ids.next_pane_id();
                crate::debug_info!("PANE", "Spawned pane {} in {:?}", id, cwd);
                Some(Pane::new(id, surface, cwd.map(str::to_string)))
            }
            Err(e) => {
                log::error!("Failed to spawn terminal in {:?}: {:#}", cwd, e);
                None
            }
        }
    }

    fn next_split_id(&mut self) -> SplitId {
        self.ids.next_split_id()
    }
}
