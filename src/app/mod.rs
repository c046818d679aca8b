//! Window state and action dispatch
//!
//! ## Sub-module layout
//!
//! | File | Contents |
//! |------|----------|
//! | `window_state.rs` | `WindowState` definition, constructor and queries |
//! | `spawner.rs` | `IdAllocator` and the `PaneSpawner` over a surface factory |
//! | `keyboard.rs` | Key resolution: keymap, then smart Ctrl+C / Ctrl+V |
//! | `keybinding_actions.rs` | Action name to window operation dispatch |
//! | `pane_ops.rs` | Split, close, navigate, tabs, zoom |
//! | `search.rs` | Search bar state and pattern handling |
//! | `surface_events.rs` | Title, bell, activity, focus and child-exit handling |
//! | `session_ops.rs` | Startup restore, close-time save, deferred layout |

mod keybinding_actions;
mod keyboard;
mod pane_ops;
mod search;
mod session_ops;
mod spawner;
mod surface_events;
mod window_state;

pub use keyboard::KeyResolution;
pub use search::SearchState;
pub use spawner::IdAllocator;
pub use window_state::WindowState;

/// Window size used when there is no saved session
pub const DEFAULT_WINDOW_WIDTH: i32 = 960;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 640;

/// Requests a window hands to its host; drained with
/// [`WindowState::take_requests`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowRequest {
    /// Open another window with the same configuration
    NewWindow,
    /// Destroy this window
    Close,
    /// Show a desktop notification
    Notify { title: String, body: String },
}
