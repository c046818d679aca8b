//! Shared identifiers and enums for the pane system.

use serde::{Deserialize, Serialize};

/// Unique identifier for a pane, unique across every tab of a window
pub type PaneId = u64;

/// Unique identifier for a split node
pub type SplitId = u64;

/// Orientation of a split.
///
/// Named after the layout direction of the two children, not the divider:
/// a horizontal split places its children side by side with a vertical
/// divider between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Orientation {
    /// Children side by side (first = left, second = right)
    Horizontal,
    /// Children stacked (first = top, second = bottom)
    #[default]
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Anything other than "horizontal" reads as vertical.
impl From<String> for Orientation {
    fn from(value: String) -> Self {
        if value == "horizontal" {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl From<Orientation> for String {
    fn from(value: Orientation) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
