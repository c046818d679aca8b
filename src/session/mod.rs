//! Session state types for save/restore on startup
//!
//! At window close the tab set is captured into a [`SessionDocument`] and
//! written as JSON; at the next startup the document is read, deleted, and
//! rebuilt into tabs. The file is consumed exactly once.
//!
//! Reading is lenient: a node that is not an object, lacks a string `type`,
//! or carries an ill-typed `orientation` decodes as [`SessionPaneNode::Unknown`]
//! and is dropped on restore without affecting its siblings or other tabs.

pub mod capture;
pub mod restore;
pub mod storage;

use crate::pane::Orientation;
use restore::MAX_RESTORE_DEPTH;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors reading or writing the session file
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("session file is not a valid session document: {0}")]
    Malformed(&'static str),
}

/// Snapshot of one window: its size and one pane tree per tab, in tab order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDocument {
    pub window_width: i32,
    pub window_height: i32,
    pub tabs: Vec<SessionPaneNode>,
}

impl SessionDocument {
    /// Decode a session file.
    ///
    /// Only invalid JSON or a top level that is not an object fails; every
    /// problem below that is confined to the node it occurs in.
    pub fn from_json(contents: &str) -> Result<Self, SessionError> {
        let mut de = serde_json::Deserializer::from_str(contents);
        de.disable_recursion_limit();
        let value = Value::deserialize(&mut de)?;
        de.end()?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, SessionError> {
        let Some(obj) = value.as_object() else {
            return Err(SessionError::Malformed("top level is not an object"));
        };

        let tabs = match obj.get("tabs") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| SessionPaneNode::from_value(item, 0))
                .collect(),
            None | Some(Value::Null) => Vec::new(),
            Some(_) => {
                log::warn!("Session document: 'tabs' is not a list, ignoring it");
                Vec::new()
            }
        };

        Ok(Self {
            window_width: int_field(obj, "window_width").unwrap_or(0),
            window_height: int_field(obj, "window_height").unwrap_or(0),
            tabs,
        })
    }
}

/// Recursive pane tree node for session persistence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SessionPaneNode {
    /// A terminal pane leaf
    Terminal { cwd: Option<String> },
    /// A split containing two children
    Paned {
        orientation: Orientation,
        /// Divider position in pixels
        position: Option<i32>,
        /// First child (left/top)
        child1: Option<Box<SessionPaneNode>>,
        /// Second child (right/bottom)
        child2: Option<Box<SessionPaneNode>>,
    },
    /// A node that could not be decoded; restores to nothing
    Unknown,
}

impl SessionPaneNode {
    /// Decode one node found `depth` levels below a tab root.
    ///
    /// Nodes past [`MAX_RESTORE_DEPTH`] are not descended into. A missing
    /// `orientation` reads as vertical and a missing or non-integer
    /// `position` leaves the split to be bisected.
    pub fn from_value(value: &Value, depth: usize) -> Self {
        if depth > MAX_RESTORE_DEPTH {
            return SessionPaneNode::Unknown;
        }
        let Some(obj) = value.as_object() else {
            log::warn!("Session document: pane node is not an object");
            return SessionPaneNode::Unknown;
        };

        match obj.get("type").and_then(Value::as_str) {
            Some("terminal") => SessionPaneNode::Terminal {
                cwd: obj.get("cwd").and_then(Value::as_str).map(str::to_string),
            },
            Some("paned") => {
                let orientation = match obj.get("orientation") {
                    None | Some(Value::Null) => Orientation::default(),
                    Some(Value::String(name)) => Orientation::from(name.clone()),
                    Some(_) => {
                        log::warn!("Session document: split orientation is not a string");
                        return SessionPaneNode::Unknown;
                    }
                };
                let child = |key: &str| match obj.get(key) {
                    None | Some(Value::Null) => None,
                    Some(child) => Some(Box::new(Self::from_value(child, depth + 1))),
                };
                SessionPaneNode::Paned {
                    orientation,
                    position: int_field(obj, "position"),
                    child1: child("child1"),
                    child2: child("child2"),
                }
            }
            _ => SessionPaneNode::Unknown,
        }
    }

    /// Number of terminal leaves in this subtree
    pub fn terminal_count(&self) -> usize {
        match self {
            SessionPaneNode::Terminal { .. } => 1,
            SessionPaneNode::Paned { child1, child2, .. } => {
                child1.as_ref().map_or(0, |c| c.terminal_count())
                    + child2.as_ref().map_or(0, |c| c.terminal_count())
            }
            SessionPaneNode::Unknown => 0,
        }
    }
}

fn int_field(obj: &Map<String, Value>, key: &str) -> Option<i32> {
    obj.get(key)
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
}
