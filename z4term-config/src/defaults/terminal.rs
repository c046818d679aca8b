//! Default values for terminal behaviour.

/// Shell used when neither the config nor `$SHELL` names a usable executable
pub const FALLBACK_SHELL: &str = "/bin/bash";

pub const MIN_SCROLLBACK: usize = 100;
pub const MAX_SCROLLBACK: usize = 1_000_000;

pub fn scrollback() -> usize {
    10_000
}

pub fn theme() -> String {
    "tango-dark".to_string()
}

pub fn opacity() -> f32 {
    1.0
}

/// Seconds a pane must stay unfocused before its bell raises a notification
pub fn notification_threshold() -> u64 {
    5
}
