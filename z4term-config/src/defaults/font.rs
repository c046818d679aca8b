//! Default values for font settings.

/// Smallest font size reachable through zoom out
pub const MIN_FONT_SIZE: u32 = 6;

pub fn font_size() -> u32 {
    12
}

pub fn font_family() -> String {
    "Monospace".to_string()
}
