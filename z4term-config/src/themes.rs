/// Color theme definitions for the terminal
use serde::{Deserialize, Serialize};

/// A color in RGB format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Format as `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Terminal color theme with foreground/background/cursor and the 16 ANSI colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub foreground: Color,
    pub background: Color,
    pub cursor: Color,
    pub palette: [Color; 16],
}

const fn palette(rgb: [u32; 16]) -> [Color; 16] {
    let mut out = [Color::new(0, 0, 0); 16];
    let mut i = 0;
    while i < 16 {
        out[i] = Color::from_rgb(rgb[i]);
        i += 1;
    }
    out
}

const THEMES: [Theme; 5] = [
    Theme {
        name: "tango-dark",
        foreground: Color::from_rgb(0xd0cfcc),
        background: Color::from_rgb(0x1e1e2e),
        cursor: Color::from_rgb(0xf0f0f0),
        palette: palette([
            0x171421, 0xc01c28, 0x26a269, 0xa2734c, 0x12488b, 0xa347ba, 0x2aa1b3, 0xd0cfcc,
            0x5e5c64, 0xf66151, 0x33d17a, 0xe9ad0c, 0x2a7bde, 0xc061cb, 0x33c7de, 0xffffff,
        ]),
    },
    Theme {
        name: "catppuccin-mocha",
        foreground: Color::from_rgb(0xcdd6f4),
        background: Color::from_rgb(0x1e1e2e),
        cursor: Color::from_rgb(0xf5e0dc),
        palette: palette([
            0x45475a, 0xf38ba8, 0xa6e3a1, 0xf9e2af, 0x89b4fa, 0xf5c2e7, 0x94e2d5, 0xbac2de,
            0x585b70, 0xf38ba8, 0xa6e3a1, 0xf9e2af, 0x89b4fa, 0xf5c2e7, 0x94e2d5, 0xa6adc8,
        ]),
    },
    Theme {
        name: "dracula",
        foreground: Color::from_rgb(0xf8f8f2),
        background: Color::from_rgb(0x282a36),
        cursor: Color::from_rgb(0xf8f8f2),
        palette: palette([
            0x21222c, 0xff5555, 0x50fa7b, 0xf1fa8c, 0xbd93f9, 0xff79c6, 0x8be9fd, 0xf8f8f2,
            0x6272a4, 0xff6e6e, 0x69ff94, 0xffffa5, 0xd6acff, 0xff92df, 0xa4ffff, 0xffffff,
        ]),
    },
    Theme {
        name: "solarized-dark",
        foreground: Color::from_rgb(0x839496),
        background: Color::from_rgb(0x002b36),
        cursor: Color::from_rgb(0x93a1a1),
        palette: palette([
            0x073642, 0xdc322f, 0x859900, 0xb58900, 0x268bd2, 0xd33682, 0x2aa198, 0xeee8d5,
            0x002b36, 0xcb4b16, 0x586e75, 0x657b83, 0x839496, 0x6c71c4, 0x93a1a1, 0xfdf6e3,
        ]),
    },
    Theme {
        name: "gruvbox-dark",
        foreground: Color::from_rgb(0xebdbb2),
        background: Color::from_rgb(0x282828),
        cursor: Color::from_rgb(0xebdbb2),
        palette: palette([
            0x282828, 0xcc241d, 0x98971a, 0xd79921, 0x458588, 0xb16286, 0x689d6a, 0xa89984,
            0x928374, 0xfb4934, 0xb8bb26, 0xfabd2f, 0x83a598, 0xd3869b, 0x8ec07c, 0xebdbb2,
        ]),
    },
];

impl Theme {
    /// Look up a built-in theme by its config name
    pub fn by_name(name: &str) -> Option<Theme> {
        THEMES.iter().find(|t| t.name == name).cloned()
    }

    /// Names of all built-in themes
    pub fn available_themes() -> Vec<&'static str> {
        THEMES.iter().map(|t| t.name).collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[0].clone()
    }
}
