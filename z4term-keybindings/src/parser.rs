//! Trigger parser.
//!
//! Parses human-readable binding strings like "Ctrl+Shift+D" into a
//! normalized [`Trigger`]: a key symbol plus a modifier bitmask.
//!
//! Key tokens are resolved against a case-sensitive key-symbol namespace
//! (`Page_Down`, `plus`, `Tab`, single characters, ...). A token is tried
//! verbatim, then lowercased, then uppercased, then capitalized; the first
//! spelling that resolves wins.

use bitflags::bitflags;
use std::fmt;
use thiserror::Error;
use winit::keyboard::NamedKey;

/// Error type for binding strings that cannot become a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty key combination")]
    Empty,
    #[error("No resolvable key in '{0}'")]
    NoKey(String),
}

bitflags! {
    /// Modifier keys held for a trigger. Bits are independent and
    /// order-insensitive.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const CTRL  = 0b0001;
        const SHIFT = 0b0010;
        const ALT   = 0b0100;
        const SUPER = 0b1000;
    }
}

impl Modifiers {
    /// The bits compared when matching key events. Super is not tracked,
    /// so a trigger that names it never matches an event.
    pub const TRACKED: Modifiers = Modifiers::CTRL.union(Modifiers::SHIFT).union(Modifiers::ALT);

    /// Map a modifier token (`ctrl`, `shift`, `alt`, `super`, any case) to its bit
    pub fn from_token(token: &str) -> Option<Modifiers> {
        match token.to_lowercase().as_str() {
            "ctrl" => Some(Modifiers::CTRL),
            "shift" => Some(Modifiers::SHIFT),
            "alt" => Some(Modifiers::ALT),
            "super" => Some(Modifiers::SUPER),
            _ => None,
        }
    }
}

/// A resolved key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySym {
    /// A character key (e.g., 'd', 'D', '+', '0'); case is significant
    Character(char),
    /// A named key (e.g., Tab, PageDown, F5)
    Named(NamedKey),
}

impl KeySym {
    /// Lower-case form of a character key; other keys map to themselves
    pub fn to_lower(self) -> KeySym {
        match self {
            KeySym::Character(c) => KeySym::Character(single_char(c.to_lowercase()).unwrap_or(c)),
            named => named,
        }
    }

    /// Upper-case form of a character key; other keys map to themselves
    pub fn to_upper(self) -> KeySym {
        match self {
            KeySym::Character(c) => KeySym::Character(single_char(c.to_uppercase()).unwrap_or(c)),
            named => named,
        }
    }

    /// True when the key has distinct upper and lower case forms
    pub fn has_case(self) -> bool {
        self.to_lower() != self.to_upper()
    }
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

impl fmt::Display for KeySym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySym::Character(c) => match name_for_char(*c) {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "{}", c),
            },
            KeySym::Named(named) => match name_for_named(*named) {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "{:?}", named),
            },
        }
    }
}

/// A parsed, normalized trigger (key + modifier mask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trigger {
    pub key: KeySym,
    pub modifiers: Modifiers,
}

impl Trigger {
    pub fn new(key: KeySym, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(Modifiers::CTRL) {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.contains(Modifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.modifiers.contains(Modifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.modifiers.contains(Modifiers::SUPER) {
            parts.push("Super".to_string());
        }
        parts.push(self.key.to_string());

        write!(f, "{}", parts.join("+"))
    }
}

/// Parse a binding string into a Trigger.
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Tokens are split on `+` and trimmed. Modifier tokens set one bit each.
/// Every other token is resolved as a key; a token that does not resolve is
/// ignored and, when several resolve, the last one wins.
pub fn parse_trigger(s: &str) -> Result<Trigger, ParseError> {
    if s.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut modifiers = Modifiers::empty();
    let mut key = None;

    for part in s.split('+').map(str::trim) {
        if let Some(bit) = Modifiers::from_token(part) {
            modifiers |= bit;
        } else if let Some(sym) = resolve_key_token(part) {
            key = Some(sym);
        }
    }

    let key = key.ok_or_else(|| ParseError::NoKey(s.to_string()))?;
    Ok(Trigger { key, modifiers })
}

/// Resolve a key token trying, in order: verbatim, lowercase, uppercase,
/// capitalized.
pub fn resolve_key_token(token: &str) -> Option<KeySym> {
    if token.is_empty() {
        return None;
    }
    [
        token.to_string(),
        token.to_lowercase(),
        token.to_uppercase(),
        capitalize(token),
    ]
    .iter()
    .find_map(|name| keysym_from_name(name))
}

/// First character uppercased, the rest lowercased
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Case-sensitive lookup in the key-symbol namespace.
pub fn keysym_from_name(name: &str) -> Option<KeySym> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && !c.is_whitespace()
        && !c.is_control()
    {
        return Some(KeySym::Character(c));
    }

    if let Some(c) = char_for_name(name) {
        return Some(KeySym::Character(c));
    }
    named_for_name(name).map(KeySym::Named)
}

const CHAR_NAMES: [(&str, char); 22] = [
    ("plus", '+'),
    ("minus", '-'),
    ("equal", '='),
    ("comma", ','),
    ("period", '.'),
    ("slash", '/'),
    ("backslash", '\\'),
    ("semicolon", ';'),
    ("colon", ':'),
    ("apostrophe", '\''),
    ("quotedbl", '"'),
    ("grave", '`'),
    ("asciitilde", '~'),
    ("exclam", '!'),
    ("at", '@'),
    ("numbersign", '#'),
    ("dollar", '$'),
    ("percent", '%'),
    ("underscore", '_'),
    ("bracketleft", '['),
    ("bracketright", ']'),
    ("question", '?'),
];

fn char_for_name(name: &str) -> Option<char> {
    CHAR_NAMES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

fn name_for_char(c: char) -> Option<&'static str> {
    CHAR_NAMES.iter().find(|(_, ch)| *ch == c).map(|(n, _)| *n)
}

const NAMED_KEYS: [(&str, NamedKey); 31] = [
    ("Tab", NamedKey::Tab),
    ("Return", NamedKey::Enter),
    ("Escape", NamedKey::Escape),
    ("space", NamedKey::Space),
    ("BackSpace", NamedKey::Backspace),
    ("Delete", NamedKey::Delete),
    ("Insert", NamedKey::Insert),
    ("Home", NamedKey::Home),
    ("End", NamedKey::End),
    ("Page_Up", NamedKey::PageUp),
    ("Page_Down", NamedKey::PageDown),
    ("Prior", NamedKey::PageUp),
    ("Next", NamedKey::PageDown),
    ("Up", NamedKey::ArrowUp),
    ("Down", NamedKey::ArrowDown),
    ("Left", NamedKey::ArrowLeft),
    ("Right", NamedKey::ArrowRight),
    ("F1", NamedKey::F1),
    ("F2", NamedKey::F2),
    ("F3", NamedKey::F3),
    ("F4", NamedKey::F4),
    ("F5", NamedKey::F5),
    ("F6", NamedKey::F6),
    ("F7", NamedKey::F7),
    ("F8", NamedKey::F8),
    ("F9", NamedKey::F9),
    ("F10", NamedKey::F10),
    ("F11", NamedKey::F11),
    ("F12", NamedKey::F12),
    ("Menu", NamedKey::ContextMenu),
    ("Print", NamedKey::PrintScreen),
];

fn named_for_name(name: &str) -> Option<NamedKey> {
    NAMED_KEYS.iter().find(|(n, _)| *n == name).map(|(_, k)| *k)
}

fn name_for_named(key: NamedKey) -> Option<&'static str> {
    NAMED_KEYS.iter().find(|(_, k)| *k == key).map(|(n, _)| *n)
}
