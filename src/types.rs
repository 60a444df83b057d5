//! Core input types: ModifierMask, KeySym, Keycode, events

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierMask(u8);

impl ModifierMask {
    pub const NONE: ModifierMask = ModifierMask(0);
    pub const ALT: ModifierMask = ModifierMask(0b001);
    pub const CTRL: ModifierMask = ModifierMask(0b010);
    pub const SHIFT: ModifierMask = ModifierMask(0b100);

    /// Check if alt is part of the mask
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Check if ctrl is part of the mask
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Check if shift is part of the mask
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Check if no modifiers are set
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two masks
    #[inline]
    pub const fn union(self, other: ModifierMask) -> ModifierMask {
        ModifierMask(self.0 | other.0)
    }

    /// Check if this mask contains all modifiers in `other`
    #[inline]
    pub const fn contains(self, other: ModifierMask) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Resolve a modifier-combination name to its mask.
    ///
    /// The table covers every permutation spelling users might type
    /// ("CtrlAlt" and "AltCtrl" resolve to the same mask). Unknown or
    /// empty names resolve to `None`.
    pub fn from_name(name: &str) -> Option<ModifierMask> {
        MODIFIER_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, mask)| mask)
    }
}

impl std::ops::BitOr for ModifierMask {
    type Output = ModifierMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for ModifierMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.alt() {
            parts.push("Alt");
        }
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// All 15 permutation spellings of the 7 non-empty subsets of Alt/Ctrl/Shift.
const MODIFIER_TABLE: &[(&str, ModifierMask)] = &[
    ("Alt", ModifierMask::ALT),
    ("Ctrl", ModifierMask::CTRL),
    ("Shift", ModifierMask::SHIFT),
    ("AltCtrl", ModifierMask(0b011)),
    ("CtrlAlt", ModifierMask(0b011)),
    ("ShiftCtrl", ModifierMask(0b110)),
    ("CtrlShift", ModifierMask(0b110)),
    ("AltShift", ModifierMask(0b101)),
    ("ShiftAlt", ModifierMask(0b101)),
    ("AltCtrlShift", ModifierMask(0b111)),
    ("AltShiftCtrl", ModifierMask(0b111)),
    ("CtrlAltShift", ModifierMask(0b111)),
    ("CtrlShiftAlt", ModifierMask(0b111)),
    ("ShiftAltCtrl", ModifierMask(0b111)),
    ("ShiftCtrlAlt", ModifierMask(0b111)),
];

/// A logical key symbol: layout-dependent identifier of a key's meaning
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySym {
    /// A character key
    Char(char),

    // Named keys
    Return,
    Escape,
    Tab,
    BackSpace,
    Delete,
    Space,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    // Function keys
    F(u8), // F1-F24
}

impl KeySym {
    /// Resolve a key name from the embedded vocabulary.
    ///
    /// Single alphanumeric or punctuation characters resolve to
    /// [`KeySym::Char`]; named keys use their X-style names plus a few
    /// common aliases. Unknown names resolve to `None` (the void symbol).
    pub fn from_name(name: &str) -> Option<KeySym> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_alphanumeric() || c.is_ascii_punctuation() {
                return Some(KeySym::Char(c));
            }
            return None;
        }

        // F1-F24
        if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
            if (1..=24).contains(&n) {
                return Some(KeySym::F(n));
            }
        }

        match name {
            "Return" | "Enter" => Some(KeySym::Return),
            "Escape" => Some(KeySym::Escape),
            "Tab" => Some(KeySym::Tab),
            "BackSpace" => Some(KeySym::BackSpace),
            "Delete" => Some(KeySym::Delete),
            "space" | "Space" => Some(KeySym::Space),
            "Up" => Some(KeySym::Up),
            "Down" => Some(KeySym::Down),
            "Left" => Some(KeySym::Left),
            "Right" => Some(KeySym::Right),
            "Home" => Some(KeySym::Home),
            "End" => Some(KeySym::End),
            "Page_Up" | "PageUp" => Some(KeySym::PageUp),
            "Page_Down" | "PageDown" => Some(KeySym::PageDown),
            "Insert" => Some(KeySym::Insert),
            _ => None,
        }
    }

    /// Fold to the lowercase canonical form.
    ///
    /// Character symbols fold to their lowercase counterpart; named keys
    /// are already canonical.
    pub fn to_lowercase(self) -> KeySym {
        match self {
            KeySym::Char(c) => KeySym::Char(c.to_lowercase().next().unwrap_or(c)),
            other => other,
        }
    }
}

impl fmt::Display for KeySym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySym::Char(c) => write!(f, "{}", c),
            KeySym::Return => write!(f, "Return"),
            KeySym::Escape => write!(f, "Escape"),
            KeySym::Tab => write!(f, "Tab"),
            KeySym::BackSpace => write!(f, "BackSpace"),
            KeySym::Delete => write!(f, "Delete"),
            KeySym::Space => write!(f, "space"),
            KeySym::Up => write!(f, "Up"),
            KeySym::Down => write!(f, "Down"),
            KeySym::Left => write!(f, "Left"),
            KeySym::Right => write!(f, "Right"),
            KeySym::Home => write!(f, "Home"),
            KeySym::End => write!(f, "End"),
            KeySym::PageUp => write!(f, "Page_Up"),
            KeySym::PageDown => write!(f, "Page_Down"),
            KeySym::Insert => write!(f, "Insert"),
            KeySym::F(n) => write!(f, "F{}", n),
        }
    }
}

/// A physical key code: layout-independent identifier of a key's position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Keycode(pub u16);

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A normalized key: lowercased logical symbol plus its physical code,
/// resolved once at bind time.
///
/// Both fields are retained because dispatch may be configured to match
/// on either (see [`MatchingPolicy`](crate::MatchingPolicy)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDescriptor {
    pub keysym: KeySym,
    pub keycode: Keycode,
}

/// An incoming key event as delivered by the windowing collaborator
#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    /// Modifiers held when the key was pressed
    pub state: ModifierMask,
    /// Logical symbol under the active layout
    pub keysym: KeySym,
    /// Physical code of the pressed key
    pub keycode: Keycode,
}

/// Mouse event types as a bitmask; dispatch matches on bit intersection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MouseEventType(u32);

impl MouseEventType {
    pub const BUTTON_PRESS: MouseEventType = MouseEventType(0b001);
    pub const DOUBLE_CLICK: MouseEventType = MouseEventType(0b010);
    pub const TRIPLE_CLICK: MouseEventType = MouseEventType(0b100);

    /// Check if any bit is shared with `other`
    #[inline]
    pub const fn intersects(self, other: MouseEventType) -> bool {
        self.0 & other.0 != 0
    }

    /// Combine two event types
    #[inline]
    pub const fn union(self, other: MouseEventType) -> MouseEventType {
        MouseEventType(self.0 | other.0)
    }

    /// Resolve an event name to its type. Unknown names resolve to `None`.
    pub fn from_name(name: &str) -> Option<MouseEventType> {
        match name {
            "ButtonPress" => Some(MouseEventType::BUTTON_PRESS),
            "DoubleClick" => Some(MouseEventType::DOUBLE_CLICK),
            "TripleClick" => Some(MouseEventType::TRIPLE_CLICK),
            _ => None,
        }
    }
}

impl std::ops::BitOr for MouseEventType {
    type Output = MouseEventType;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for MouseEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.intersects(MouseEventType::BUTTON_PRESS) {
            parts.push("ButtonPress");
        }
        if self.intersects(MouseEventType::DOUBLE_CLICK) {
            parts.push("DoubleClick");
        }
        if self.intersects(MouseEventType::TRIPLE_CLICK) {
            parts.push("TripleClick");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// An incoming mouse event as delivered by the windowing collaborator
#[derive(Clone, Copy, Debug)]
pub struct MouseEvent {
    pub kind: MouseEventType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_mask_empty() {
        let mask = ModifierMask::NONE;
        assert!(mask.is_empty());
        assert!(!mask.alt());
        assert!(!mask.ctrl());
        assert!(!mask.shift());
    }

    #[test]
    fn test_modifier_mask_combined() {
        let mask = ModifierMask::CTRL | ModifierMask::SHIFT;
        assert!(mask.ctrl());
        assert!(mask.shift());
        assert!(!mask.alt());
    }

    #[test]
    fn test_modifier_mask_contains() {
        let held = ModifierMask::CTRL | ModifierMask::SHIFT;
        assert!(held.contains(ModifierMask::CTRL));
        assert!(held.contains(ModifierMask::CTRL | ModifierMask::SHIFT));
        assert!(!held.contains(ModifierMask::ALT));
        // Empty mask is a subset of anything
        assert!(held.contains(ModifierMask::NONE));
    }

    #[test]
    fn test_modifier_table_permutations() {
        // Every spelling of a combination resolves to the same mask
        assert_eq!(
            ModifierMask::from_name("CtrlAlt"),
            ModifierMask::from_name("AltCtrl")
        );
        assert_eq!(
            ModifierMask::from_name("ShiftCtrlAlt"),
            ModifierMask::from_name("AltCtrlShift")
        );
        assert_eq!(
            ModifierMask::from_name("Ctrl"),
            Some(ModifierMask::CTRL)
        );
    }

    #[test]
    fn test_modifier_table_covers_all_subsets() {
        let masks: std::collections::HashSet<u8> = [
            "Alt", "Ctrl", "Shift", "AltCtrl", "CtrlShift", "AltShift", "AltCtrlShift",
        ]
        .iter()
        .map(|n| ModifierMask::from_name(n).unwrap().0)
        .collect();
        assert_eq!(masks.len(), 7);
    }

    #[test]
    fn test_modifier_unknown() {
        assert_eq!(ModifierMask::from_name("Meta"), None);
        assert_eq!(ModifierMask::from_name(""), None);
        // Table lookup is case-sensitive
        assert_eq!(ModifierMask::from_name("ctrl"), None);
    }

    #[test]
    fn test_keysym_char() {
        assert_eq!(KeySym::from_name("t"), Some(KeySym::Char('t')));
        assert_eq!(KeySym::from_name("T"), Some(KeySym::Char('T')));
        assert_eq!(KeySym::from_name("7"), Some(KeySym::Char('7')));
    }

    #[test]
    fn test_keysym_named() {
        assert_eq!(KeySym::from_name("Insert"), Some(KeySym::Insert));
        assert_eq!(KeySym::from_name("Left"), Some(KeySym::Left));
        assert_eq!(KeySym::from_name("Page_Up"), Some(KeySym::PageUp));
        assert_eq!(KeySym::from_name("F11"), Some(KeySym::F(11)));
    }

    #[test]
    fn test_keysym_void() {
        assert_eq!(KeySym::from_name("NoSuchKey"), None);
        assert_eq!(KeySym::from_name(""), None);
        assert_eq!(KeySym::from_name("F99"), None);
    }

    #[test]
    fn test_keysym_lowercase() {
        assert_eq!(KeySym::Char('T').to_lowercase(), KeySym::Char('t'));
        assert_eq!(KeySym::Insert.to_lowercase(), KeySym::Insert);
    }

    #[test]
    fn test_mouse_event_type_intersects() {
        let both = MouseEventType::BUTTON_PRESS | MouseEventType::DOUBLE_CLICK;
        assert!(both.intersects(MouseEventType::DOUBLE_CLICK));
        assert!(!MouseEventType::TRIPLE_CLICK.intersects(both));
    }

    #[test]
    fn test_mouse_event_type_from_name() {
        assert_eq!(
            MouseEventType::from_name("DoubleClick"),
            Some(MouseEventType::DOUBLE_CLICK)
        );
        assert_eq!(MouseEventType::from_name("QuadrupleClick"), None);
    }
}
