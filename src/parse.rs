//! Parsing of binding specification strings
//!
//! A key specification is "one modifier combination, one key", separated
//! by the first `-`: `"Ctrl-t"`, `"ShiftAlt-Insert"`. Bounding the
//! grammar to two tokens matches real keyboard shortcuts, and all
//! validation happens before any store mutation so a bad specification
//! never corrupts existing state.

use std::fmt;

use crate::layout::LayoutConnection;
use crate::types::{KeyDescriptor, KeySym, ModifierMask, MouseEventType};

/// Errors from resolving binding specifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// Missing modifier or key token
    MalformedSpec(String),
    /// Modifier token not in the modifier table
    UnknownModifier(String),
    /// Key token unresolved or void
    UnknownKey(String),
    /// Mouse event name not in the event table
    UnknownMouseEvent(String),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::MalformedSpec(s) => write!(f, "malformed binding: {}", s),
            SpecError::UnknownModifier(s) => write!(f, "bad modifier: {}", s),
            SpecError::UnknownKey(s) => write!(f, "bad keyval: {}", s),
            SpecError::UnknownMouseEvent(s) => write!(f, "unknown event: {}", s),
        }
    }
}

impl std::error::Error for SpecError {}

/// Parse a key specification into a validated (mask, descriptor) pair.
///
/// The key token is resolved against the embedded vocabulary, folded to
/// lowercase, and its physical code looked up once through the layout
/// connection. No side effects; callers decide whether to insert.
pub fn parse_key_spec(
    spec: &str,
    conn: &dyn LayoutConnection,
) -> Result<(ModifierMask, KeyDescriptor), SpecError> {
    let Some((mod_token, key_token)) = spec.split_once('-') else {
        return Err(SpecError::MalformedSpec(spec.to_string()));
    };
    if mod_token.is_empty() || key_token.is_empty() {
        return Err(SpecError::MalformedSpec(spec.to_string()));
    }

    let mask = ModifierMask::from_name(mod_token)
        .ok_or_else(|| SpecError::UnknownModifier(spec.to_string()))?;

    let keysym = KeySym::from_name(key_token)
        .ok_or_else(|| SpecError::UnknownKey(spec.to_string()))?
        .to_lowercase();
    let keycode = conn.keycode_for(keysym);

    Ok((mask, KeyDescriptor { keysym, keycode }))
}

/// Resolve a mouse event name against the fixed event table
pub fn parse_mouse_event(name: &str) -> Result<MouseEventType, SpecError> {
    MouseEventType::from_name(name).ok_or_else(|| SpecError::UnknownMouseEvent(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Keycode;

    /// Layout that derives codes from the symbol so tests can predict them
    struct EchoLayout;

    impl LayoutConnection for EchoLayout {
        fn keycode_for(&self, keysym: KeySym) -> Keycode {
            match keysym {
                KeySym::Char(c) => Keycode(c as u16),
                _ => Keycode(0xff),
            }
        }
    }

    #[test]
    fn test_parse_simple_spec() {
        let (mask, desc) = parse_key_spec("Ctrl-t", &EchoLayout).unwrap();
        assert_eq!(mask, ModifierMask::CTRL);
        assert_eq!(desc.keysym, KeySym::Char('t'));
        assert_eq!(desc.keycode, Keycode('t' as u16));
    }

    #[test]
    fn test_parse_lowercases_key() {
        let (_, desc) = parse_key_spec("Ctrl-T", &EchoLayout).unwrap();
        assert_eq!(desc.keysym, KeySym::Char('t'));
        assert_eq!(desc.keycode, Keycode('t' as u16));
    }

    #[test]
    fn test_parse_multi_modifier_spec() {
        let (mask, desc) = parse_key_spec("ShiftAlt-Insert", &EchoLayout).unwrap();
        assert_eq!(mask, ModifierMask::SHIFT | ModifierMask::ALT);
        assert_eq!(desc.keysym, KeySym::Insert);
    }

    #[test]
    fn test_parse_dash_key() {
        // Split happens on the first separator only
        let (mask, desc) = parse_key_spec("Ctrl--", &EchoLayout).unwrap();
        assert_eq!(mask, ModifierMask::CTRL);
        assert_eq!(desc.keysym, KeySym::Char('-'));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_key_spec("Bogus", &EchoLayout),
            Err(SpecError::MalformedSpec("Bogus".into()))
        );
        assert_eq!(
            parse_key_spec("Ctrl-", &EchoLayout),
            Err(SpecError::MalformedSpec("Ctrl-".into()))
        );
        assert_eq!(
            parse_key_spec("-t", &EchoLayout),
            Err(SpecError::MalformedSpec("-t".into()))
        );
    }

    #[test]
    fn test_parse_unknown_modifier() {
        assert_eq!(
            parse_key_spec("Meta-t", &EchoLayout),
            Err(SpecError::UnknownModifier("Meta-t".into()))
        );
    }

    #[test]
    fn test_parse_unknown_key() {
        assert_eq!(
            parse_key_spec("Ctrl-NoSuchKey", &EchoLayout),
            Err(SpecError::UnknownKey("Ctrl-NoSuchKey".into()))
        );
    }

    #[test]
    fn test_parse_mouse_event() {
        assert_eq!(
            parse_mouse_event("DoubleClick"),
            Ok(MouseEventType::DOUBLE_CLICK)
        );
        assert_eq!(
            parse_mouse_event("LongPress"),
            Err(SpecError::UnknownMouseEvent("LongPress".into()))
        );
    }
}
