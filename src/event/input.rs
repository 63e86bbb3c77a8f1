//! Host-neutral input event types and the crossterm translation.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crossterm::event as ct;

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// Keys and modifiers
// ---------------------------------------------------------------------------

/// The keys the dialog reacts to. Anything else maps to [`Key::Other`] and is
/// ignored by dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Other,
}

/// Modifier key bitmask.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);

    /// Whether every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    #[inline]
    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    #[inline]
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    #[inline]
    fn bitand(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 & rhs.0)
    }
}

/// A key press or release with its modifier state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn plain(code: Key) -> Self {
        Self { code, modifiers: Modifiers::NONE }
    }

    pub const fn with(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// One input event, in screen coordinates where applicable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    PointerMove(Point),
    PointerDown(Point),
    PointerUp(Point),
    Resize { width: i32, height: i32 },
    /// The host asked the dialog to close.
    Quit,
    /// Anything the dialog has no reaction to.
    Other,
}

// ---------------------------------------------------------------------------
// crossterm translation
// ---------------------------------------------------------------------------

fn key_code(code: ct::KeyCode) -> Key {
    match code {
        ct::KeyCode::Char(c) => Key::Char(c),
        ct::KeyCode::Enter => Key::Enter,
        ct::KeyCode::Esc => Key::Escape,
        ct::KeyCode::Tab | ct::KeyCode::BackTab => Key::Tab,
        ct::KeyCode::Backspace => Key::Backspace,
        ct::KeyCode::Delete => Key::Delete,
        ct::KeyCode::Left => Key::Left,
        ct::KeyCode::Right => Key::Right,
        ct::KeyCode::Up => Key::Up,
        ct::KeyCode::Down => Key::Down,
        ct::KeyCode::Home => Key::Home,
        ct::KeyCode::End => Key::End,
        _ => Key::Other,
    }
}

fn key_modifiers(event: &ct::KeyEvent) -> Modifiers {
    let mut out = Modifiers::NONE;
    if event.modifiers.contains(ct::KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(ct::KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if event.modifiers.contains(ct::KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    // BackTab arrives as its own code with no SHIFT bit set.
    if event.code == ct::KeyCode::BackTab {
        out |= Modifiers::SHIFT;
    }
    out
}

impl From<ct::Event> for InputEvent {
    fn from(event: ct::Event) -> Self {
        match event {
            ct::Event::Key(k) => {
                let key = KeyEvent { code: key_code(k.code), modifiers: key_modifiers(&k) };
                match k.kind {
                    ct::KeyEventKind::Release => InputEvent::KeyUp(key),
                    _ => InputEvent::KeyDown(key),
                }
            }
            ct::Event::Mouse(m) => {
                let at = Point::new(i32::from(m.column), i32::from(m.row));
                match m.kind {
                    ct::MouseEventKind::Down(ct::MouseButton::Left) => {
                        InputEvent::PointerDown(at)
                    }
                    ct::MouseEventKind::Up(ct::MouseButton::Left) => InputEvent::PointerUp(at),
                    ct::MouseEventKind::Moved
                    | ct::MouseEventKind::Drag(ct::MouseButton::Left) => {
                        InputEvent::PointerMove(at)
                    }
                    _ => InputEvent::Other,
                }
            }
            ct::Event::Resize(width, height) => InputEvent::Resize {
                width: i32::from(width),
                height: i32::from(height),
            },
            _ => InputEvent::Other,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
