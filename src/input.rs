//! Keyboard bindings.

use crate::fit::FittingType;
use crate::rotate::RotationDirection;

/// Modifier keys held during a key press.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// Ctrl, Alt or Meta: the browser owns these chords.
    pub fn is_reserved(self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// What a key press asks the viewer to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Fitting(FittingType),
    Rotate(RotationDirection),
}

/// Map a `KeyboardEvent.code` to a command.
///
/// `Digit1` natural size, `Digit2` fill, `Digit3` fit, `KeyR` rotate
/// clockwise, `Shift+KeyR` rotate counter-clockwise.
pub fn command_for_key(code: &str, modifiers: Modifiers) -> Option<Command> {
    if modifiers.is_reserved() {
        return None;
    }
    if modifiers.shift {
        return match code {
            "KeyR" => Some(Command::Rotate(RotationDirection::CounterClockwise)),
            _ => None,
        };
    }
    match code {
        "Digit1" => Some(Command::Fitting(FittingType::Natural)),
        "Digit2" => Some(Command::Fitting(FittingType::Fill)),
        "Digit3" => Some(Command::Fitting(FittingType::Fit)),
        "KeyR" => Some(Command::Rotate(RotationDirection::Clockwise)),
        _ => None,
    }
}
