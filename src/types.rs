//! Core value types shared by the display, counter and button logic.

/// Numeric base used to split the displayed value into two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Radix {
    /// Base 2, values 00-11.
    Binary,

    /// Base 10, values 00-99.
    #[default]
    Decimal,

    /// Base 16, values 00-FF.
    Hexadecimal,
}

impl Radix {
    /// Numeric value of the base.
    #[inline]
    pub const fn value(self) -> u8 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Largest value two digits can show in this base (`radix² - 1`).
    #[inline]
    pub const fn max_value(self) -> u8 {
        match self {
            Radix::Binary => 3,
            Radix::Decimal => 99,
            Radix::Hexadecimal => 255,
        }
    }
}

impl TryFrom<u8> for Radix {
    type Error = DisplayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Radix::Binary),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            other => Err(DisplayError::InvalidRadix(other)),
        }
    }
}

/// Direction of automatic counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountDirection {
    /// Increment, wrapping from the maximum to 0.
    #[default]
    Up,

    /// Decrement, wrapping from 0 to the maximum.
    Down,
}

impl CountDirection {
    /// Returns the opposite direction.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            CountDirection::Up => CountDirection::Down,
            CountDirection::Down => CountDirection::Up,
        }
    }

    /// Storage encoding.
    #[inline]
    pub const fn to_byte(self) -> u8 {
        match self {
            CountDirection::Up => 0,
            CountDirection::Down => 1,
        }
    }

    /// Decodes a stored byte. Only 1 means `Down`, so erased cells count up.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            1 => CountDirection::Down,
            _ => CountDirection::Up,
        }
    }
}

/// One of the two physical digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    /// Most significant digit (left display).
    #[default]
    Digit1,

    /// Least significant digit (right display).
    Digit2,
}

impl Digit {
    /// Returns the other digit.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Digit::Digit1 => Digit::Digit2,
            Digit::Digit2 => Digit::Digit1,
        }
    }
}

/// Logical push buttons sharing one edge-interrupt group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Toggles counting.
    A,
    /// Toggles count direction.
    B,
    /// Toggles the display output.
    C,
}

impl Button {
    /// Order in which asserted buttons are checked; the first one wins.
    pub const PRIORITY: [Button; 3] = [Button::A, Button::B, Button::C];

    /// Action bound to this button.
    #[inline]
    pub const fn action(self) -> ButtonAction {
        match self {
            Button::A => ButtonAction::ToggleCount,
            Button::B => ButtonAction::ToggleDirection,
            Button::C => ButtonAction::ToggleOutput,
        }
    }
}

/// Action performed by a button dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    /// Enable or disable automatic counting.
    ToggleCount,
    /// Swap between counting up and down.
    ToggleDirection,
    /// Turn the display on or off.
    ToggleOutput,
}

/// Display validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Requested number does not fit in two digits of the current radix.
    OutOfRange {
        /// The rejected value.
        requested: u8,
        /// Largest value accepted with the current radix.
        max: u8,
    },

    /// Requested radix is not 2, 10 or 16.
    InvalidRadix(u8),
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::OutOfRange { requested, max } => {
                write!(f, "number {} out of range (max {})", requested, max)
            }
            DisplayError::InvalidRadix(radix) => {
                write!(f, "invalid radix {} (expected 2, 10 or 16)", radix)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}
