//! Seven-segment digit encoding.
//!
//! Bit layout of a pattern (bit 7 unused):
//!
//! ```text
//!    aaaa        a = bit 0
//!   f    b       b = bit 1
//!   f    b       c = bit 2
//!    gggg        d = bit 3
//!   e    c       e = bit 4
//!   e    c       f = bit 5
//!    dddd        g = bit 6
//! ```

/// Number of segment lines on the shared bus.
pub const SEGMENT_COUNT: usize = 7;

/// Patterns for the digits 0-F, indexed by value.
pub const DIGIT_PATTERNS: [u8; 16] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // A
    0x7C, // b
    0x39, // C
    0x5E, // d
    0x79, // E
    0x71, // F
];

/// A 7-bit segment pattern as driven onto the segment bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(pub u8);

impl SegmentPattern {
    /// All segments off.
    pub const OFF: Self = SegmentPattern(0x00);

    /// Encodes a digit value.
    ///
    /// Values 0-15 map to their hexadecimal glyph. Anything else maps to
    /// [`SegmentPattern::OFF`]; this lookup never fails.
    #[inline]
    pub const fn from_digit(digit: u8) -> Self {
        if (digit as usize) < DIGIT_PATTERNS.len() {
            SegmentPattern(DIGIT_PATTERNS[digit as usize])
        } else {
            Self::OFF
        }
    }

    /// Raw pattern bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no segment is lit.
    #[inline]
    pub const fn is_blank(self) -> bool {
        self.0 & 0x7F == 0
    }

    /// Returns true if the segment at `index` (0 = a ... 6 = g) is lit.
    #[inline]
    pub const fn lit(self, index: usize) -> bool {
        index < SEGMENT_COUNT && (self.0 >> index) & 1 == 1
    }
}

/// Encodes a digit value into its raw segment bits.
#[inline]
pub const fn encode(digit: u8) -> u8 {
    SegmentPattern::from_digit(digit).bits()
}
