//! Public console attribute word.
//!
//! The externally documented 16-bit attribute format exchanged with callers
//! outside the buffer. Only `LEADING_BYTE` and `TRAILING_BYTE` are produced
//! or consumed by this crate; the color and grid bits are named so callers
//! can build and inspect full words, and are always passed through untouched.

use bitflags::bitflags;

bitflags! {
    /// 16-bit public attribute word (colors, grid lines, DBCS halves).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PublicAttrs: u16 {
        const FOREGROUND_BLUE      = 0x0001;
        const FOREGROUND_GREEN     = 0x0002;
        const FOREGROUND_RED       = 0x0004;
        const FOREGROUND_INTENSITY = 0x0008;
        const BACKGROUND_BLUE      = 0x0010;
        const BACKGROUND_GREEN     = 0x0020;
        const BACKGROUND_RED       = 0x0040;
        const BACKGROUND_INTENSITY = 0x0080;
        const LEADING_BYTE         = 0x0100;
        const TRAILING_BYTE        = 0x0200;
        const GRID_HORIZONTAL      = 0x0400;
        const GRID_LVERTICAL       = 0x0800;
        const GRID_RVERTICAL       = 0x1000;
        const REVERSE_VIDEO        = 0x4000;
        const UNDERSCORE           = 0x8000;

        /// Both DBCS half bits.
        const DBCS = Self::LEADING_BYTE.bits() | Self::TRAILING_BYTE.bits();
    }
}

impl Default for PublicAttrs {
    fn default() -> Self {
        Self::empty()
    }
}

impl PublicAttrs {
    /// Wrap a raw word, keeping bits this type has no name for.
    pub const fn from_word(word: u16) -> Self {
        Self::from_bits_retain(word)
    }

    /// The raw 16-bit word.
    pub const fn word(self) -> u16 {
        self.bits()
    }

    /// Only the two DBCS half bits of this word.
    pub fn dbcs_bits(self) -> Self {
        self & Self::DBCS
    }
}

impl From<u16> for PublicAttrs {
    fn from(word: u16) -> Self {
        Self::from_word(word)
    }
}

impl From<PublicAttrs> for u16 {
    fn from(attrs: PublicAttrs) -> Self {
        attrs.word()
    }
}
