//! Cell width tag and the cell record that embeds it.
//!
//! A double-width glyph spans two adjacent cells: the first is the leading
//! half, the second the trailing half. `CellWidthTag` records which role a
//! cell plays. It stores a single discriminant, so a cell can never be both
//! halves at once; the only place that combination can appear is a public
//! attribute word, and `CellWidthTag::from_public_flags` rejects it.
//!
//! Deciding *whether* a character is double-width happens elsewhere; the tag
//! only records the outcome.

use std::fmt;

use crate::attr::PublicAttrs;
use crate::error::{InvalidArgument, Result};

/// Role of a cell relative to a double-width glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum DbcsRole {
    /// Ordinary single-width glyph.
    #[default]
    Single = 0x00,
    /// First cell of a double-width glyph.
    Leading = 0x01,
    /// Second cell of a double-width glyph.
    Trailing = 0x02,
}

impl fmt::Display for DbcsRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "single",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
        })
    }
}

/// Per-cell double-width tag.
///
/// One byte, `Copy`, embedded by value in every [`Cell`]. Equality is
/// discriminant equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CellWidthTag {
    role: DbcsRole,
}

const _: () = assert!(size_of::<CellWidthTag>() == 1);

impl CellWidthTag {
    /// A `Single` tag.
    pub const fn new() -> Self {
        Self::from_role(DbcsRole::Single)
    }

    /// A tag with the given role.
    pub const fn from_role(role: DbcsRole) -> Self {
        Self { role }
    }

    /// The stored role.
    pub const fn role(self) -> DbcsRole {
        self.role
    }

    /// Returns `true` for an ordinary single-width cell.
    pub const fn is_single(self) -> bool {
        matches!(self.role, DbcsRole::Single)
    }

    /// Returns `true` for the first half of a double-width glyph.
    pub const fn is_leading(self) -> bool {
        matches!(self.role, DbcsRole::Leading)
    }

    /// Returns `true` for the second half of a double-width glyph.
    pub const fn is_trailing(self) -> bool {
        matches!(self.role, DbcsRole::Trailing)
    }

    /// Returns `true` if this cell is either half of a double-width glyph.
    pub const fn is_dbcs(self) -> bool {
        self.is_leading() || self.is_trailing()
    }

    /// Mark as a single-width cell.
    pub fn set_single(&mut self) {
        self.role = DbcsRole::Single;
    }

    /// Mark as the first half of a double-width glyph.
    pub fn set_leading(&mut self) {
        self.role = DbcsRole::Leading;
    }

    /// Mark as the second half of a double-width glyph.
    pub fn set_trailing(&mut self) {
        self.role = DbcsRole::Trailing;
    }

    /// Drop out of any double-width pairing (cell cleared or erased).
    pub fn reset(&mut self) {
        self.set_single();
    }

    /// Encode as a public attribute word.
    ///
    /// Sets `LEADING_BYTE` for a leading half, `TRAILING_BYTE` for a trailing
    /// half, and nothing for a single-width cell.
    pub const fn to_public_flags(self) -> PublicAttrs {
        match self.role {
            DbcsRole::Single => PublicAttrs::empty(),
            DbcsRole::Leading => PublicAttrs::LEADING_BYTE,
            DbcsRole::Trailing => PublicAttrs::TRAILING_BYTE,
        }
    }

    /// Decode from a public attribute word.
    ///
    /// Bits other than `LEADING_BYTE` and `TRAILING_BYTE` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::LeadingAndTrailing`] when both half bits
    /// are set; a cell cannot be both halves of a glyph.
    pub fn from_public_flags(attrs: PublicAttrs) -> Result<Self> {
        let dbcs = attrs.dbcs_bits();
        if dbcs == PublicAttrs::DBCS {
            return Err(InvalidArgument::LeadingAndTrailing { word: attrs.word() });
        }

        let role = if dbcs.contains(PublicAttrs::LEADING_BYTE) {
            DbcsRole::Leading
        } else if dbcs.contains(PublicAttrs::TRAILING_BYTE) {
            DbcsRole::Trailing
        } else {
            DbcsRole::Single
        };
        Ok(Self::from_role(role))
    }

    /// Decode from a raw 16-bit attribute word. See [`Self::from_public_flags`].
    pub fn from_public_word(word: u16) -> Result<Self> {
        Self::from_public_flags(PublicAttrs::from_word(word))
    }

    /// Write this tag's half bits into a larger attribute word.
    ///
    /// Any stale DBCS bits in `attrs` are cleared first. All other bits pass
    /// through unchanged.
    pub fn merge_into(self, attrs: PublicAttrs) -> PublicAttrs {
        attrs.difference(PublicAttrs::DBCS) | self.to_public_flags()
    }
}

impl From<DbcsRole> for CellWidthTag {
    fn from(role: DbcsRole) -> Self {
        Self::from_role(role)
    }
}

impl From<CellWidthTag> for PublicAttrs {
    fn from(tag: CellWidthTag) -> Self {
        tag.to_public_flags()
    }
}

impl TryFrom<PublicAttrs> for CellWidthTag {
    type Error = InvalidArgument;

    fn try_from(attrs: PublicAttrs) -> Result<Self> {
        Self::from_public_flags(attrs)
    }
}

impl fmt::Display for CellWidthTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.role, f)
    }
}

/// One character position in a buffer row.
///
/// For a double-width glyph the character lives in the leading cell; the
/// trailing cell holds a blank placeholder. Both halves carry the same
/// `attrs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character stored in this cell.
    pub ch: char,
    /// Color and grid-line bits. Never holds the DBCS half bits; those come
    /// from `width`.
    pub attrs: PublicAttrs,
    /// Double-width role of this cell.
    pub width: CellWidthTag,
}

const _: () = assert!(size_of::<Cell>() <= 8);

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attrs: PublicAttrs::empty(),
            width: CellWidthTag::new(),
        }
    }
}

impl Cell {
    /// Blank this cell: a space, no longer part of any pair.
    ///
    /// Colors are kept; clearing text does not repaint the background.
    pub fn reset(&mut self) {
        self.ch = ' ';
        self.width.reset();
    }

    /// Returns `true` for a single-width space, whatever its colors.
    pub const fn is_blank(self) -> bool {
        self.ch == ' ' && self.width.is_single()
    }

    /// Full public attribute word for this cell: colors plus DBCS half bits.
    pub fn public_attrs(self) -> PublicAttrs {
        self.width.merge_into(self.attrs)
    }
}
