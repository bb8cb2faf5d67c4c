//! Buffer row.
//!
//! A `Row` is a fixed-width array of `Cell`s representing one line of a
//! screen buffer. It owns the `CellWidthTag` of every cell and keeps
//! double-width pairs consistent: a leading cell is always immediately
//! followed by its trailing cell, and overwriting or clearing either half
//! blanks the other.

use std::iter::Peekable;
use std::ops::{Index, Range};

use unicode_width::UnicodeWidthChar;

use crate::attr::PublicAttrs;
use crate::cell::{Cell, CellWidthTag, DbcsRole};
use crate::error::{InvalidArgument, Result};
use crate::index::Column;

/// One cell of input to [`Row::write_cells`].
///
/// A double-width glyph arrives as two items: a `Leading` one carrying the
/// character, then a `Trailing` one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputCell {
    pub ch: char,
    /// Color and grid-line bits to store with the glyph.
    pub attrs: PublicAttrs,
    pub width: CellWidthTag,
}

impl OutputCell {
    const fn with_role(ch: char, role: DbcsRole) -> Self {
        Self {
            ch,
            attrs: PublicAttrs::empty(),
            width: CellWidthTag::from_role(role),
        }
    }

    /// A single-width glyph with no colors.
    pub const fn single(ch: char) -> Self {
        Self::with_role(ch, DbcsRole::Single)
    }

    /// The first half of a double-width glyph, carrying the character.
    pub const fn leading(ch: char) -> Self {
        Self::with_role(ch, DbcsRole::Leading)
    }

    /// The second half of a double-width glyph.
    pub const fn trailing(ch: char) -> Self {
        Self::with_role(ch, DbcsRole::Trailing)
    }

    /// Same cell with the given color and grid-line bits.
    ///
    /// DBCS half bits in `attrs` are dropped; `width` alone decides the role.
    pub fn with_attrs(self, attrs: PublicAttrs) -> Self {
        Self {
            attrs: attrs.difference(PublicAttrs::DBCS),
            ..self
        }
    }

    /// Split text into output cells by display width.
    ///
    /// Width-2 characters become a leading/trailing pair. Zero-width
    /// characters are dropped; characters with no defined width take one cell.
    pub fn from_text(text: &str) -> impl Iterator<Item = Self> + '_ {
        text.chars().flat_map(|ch| {
            let (first, second) = match UnicodeWidthChar::width(ch).unwrap_or(1) {
                0 => (None, None),
                2 => (Some(Self::leading(ch)), Some(Self::trailing(ch))),
                _ => (Some(Self::single(ch)), None),
            };
            first.into_iter().chain(second)
        })
    }
}

/// Classification of a glyph for word-wise selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterClass {
    /// Space or control character.
    ControlChar,
    /// One of the caller's word delimiters.
    DelimiterChar,
    /// Anything else.
    RegularChar,
}

/// A glyph as it sits in a row: its first column and how many it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGlyph {
    pub column: Column,
    pub ch: char,
    pub cols: usize,
}

impl RowGlyph {
    /// Tag of the glyph's first cell.
    pub const fn width_tag(&self) -> CellWidthTag {
        if self.cols == 2 {
            CellWidthTag::from_role(DbcsRole::Leading)
        } else {
            CellWidthTag::from_role(DbcsRole::Single)
        }
    }
}

/// Iterator over the glyphs of a row, left to right.
#[derive(Debug, Clone)]
pub struct RowGlyphs<'a> {
    cells: &'a [Cell],
    col: usize,
}

impl Iterator for RowGlyphs<'_> {
    type Item = RowGlyph;

    fn next(&mut self) -> Option<RowGlyph> {
        let cell = self.cells.get(self.col)?;
        let paired = cell.width.is_leading()
            && self
                .cells
                .get(self.col + 1)
                .is_some_and(|next| next.width.is_trailing());
        let cols = if paired { 2 } else { 1 };
        let glyph = RowGlyph {
            column: Column(self.col),
            ch: cell.ch,
            cols,
        };
        self.col += cols;
        Some(glyph)
    }
}

/// One row of cells in a screen buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The cells in this row.
    inner: Vec<Cell>,
    /// The writer ran out of columns and continued on the next row.
    wrap_forced: bool,
    /// A leading half did not fit in the last column and was pushed to the
    /// next row, leaving a blank pad.
    double_byte_padded: bool,
}

impl Row {
    /// Create a new row of `cols` blank cells.
    pub fn new(cols: usize) -> Self {
        Self {
            inner: vec![Cell::default(); cols],
            wrap_forced: false,
            double_byte_padded: false,
        }
    }

    /// Blank every cell, paint it with `fill`, and clear the row flags.
    pub fn reset(&mut self, fill: PublicAttrs) {
        self.inner.fill(Cell {
            attrs: fill.difference(PublicAttrs::DBCS),
            ..Cell::default()
        });
        self.wrap_forced = false;
        self.double_byte_padded = false;
    }

    /// Number of columns in this row.
    pub fn cols(&self) -> usize {
        self.inner.len()
    }

    /// Whether the writer wrapped off the end of this row.
    pub fn wrap_forced(&self) -> bool {
        self.wrap_forced
    }

    /// Set or clear the forced-wrap flag.
    pub fn set_wrap_forced(&mut self, wrap: bool) {
        self.wrap_forced = wrap;
    }

    /// Whether a leading half was pushed off the end of this row.
    pub fn double_byte_padded(&self) -> bool {
        self.double_byte_padded
    }

    /// Set or clear the double-byte padding flag.
    pub fn set_double_byte_padded(&mut self, padded: bool) {
        self.double_byte_padded = padded;
    }

    /// Write a stream of cells starting at `start`.
    ///
    /// Writing stops at `limit_right` (inclusive, defaults to the last
    /// column) or when `cells` runs out. Only items actually placed in the
    /// row are taken from `cells`; whatever did not fit is still there for
    /// the next row. A leading half that lands on the final column is not
    /// written: the cell is cleared, the row is marked double-byte padded,
    /// and the leading item stays in `cells`. When `wrap` is `Some` and the
    /// final column was reached, `wrap_forced` is set to its value.
    ///
    /// Returns the number of input cells consumed.
    pub fn write_cells<I>(
        &mut self,
        start: Column,
        cells: &mut Peekable<I>,
        wrap: Option<bool>,
        limit_right: Option<Column>,
    ) -> Result<usize>
    where
        I: Iterator<Item = OutputCell>,
    {
        self.check_column(start)?;
        if let Some(limit) = limit_right {
            self.check_column(limit)?;
        }

        let last = limit_right.map_or(self.cols() - 1, |c| c.0);
        let mut col = start.0;
        let mut consumed = 0;

        while col <= last {
            let Some(&cell) = cells.peek() else {
                break;
            };
            let filling_last = col == last;

            let padded = match cell.width.role() {
                DbcsRole::Single => {
                    self.put(col, cell);
                    false
                }
                DbcsRole::Leading if filling_last => {
                    log::trace!("column {col}: leading half does not fit, padding row");
                    self.clear_cell(Column(col));
                    self.inner[col].attrs = cell.attrs;
                    self.double_byte_padded = true;
                    true
                }
                DbcsRole::Leading => {
                    self.put(col, cell);
                    false
                }
                // Already written together with its leading half.
                DbcsRole::Trailing => false,
            };

            if let Some(wrap) = wrap {
                if filling_last {
                    self.wrap_forced = wrap;
                }
            }

            if padded {
                break;
            }
            cells.next();
            consumed += 1;
            col += 1;
        }

        Ok(consumed)
    }

    /// Write text starting at `start`, splitting it into cells by width.
    ///
    /// Text that does not fit is dropped; use [`Self::write_cells`] with
    /// [`OutputCell::from_text`] to carry it over to another row.
    ///
    /// Returns the number of cells consumed (a wide character counts twice).
    pub fn write_str(&mut self, start: Column, text: &str, wrap: Option<bool>) -> Result<usize> {
        self.write_cells(start, &mut OutputCell::from_text(text).peekable(), wrap, None)
    }

    /// Blank one cell, and its partner if it was half of a pair.
    ///
    /// Out-of-range columns are ignored.
    pub fn clear_cell(&mut self, col: Column) {
        if col.0 >= self.cols() {
            return;
        }
        self.break_pair_at(col.0);
        self.inner[col.0].reset();
    }

    /// Range-checked [`Self::clear_cell`].
    pub fn clear_column(&mut self, col: Column) -> Result<()> {
        self.check_column(col)?;
        self.clear_cell(col);
        Ok(())
    }

    /// Full public attribute word of the cell at `col`, clamped to the last
    /// column: its colors with the DBCS half bit merged in.
    pub fn public_attrs_at(&self, col: Column) -> PublicAttrs {
        self.clamped(col)
            .map_or_else(PublicAttrs::empty, |idx| self.inner[idx].public_attrs())
    }

    /// Paint `attrs` over every cell from `begin` to the end of the row.
    ///
    /// Text and width tags are untouched; DBCS bits in `attrs` are ignored.
    pub fn set_attrs_to_end(&mut self, begin: Column, attrs: PublicAttrs) {
        let end = Column(self.cols());
        self.replace_attrs(begin..end, attrs);
    }

    /// Paint `attrs` over the cells in `range`, clipped to the row.
    pub fn replace_attrs(&mut self, range: Range<Column>, attrs: PublicAttrs) {
        let end = range.end.0.min(self.cols());
        let attrs = attrs.difference(PublicAttrs::DBCS);
        for cell in self.inner.iter_mut().take(end).skip(range.start.0) {
            cell.attrs = attrs;
        }
    }

    /// Width tag of the cell at `col`, clamped to the last column.
    pub fn dbcs_attr_at(&self, col: Column) -> CellWidthTag {
        self.clamped(col)
            .map_or_else(CellWidthTag::default, |idx| self.inner[idx].width)
    }

    /// Glyph covering `col`, clamped to the last column.
    ///
    /// Both halves of a double-width glyph report the same character.
    pub fn glyph_at(&self, col: Column) -> char {
        let Some(idx) = self.clamped(col) else {
            return ' ';
        };
        if self.inner[idx].width.is_trailing() && idx > 0 {
            self.inner[idx - 1].ch
        } else {
            self.inner[idx].ch
        }
    }

    /// Classify the glyph at `col` against a set of word delimiters.
    pub fn delimiter_class_at(&self, col: Column, delimiters: &str) -> DelimiterClass {
        let glyph = self.glyph_at(col);
        if glyph <= ' ' {
            DelimiterClass::ControlChar
        } else if delimiters.contains(glyph) {
            DelimiterClass::DelimiterChar
        } else {
            DelimiterClass::RegularChar
        }
    }

    /// Number of blank columns before the first glyph.
    pub fn measure_left(&self) -> usize {
        self.inner
            .iter()
            .position(|c| !c.is_blank())
            .unwrap_or(self.inner.len())
    }

    /// Column just past the last non-blank cell.
    pub fn measure_right(&self) -> usize {
        self.inner.iter().rposition(|c| !c.is_blank()).map_or(0, |i| i + 1)
    }

    /// Returns `true` if any cell holds something other than a blank.
    pub fn contains_text(&self) -> bool {
        self.inner.iter().any(|c| !c.is_blank())
    }

    /// Row contents as a string; each double-width glyph appears once.
    pub fn text(&self) -> String {
        self.inner
            .iter()
            .filter(|c| !c.width.is_trailing())
            .map(|c| c.ch)
            .collect()
    }

    /// Iterate the row's glyphs, a double-width pair counting once.
    pub fn glyphs(&self) -> RowGlyphs<'_> {
        RowGlyphs {
            cells: &self.inner,
            col: 0,
        }
    }

    /// Change the column count, keeping the existing prefix.
    ///
    /// A double-width glyph cut in half by the new edge is blanked.
    pub fn resize(&mut self, cols: usize) {
        let old = self.inner.len();
        if cols < old && cols > 0 && self.inner[cols - 1].width.is_leading() {
            self.inner[cols - 1].reset();
        }
        self.inner.resize(cols, Cell::default());
        log::debug!("row resized from {old} to {cols} columns");
    }

    fn check_column(&self, col: Column) -> Result<()> {
        let cols = self.cols();
        if col.0 >= cols {
            return Err(InvalidArgument::ColumnOutOfRange {
                column: col.0,
                cols,
            });
        }
        Ok(())
    }

    fn clamped(&self, col: Column) -> Option<usize> {
        self.cols().checked_sub(1).map(|last| col.0.min(last))
    }

    /// Store a glyph at `col`; a `Leading` glyph also claims `col + 1`.
    fn put(&mut self, col: usize, cell: OutputCell) {
        self.break_pair_at(col);
        self.inner[col] = Cell {
            ch: cell.ch,
            attrs: cell.attrs,
            width: cell.width,
        };

        if cell.width.is_leading() {
            self.break_pair_at(col + 1);
            let trailing = &mut self.inner[col + 1];
            trailing.ch = ' ';
            trailing.attrs = cell.attrs;
            trailing.width.set_trailing();
        }
    }

    /// If `col` is half of a pair, blank the other half.
    fn break_pair_at(&mut self, col: usize) {
        let width = self.inner[col].width;
        let partner = match width.role() {
            DbcsRole::Single => return,
            DbcsRole::Leading => col + 1,
            DbcsRole::Trailing => match col.checked_sub(1) {
                Some(prev) => prev,
                None => return,
            },
        };
        if let Some(cell) = self.inner.get_mut(partner) {
            log::trace!("column {col}: overwrite splits a {width} half, blanking column {partner}");
            cell.reset();
        }
        self.inner[col].width.reset();
    }
}

impl Index<Column> for Row {
    type Output = Cell;

    fn index(&self, col: Column) -> &Cell {
        &self.inner[col.0]
    }
}
