//! Double-width cell tagging for terminal screen buffers.
//!
//! Some glyphs (most East-Asian ideographs, many emoji) occupy two adjacent
//! cells. This crate provides the per-cell tag recording whether a cell is a
//! plain single-width glyph or the leading/trailing half of a double-width
//! one, the 16-bit public attribute word that tag is exchanged through, and a
//! buffer row that keeps leading/trailing pairs consistent as glyphs are
//! written and erased. It contains no rendering or platform-specific code.

#![deny(unsafe_code)]

pub mod attr;
pub mod cell;
pub mod error;
pub mod index;
pub mod row;

pub use attr::PublicAttrs;
pub use cell::{Cell, CellWidthTag, DbcsRole};
pub use error::{InvalidArgument, Result};
pub use index::Column;
pub use row::{DelimiterClass, OutputCell, Row, RowGlyph, RowGlyphs};
