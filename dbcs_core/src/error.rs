//! Error type for rejected arguments.

use thiserror::Error;

/// An argument the caller should never have passed.
///
/// Raised at the public attribute boundary when a word claims a cell is both
/// halves of a double-width glyph, and by the row entry points that take an
/// explicit column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("attribute word {word:#06x} sets both LEADING_BYTE and TRAILING_BYTE")]
    LeadingAndTrailing { word: u16 },

    #[error("column {column} out of range for a row of {cols} columns")]
    ColumnOutOfRange { column: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;
