//! One-unit lookahead over the text being scanned.

use crate::error::{CmdlineError, NulLocation};
use crate::units::Unit;

/// Scan position over an `(offset, unit)` stream.
///
/// `current` is the unit under the cursor, or `None` once the input is
/// exhausted. Every advance rejects NUL, so a scan never sees one.
pub(crate) struct Cursor<U, I> {
    units: I,
    current: Option<U>,
    offset: usize,
    end: usize,
    /// Element index when scanning an argument to encode; `None` when
    /// scanning a whole command line.
    element: Option<usize>,
}

impl<U: Unit, I: Iterator<Item = (usize, U)>> Cursor<U, I> {
    /// Cursor over a command line being decoded.
    pub(crate) fn over_command(units: I, end: usize) -> Result<Self, CmdlineError> {
        Self::start(units, end, None)
    }

    /// Cursor over element `index` of a sequence being encoded.
    pub(crate) fn over_argument(units: I, end: usize, index: usize) -> Result<Self, CmdlineError> {
        Self::start(units, end, Some(index))
    }

    fn start(units: I, end: usize, element: Option<usize>) -> Result<Self, CmdlineError> {
        let mut cursor = Self {
            units,
            current: None,
            offset: 0,
            end,
            element,
        };
        cursor.advance()?;
        Ok(cursor)
    }

    /// Move to the next unit. Past the end this is a no-op.
    pub(crate) fn advance(&mut self) -> Result<(), CmdlineError> {
        match self.units.next() {
            Some((offset, unit)) => {
                self.offset = offset;
                if unit == U::NUL {
                    return Err(CmdlineError::InvalidNulCharacter {
                        location: self.location(),
                    });
                }
                self.current = Some(unit);
            }
            None => {
                self.offset = self.end;
                self.current = None;
            }
        }
        Ok(())
    }

    pub(crate) fn current(&self) -> Option<U> {
        self.current
    }

    /// Offset of the current unit, or the input length at the end.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn at_end(&self) -> bool {
        self.current.is_none()
    }

    pub(crate) fn at(&self, unit: U) -> bool {
        self.current == Some(unit)
    }

    pub(crate) fn at_quote(&self) -> bool {
        self.at(U::QUOTE)
    }

    pub(crate) fn at_separator(&self) -> bool {
        self.current.is_some_and(U::is_separator)
    }

    /// Consume a maximal run of `unit` and return its length.
    pub(crate) fn skip_run(&mut self, unit: U) -> Result<usize, CmdlineError> {
        let mut count = 0;
        while self.at(unit) {
            count += 1;
            self.advance()?;
        }
        Ok(count)
    }

    fn location(&self) -> NulLocation {
        match self.element {
            Some(index) => NulLocation::Argument {
                index,
                offset: self.offset,
            },
            None => NulLocation::Command {
                offset: self.offset,
            },
        }
    }
}

/// `(byte offset, char)` stream over a string slice.
pub(crate) fn chars(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    text.char_indices()
}

/// `(index, unit)` stream over UTF-16 code units.
pub(crate) fn wide(text: &[u16]) -> impl Iterator<Item = (usize, u16)> + '_ {
    text.iter().copied().enumerate()
}
