//! Code units understood by the command-line grammar.
//!
//! Both directions work on a stream of code units: Unicode scalar values for
//! `&str` input and raw UTF-16 units for wide input. Only five units carry
//! meaning (quote, backslash, space, tab, NUL); everything else is copied
//! through untouched, so unpaired surrogates in wide input are preserved.

/// A single code unit of a command line, plus the buffer it accumulates into.
pub(crate) trait Unit: Copy + Eq {
    /// Owned text built from units of this kind.
    type Text: Default + Clone;

    /// `"`: opens and closes quoted spans.
    const QUOTE: Self;
    /// `\`: escapes a following quote.
    const BACKSLASH: Self;
    /// Argument separator.
    const SPACE: Self;
    /// Argument separator.
    const TAB: Self;
    /// Never valid in a command line.
    const NUL: Self;

    /// Append one unit to `text`.
    fn push(text: &mut Self::Text, unit: Self);

    /// Length of `text` in units of this kind.
    fn len(text: &Self::Text) -> usize;

    /// Space and horizontal tab separate arguments; nothing else does.
    fn is_separator(self) -> bool {
        self == Self::SPACE || self == Self::TAB
    }

    /// Append `count` copies of `unit` to `text`.
    fn push_n(text: &mut Self::Text, unit: Self, count: usize) {
        for _ in 0..count {
            Self::push(text, unit);
        }
    }

    /// Append a quote escaped with one backslash.
    fn push_escaped_quote(text: &mut Self::Text) {
        Self::push(text, Self::BACKSLASH);
        Self::push(text, Self::QUOTE);
    }
}

impl Unit for char {
    type Text = String;

    const QUOTE: Self = '"';
    const BACKSLASH: Self = '\\';
    const SPACE: Self = ' ';
    const TAB: Self = '\t';
    const NUL: Self = '\0';

    fn push(text: &mut String, unit: char) {
        text.push(unit);
    }

    fn len(text: &String) -> usize {
        text.len()
    }
}

impl Unit for u16 {
    type Text = Vec<u16>;

    const QUOTE: Self = b'"' as u16;
    const BACKSLASH: Self = b'\\' as u16;
    const SPACE: Self = b' ' as u16;
    const TAB: Self = b'\t' as u16;
    const NUL: Self = 0;

    fn push(text: &mut Vec<u16>, unit: u16) {
        text.push(unit);
    }

    fn len(text: &Vec<u16>) -> usize {
        text.len()
    }
}
