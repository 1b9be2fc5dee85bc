//! Encoding of an argument sequence into a single command line.
//!
//! Every element is wrapped in quotes, even when nothing in it needs quoting.
//! Arguments are joined with a single space.
//!
//! The program (element 0) is copied verbatim between its quotes: backslashes
//! are ordinary characters there and quotes cannot be expressed at all. Other
//! arguments escape quotes and the backslashes that precede them, so that the
//! native decoder recovers them exactly:
//!
//! | argument   | encoded        |
//! |------------|----------------|
//! | `a b`      | `"a b"`        |
//! | `a"b`      | `"a\"b"`       |
//! | `a\b`      | `"a\b"`        |
//! | `a\"b`     | `"a\\\"b"`     |
//! | `a\`       | `"a\\"`        |
//! | (empty)    | `""`           |

use crate::cursor::{self, Cursor};
use crate::error::CmdlineError;
use crate::units::Unit;

/// Encode `args` into a command line for the process-creation call.
///
/// `args[0]` is the program. A native argument parser splitting the result
/// recovers exactly `args`.
///
/// # Errors
///
/// - [`CmdlineError::EmptyCommand`] if `args` is empty.
/// - [`CmdlineError::InvalidNulCharacter`] if any element contains NUL.
/// - [`CmdlineError::InvalidProgramCharacter`] if the program contains `"`.
///
/// ```
/// use wincmdline_core::encode;
///
/// let line = encode(&["C:\\Tools\\grep.exe", "-e", "say \"hi\""]).unwrap();
/// assert_eq!(line, r#""C:\Tools\grep.exe" "-e" "say \"hi\"""#);
/// ```
pub fn encode<S: AsRef<str>>(args: &[S]) -> Result<String, CmdlineError> {
    tracing::trace!(args = args.len(), "encoding command line");
    let encoded = encode_units(args.iter().map(|arg| {
        let arg = arg.as_ref();
        (cursor::chars(arg), arg.len())
    }));
    log_outcome::<char>(&encoded);
    encoded
}

/// Encode `args` given as UTF-16 code units.
///
/// Same rules as [`encode`]. Units other than quote, backslash and NUL are
/// copied through untouched, including unpaired surrogates.
///
/// # Errors
///
/// As for [`encode`]; offsets count code units.
pub fn encode_wide<S: AsRef<[u16]>>(args: &[S]) -> Result<Vec<u16>, CmdlineError> {
    tracing::trace!(args = args.len(), "encoding wide command line");
    let encoded = encode_units(args.iter().map(|arg| {
        let arg = arg.as_ref();
        (cursor::wide(arg), arg.len())
    }));
    log_outcome::<u16>(&encoded);
    encoded
}

fn log_outcome<U: Unit>(encoded: &Result<U::Text, CmdlineError>) {
    match encoded {
        Ok(line) => tracing::trace!(len = U::len(line), "encoded command line"),
        Err(error) => tracing::debug!(%error, "rejected command for encoding"),
    }
}

/// Each item is the `(offset, unit)` stream of one element and its length.
fn encode_units<U, I, A>(args: A) -> Result<U::Text, CmdlineError>
where
    U: Unit,
    I: Iterator<Item = (usize, U)>,
    A: IntoIterator<Item = (I, usize)>,
{
    let mut line = U::Text::default();
    let mut args = args.into_iter().enumerate();

    let Some((_, (program, len))) = args.next() else {
        return Err(CmdlineError::EmptyCommand);
    };
    encode_program(&mut line, Cursor::over_argument(program, len, 0)?)?;

    for (index, (arg, len)) in args {
        U::push(&mut line, U::SPACE);
        encode_arg(&mut line, Cursor::over_argument(arg, len, index)?)?;
    }
    Ok(line)
}

/// Backslashes are ordinary in the program and quotes are not allowed.
fn encode_program<U, I>(line: &mut U::Text, mut cursor: Cursor<U, I>) -> Result<(), CmdlineError>
where
    U: Unit,
    I: Iterator<Item = (usize, U)>,
{
    U::push(line, U::QUOTE);
    while let Some(unit) = cursor.current() {
        if unit == U::QUOTE {
            return Err(CmdlineError::InvalidProgramCharacter {
                offset: cursor.offset(),
            });
        }
        U::push(line, unit);
        cursor.advance()?;
    }
    U::push(line, U::QUOTE);
    Ok(())
}

fn encode_arg<U, I>(line: &mut U::Text, mut cursor: Cursor<U, I>) -> Result<(), CmdlineError>
where
    U: Unit,
    I: Iterator<Item = (usize, U)>,
{
    U::push(line, U::QUOTE);
    while let Some(unit) = cursor.current() {
        if unit == U::BACKSLASH {
            encode_backslashes(line, &mut cursor)?;
        } else if unit == U::QUOTE {
            U::push_escaped_quote(line);
            cursor.advance()?;
        } else {
            U::push(line, unit);
            cursor.advance()?;
        }
    }
    U::push(line, U::QUOTE);
    Ok(())
}

/// n backslashes followed by a quote become 2n + 1 backslashes and the quote.
/// n trailing backslashes become 2n, so the closing quote stays unescaped.
/// n backslashes followed by anything else stay n; the cursor is left on
/// that unit for the caller.
fn encode_backslashes<U, I>(
    line: &mut U::Text,
    cursor: &mut Cursor<U, I>,
) -> Result<(), CmdlineError>
where
    U: Unit,
    I: Iterator<Item = (usize, U)>,
{
    let n = cursor.skip_run(U::BACKSLASH)?;
    if cursor.at_quote() {
        U::push_n(line, U::BACKSLASH, 2 * n);
        U::push_escaped_quote(line);
        cursor.advance()?;
    } else if cursor.at_end() {
        U::push_n(line, U::BACKSLASH, 2 * n);
    } else {
        U::push_n(line, U::BACKSLASH, n);
    }
    Ok(())
}
