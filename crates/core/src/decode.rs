//! Decoding of a command line into the program and its arguments.
//!
//! Follows the argument grammar of the native C/C++ runtime, with one
//! restriction: the program must be quoted. The filesystem is never consulted
//! to guess where an unquoted program ends.
//!
//! Arguments are separated by runs of spaces and tabs outside quoted spans.
//!
//! The first argument is a sequence of *plain* quoted and unquoted parts,
//! starting with a plain quoted part. Backslashes and doubled quotes have no
//! special meaning in it. Only that leading quoted part names the program, so
//! text glued onto its closing quote ends up in `args[0]` but not in
//! `program`:
//!
//! ```text
//! command = ["C:\Program Files\program path.exe"som"e "tex""t.t"x"t   ]
//! program = [C:\Program Files\program path.exe]
//! args[0] = [C:\Program Files\program path.exesome text.txt]
//! ```
//!
//! Every other argument is a sequence of quoted and unquoted parts where
//! backslash runs and doubled quotes are interpreted:
//!
//! - `2k` backslashes before a quote yield `k` backslashes; the quote then
//!   opens or closes a quoted part.
//! - `2k + 1` backslashes before a quote yield `k` backslashes and a literal
//!   quote.
//! - Backslashes not before a quote are literal.
//! - Inside a quoted part, `""` yields a literal quote and the part stays
//!   open.
//! - An unterminated quoted part runs to the end of the line.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cursor::{self, Cursor};
use crate::error::CmdlineError;
use crate::units::Unit;

/// A decoded command line.
///
/// `args[0]` is the full first argument; `program` is only its leading
/// quoted part. They differ when unseparated text follows the program's
/// closing quote.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodedCommand<S = String> {
    /// The program, as named by the leading quoted part of the line.
    pub program: S,
    /// All arguments, starting with the first one.
    pub args: Vec<S>,
}

impl<S> DecodedCommand<S> {
    /// The program named by the command line.
    pub fn program(&self) -> &S {
        &self.program
    }

    /// All arguments, `args()[0]` included.
    pub fn args(&self) -> &[S] {
        &self.args
    }

    /// Split into the program and the argument list.
    pub fn into_parts(self) -> (S, Vec<S>) {
        (self.program, self.args)
    }
}

/// Decode `command` into the program and its arguments.
///
/// # Errors
///
/// - [`CmdlineError::MissingProgramQuote`] if `command` does not start with
///   `"` (leading whitespace is not skipped).
/// - [`CmdlineError::InvalidNulCharacter`] if `command` contains NUL.
///
/// ```
/// use wincmdline_core::decode;
///
/// let cmd = decode(r#""C:\Windows\System32\cmd.exe" /c batch.bat"#).unwrap();
/// assert_eq!(cmd.program, r"C:\Windows\System32\cmd.exe");
/// assert_eq!(cmd.args, [r"C:\Windows\System32\cmd.exe", "/c", "batch.bat"]);
/// ```
pub fn decode(command: &str) -> Result<DecodedCommand, CmdlineError> {
    tracing::trace!(len = command.len(), "decoding command line");
    let decoded = Cursor::over_command(cursor::chars(command), command.len())
        .and_then(|cursor| Decoder::new(cursor).run());
    log_outcome(&decoded);
    decoded
}

/// Decode a command line given as UTF-16 code units.
///
/// Same grammar as [`decode`]; units other than quote, backslash, space,
/// tab and NUL are copied through untouched.
///
/// # Errors
///
/// As for [`decode`]; offsets count code units.
pub fn decode_wide(command: &[u16]) -> Result<DecodedCommand<Vec<u16>>, CmdlineError> {
    tracing::trace!(len = command.len(), "decoding wide command line");
    let decoded = Cursor::over_command(cursor::wide(command), command.len())
        .and_then(|cursor| Decoder::new(cursor).run());
    log_outcome(&decoded);
    decoded
}

fn log_outcome<S>(decoded: &Result<DecodedCommand<S>, CmdlineError>) {
    match decoded {
        Ok(cmd) => tracing::trace!(args = cmd.args.len(), "decoded command line"),
        Err(error) => tracing::debug!(%error, "rejected command line"),
    }
}

struct Decoder<U: Unit, I> {
    cursor: Cursor<U, I>,
    arg: U::Text,
    args: Vec<U::Text>,
}

impl<U: Unit, I: Iterator<Item = (usize, U)>> Decoder<U, I> {
    fn new(cursor: Cursor<U, I>) -> Self {
        Self {
            cursor,
            arg: U::Text::default(),
            args: Vec::new(),
        }
    }

    fn run(mut self) -> Result<DecodedCommand<U::Text>, CmdlineError> {
        let program = self.first_arg()?;
        while !self.cursor.at_end() {
            self.arg()?;
        }
        Ok(DecodedCommand {
            program,
            args: self.args,
        })
    }

    /// Returns the program; the whole first argument goes to `args`.
    fn first_arg(&mut self) -> Result<U::Text, CmdlineError> {
        if !self.cursor.at_quote() {
            return Err(CmdlineError::MissingProgramQuote);
        }
        self.plain_quoted_part()?;
        let program = self.arg.clone();

        while !self.at_arg_end() {
            if self.cursor.at_quote() {
                self.plain_quoted_part()?;
            } else {
                self.plain_unquoted_part()?;
            }
        }
        self.finish_arg()?;
        Ok(program)
    }

    fn arg(&mut self) -> Result<(), CmdlineError> {
        while !self.at_arg_end() {
            if self.cursor.at_quote() {
                self.quoted_part()?;
            } else {
                self.unquoted_part()?;
            }
        }
        self.finish_arg()
    }

    /// From the opening quote to the next quote or the end; the closing
    /// quote is consumed.
    fn plain_quoted_part(&mut self) -> Result<(), CmdlineError> {
        self.cursor.advance()?;
        while !self.cursor.at_quote() && !self.cursor.at_end() {
            self.take()?;
        }
        self.cursor.advance()
    }

    /// Up to the next separator, quote or the end.
    fn plain_unquoted_part(&mut self) -> Result<(), CmdlineError> {
        while !self.at_arg_end() && !self.cursor.at_quote() {
            self.take()?;
        }
        Ok(())
    }

    /// From the opening quote to a lone closing quote or the end. Each `""`
    /// inside yields one literal quote without closing the part.
    fn quoted_part(&mut self) -> Result<(), CmdlineError> {
        self.cursor.advance()?;
        loop {
            match self.cursor.current() {
                None => return Ok(()),
                Some(unit) if unit == U::QUOTE => {
                    self.cursor.advance()?;
                    if !self.cursor.at_quote() {
                        return Ok(());
                    }
                    self.take()?;
                }
                Some(unit) if unit == U::BACKSLASH => self.backslashes()?,
                Some(_) => self.take()?,
            }
        }
    }

    fn unquoted_part(&mut self) -> Result<(), CmdlineError> {
        while !self.at_arg_end() && !self.cursor.at_quote() {
            if self.cursor.at(U::BACKSLASH) {
                self.backslashes()?;
            } else {
                self.take()?;
            }
        }
        Ok(())
    }

    /// Before a quote, n backslashes yield n / 2; an odd run also consumes
    /// the quote as a literal. Anywhere else all n are literal.
    fn backslashes(&mut self) -> Result<(), CmdlineError> {
        let n = self.cursor.skip_run(U::BACKSLASH)?;
        if self.cursor.at_quote() {
            U::push_n(&mut self.arg, U::BACKSLASH, n / 2);
            if n % 2 == 1 {
                self.take()?;
            }
        } else {
            U::push_n(&mut self.arg, U::BACKSLASH, n);
        }
        Ok(())
    }

    fn at_arg_end(&self) -> bool {
        self.cursor.at_end() || self.cursor.at_separator()
    }

    /// Store the current argument and skip the separators after it.
    fn finish_arg(&mut self) -> Result<(), CmdlineError> {
        self.args.push(std::mem::take(&mut self.arg));
        while self.cursor.at_separator() {
            self.cursor.advance()?;
        }
        Ok(())
    }

    /// Append the current unit to the argument and move past it. Called only
    /// while a current unit exists.
    fn take(&mut self) -> Result<(), CmdlineError> {
        if let Some(unit) = self.cursor.current() {
            U::push(&mut self.arg, unit);
        }
        self.cursor.advance()
    }
}
