//! Worked examples of both directions.
//!
//! Raw string literals keep quotes and backslashes at their literal values,
//! exactly as they appear on a command line.

use wincmdline_core::{CmdlineError, NulLocation, decode, encode};

fn assert_decodes(command: &str, program: &str, args: &[&str]) {
    let decoded = decode(command).unwrap_or_else(|e| panic!("decode {command:?}: {e}"));
    assert_eq!(decoded.program, program, "program of {command:?}");
    assert_eq!(decoded.args, args, "args of {command:?}");
}

// ── Encoding ────────────────────────────────────────────────────────────

#[test]
fn encode_always_quotes() {
    assert_eq!(
        encode(&["program", "abc", " ab", "a b", "ab "]).unwrap(),
        r#""program" "abc" " ab" "a b" "ab ""#
    );
}

#[test]
fn encode_empty_and_unbalanced_quotes() {
    assert_eq!(
        encode(&["program path", "", r#""a b""#, r#""a b"#, r#"a" b"#, r#"a b""#]).unwrap(),
        r#""program path" "" "\"a b\"" "\"a b" "a\" b" "a b\"""#
    );
}

#[test]
fn encode_backslashes_before_non_quote() {
    assert_eq!(
        encode(&["program path", r"a\b", r"a\\b"]).unwrap(),
        r#""program path" "a\b" "a\\b""#
    );
}

#[test]
fn encode_backslashes_before_quote() {
    assert_eq!(
        encode(&["program path", r#"a\"b"#, r#"a\\"b"#]).unwrap(),
        r#""program path" "a\\\"b" "a\\\\\"b""#
    );
}

#[test]
fn encode_trailing_backslashes() {
    assert_eq!(
        encode(&["program path", r"a\", r"a\\"]).unwrap(),
        r#""program path" "a\\" "a\\\\""#
    );
}

#[test]
fn encode_lone_whitespace_and_metacharacters() {
    assert_eq!(
        encode(&["program path", "  ", "<&^|%"]).unwrap(),
        r#""program path" "  " "<&^|%""#
    );
}

#[test]
fn encode_empty_argument() {
    assert_eq!(encode(&["program", ""]).unwrap(), r#""program" """#);
}

// ── Decoding ────────────────────────────────────────────────────────────

#[test]
fn decode_business_as_usual() {
    assert_decodes(
        r#""C:\Windows\System32\cmd.exe" /c batch.bat"#,
        r"C:\Windows\System32\cmd.exe",
        &[r"C:\Windows\System32\cmd.exe", "/c", "batch.bat"],
    );
}

#[test]
fn decode_quoted_argument_and_trailing_whitespace() {
    assert_decodes(
        r#""C:\Program Files\program path.exe" "some text.txt"  "#,
        r"C:\Program Files\program path.exe",
        &[r"C:\Program Files\program path.exe", "some text.txt"],
    );
}

#[test]
fn decode_cumbersome_quoting() {
    assert_decodes(
        r#""C:\Program Files\program path.exe" som"e "tex""t.t"x"t  "#,
        r"C:\Program Files\program path.exe",
        &[r"C:\Program Files\program path.exe", "some text.txt"],
    );
}

#[test]
fn decode_program_differs_from_first_argument() {
    assert_decodes(
        r#""C:\Program Files\program path.exe"som"e "tex""t.t"x"t   "#,
        r"C:\Program Files\program path.exe",
        &[r"C:\Program Files\program path.exesome text.txt"],
    );
    // Every glued character counts, including a second `e`.
    assert_decodes(
        r#""C:\Program Files\program path.exe"some"e "tex""t.t"x"t   "#,
        r"C:\Program Files\program path.exe",
        &[r"C:\Program Files\program path.exesomee text.txt"],
    );
}

#[test]
fn decode_backslashes_and_adjacent_quotes() {
    assert_decodes(
        r#""program" \" \\\" "" "C:\\" """Hi!"", said the guy, \"Hi!\"  "#,
        "program",
        &[
            "program",
            "\"",
            r#"\""#,
            "",
            r"C:\",
            r#""Hi!", said the guy, "Hi!"  "#,
        ],
    );
}

#[test]
fn decode_one_backslash_less() {
    assert_decodes(
        r#""program" \" \\" "" "C:\\" """Hi!"", said the guy, \"Hi!\" "#,
        "program",
        &[
            "program",
            "\"",
            r#"\ " C:\ "Hi!,"#,
            "said",
            "the",
            "guy,",
            r#""Hi!""#,
        ],
    );
}

#[test]
fn decode_adjacent_quote_idiom() {
    assert_decodes(r#""p" """Hi!"""#, "p", &["p", r#""Hi!""#]);
}

// ── Errors ──────────────────────────────────────────────────────────────

#[test]
fn encode_rejects_quoted_program() {
    assert_eq!(
        encode(&[r#"say "hi""#]).unwrap_err(),
        CmdlineError::InvalidProgramCharacter { offset: 4 }
    );
}

#[test]
fn nul_is_rejected_both_ways() {
    assert!(matches!(
        encode(&["p", "a\0b"]),
        Err(CmdlineError::InvalidNulCharacter {
            location: NulLocation::Argument { index: 1, offset: 1 }
        })
    ));
    assert!(matches!(
        decode("\"p\" \"a\0b\""),
        Err(CmdlineError::InvalidNulCharacter {
            location: NulLocation::Command { offset: 6 }
        })
    ));
}

#[test]
fn decode_rejects_unquoted_program() {
    assert_eq!(
        decode(r"C:\Windows\notepad.exe file.txt").unwrap_err(),
        CmdlineError::MissingProgramQuote
    );
}
