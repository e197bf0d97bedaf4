//! Whitespace as browsers see it
//!
//! Form values are trimmed and matched against `\s` in the page's script, and
//! browsers define that set differently from Unicode `White_Space`: U+FEFF
//! (byte order mark) counts, U+0085 (next line) does not. Every validator uses
//! this set so the native rules agree with what the page shows.

/// Characters in the regex class, as `regex` syntax
pub(crate) const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Whether `c` is whitespace for form input
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Whether `value` is empty once form whitespace is trimmed
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}
