// The blank set is the classic isspace() one: space, tab, newline,
// carriage return, form feed, vertical tab. Deliberately not Unicode-aware.
const BLANKS: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// Strip leading and trailing blanks, returning a sub-slice of the input.
///
/// All-blank or empty input yields `""`. Never fails, never copies.
pub fn trim_blanks(input: &str) -> &str {
    input.trim_matches(BLANKS)
}

pub(crate) fn is_blank(ch: char) -> bool {
    BLANKS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_both_ends() {
        assert_eq!(trim_blanks("  ls -la\t\n"), "ls -la");
        assert_eq!(trim_blanks("\x0b\x0c word \r"), "word");
    }

    #[test]
    fn interior_blanks_untouched() {
        assert_eq!(trim_blanks("  a \t b  "), "a \t b");
    }

    #[test]
    fn empty_and_all_blank() {
        assert_eq!(trim_blanks(""), "");
        assert_eq!(trim_blanks(" \t\r\n\x0b\x0c"), "");
    }

    #[test]
    fn idempotent() {
        let once = trim_blanks("   echo hi   ");
        assert_eq!(trim_blanks(once), once);
    }
}
