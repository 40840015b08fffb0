//! Backslash escape scanning.

/// Decode one layer of backslash escapes.
///
/// Walks the input with an explicit cursor so every position is consumed
/// exactly once. Recognized pairs (`\n`, `\t`, `\r`, `\"`, `\'`, `\\`) become
/// one character. Any other backslash is kept and the cursor moves past it
/// alone, so the following character is examined on its own.
pub fn decode_escapes(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch == '\\' && i + 1 < chars.len() {
            if let Some(decoded) = unescape_char(chars[i + 1]) {
                out.push(decoded);
                i += 2;
                continue;
            }
        }
        out.push(ch);
        i += 1;
    }
    out
}

const fn unescape_char(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Escape text so that [`decode_escapes`] restores it.
///
/// Backslashes are doubled and quotes and control characters are written
/// as their two-character escapes.
pub fn reescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replace every line feed with a literal `\n`, leaving everything else alone.
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_escapes() {
        assert_eq!(decode_escapes(r"a\nb\tc\rd"), "a\nb\tc\rd");
        assert_eq!(decode_escapes(r#"say \"hi\" and \'bye\'"#), "say \"hi\" and 'bye'");
    }

    #[test]
    fn test_decode_backslash_before_n_stays_literal() {
        // `\\n` is an escaped backslash followed by a plain `n`.
        assert_eq!(decode_escapes(r"C:\\new"), r"C:\new");
    }

    #[test]
    fn test_decode_unknown_escape_keeps_backslash() {
        assert_eq!(decode_escapes(r"\d+ and \x"), r"\d+ and \x");
    }

    #[test]
    fn test_decode_unknown_escape_rescans_next_char() {
        // The `\q` backslash is kept; the following `\n` still decodes.
        assert_eq!(decode_escapes(r"\q\n"), "\\q\n");
    }

    #[test]
    fn test_decode_trailing_backslash_is_literal() {
        assert_eq!(decode_escapes("end\\"), "end\\");
        assert_eq!(decode_escapes("\\"), "\\");
    }

    #[test]
    fn test_decode_handles_multibyte_text() {
        assert_eq!(decode_escapes(r"影像1\n影像2"), "影像1\n影像2");
    }

    #[test]
    fn test_reescape_then_decode_restores_text() {
        let text = "a \"quoted\" C:\\path\n\tindented\r\n";
        assert_eq!(decode_escapes(&reescape(text)), text);
    }

    #[test]
    fn test_escape_newlines_only_touches_line_feeds() {
        assert_eq!(escape_newlines("a\nb\tc"), "a\\nb\tc");
    }
}
