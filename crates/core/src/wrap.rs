/// Characters per comment line on the slip.
pub const COMMENT_WRAP_WIDTH: usize = 100;

/// Splits `text` into lines of at most `width` characters.
///
/// A line is cut at the last space inside the window and that space is
/// dropped. When the window has no usable space (none, or only at its very
/// start) the line is cut hard at `width` and nothing is dropped.
pub fn wrap_comment(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut rest = &chars[..];

    while !rest.is_empty() {
        if rest.len() <= width {
            lines.push(rest.iter().collect());
            break;
        }

        let window = &rest[..width];
        match window.iter().rposition(|c| *c == ' ') {
            Some(end) if end > 0 => {
                lines.push(window[..end].iter().collect());
                rest = &rest[end + 1..];
            }
            _ => {
                lines.push(window.iter().collect());
                rest = &rest[width..];
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_comment("Bel aan bij de buren", 100), ["Bel aan bij de buren"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_comment("", 100).is_empty());
    }

    #[test]
    fn exactly_width_is_not_split() {
        let text = "a".repeat(100);
        assert_eq!(wrap_comment(&text, 100), [text]);
    }

    #[test]
    fn breaks_at_last_space_in_window() {
        assert_eq!(
            wrap_comment("aaa bbb ccc ddd", 9),
            ["aaa bbb", "ccc ddd"]
        );
    }

    #[test]
    fn space_just_past_window_is_not_used() {
        // window is "aaaa bbbbb"; the space at index 10 lies outside it
        assert_eq!(wrap_comment("aaaa bbbbb ccc", 10), ["aaaa", "bbbbb ccc"]);
    }

    #[test]
    fn hard_cut_without_spaces() {
        let text = "x".repeat(250);
        let lines = wrap_comment(&text, 100);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 100);
        assert_eq!(lines[1].len(), 100);
        assert_eq!(lines[2].len(), 50);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn leading_space_only_forces_hard_cut() {
        let text = format!(" {}", "y".repeat(12));
        assert_eq!(wrap_comment(&text, 10), [format!(" {}", "y".repeat(9)), "yyy".to_string()]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "é".repeat(15);
        let lines = wrap_comment(&text, 10);
        assert_eq!(lines, ["é".repeat(10), "é".repeat(5)]);
    }

    #[test]
    fn realistic_comment() {
        let comment = "Graag bezorgen na 17:00 uur. Als er niemand thuis is mag het pakket bij \
                       nummer 12 worden afgegeven, daar woont mijn moeder en die is altijd thuis.";
        let lines = wrap_comment(comment, COMMENT_WRAP_WIDTH);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.chars().count() <= COMMENT_WRAP_WIDTH));
        assert_eq!(lines.join(" "), comment);
    }

    #[test]
    fn zero_width_is_treated_as_one() {
        assert_eq!(wrap_comment("ab", 0), ["a", "b"]);
    }
}
