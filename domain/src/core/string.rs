//! String utilities for the domain layer.

/// Collapse whitespace and cut a string to at most `max_chars` characters,
/// appending an ellipsis when something was cut.
///
/// Used to keep question text readable in single-line log records.
pub fn preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = collapsed.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short() {
        assert_eq!(preview("What is 2+2?", 40), "What is 2+2?");
    }

    #[test]
    fn test_preview_cuts_long_text() {
        assert_eq!(preview("Which planet is the largest?", 12), "Which pla...");
    }

    #[test]
    fn test_preview_collapses_newlines() {
        assert_eq!(preview("line one\n  line two", 40), "line one line two");
    }

    #[test]
    fn test_preview_multibyte() {
        // Counts characters, not bytes
        assert_eq!(preview("Qu'est-ce que c'est ?", 30), "Qu'est-ce que c'est ?");
        assert_eq!(preview("日本語のテスト問題", 6), "日本語...");
    }
}
