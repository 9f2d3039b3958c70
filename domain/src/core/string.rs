//! String utilities for the domain layer.

/// Single-line preview of user text for log records.
///
/// Newlines collapse to spaces and the result is cut at `max_len` bytes on
/// a UTF-8 character boundary, with `...` appended when cut.
pub fn preview(s: &str, max_len: usize) -> String {
    let flat: String = s
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if flat.len() <= max_len {
        return flat;
    }
    let mut end = max_len.saturating_sub(3).min(flat.len());
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("period pain", 40), "period pain");
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("line one\n  line two", 40), "line one line two");
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("hygiene questions", 10), "hygiene...");
    }

    #[test]
    fn test_preview_multibyte_boundary() {
        // 'é' is 2 bytes; cutting inside it backs up to the previous char
        assert_eq!(preview("éééééé", 9), "ééé...");
        assert_eq!(preview("éééééé", 8), "éé...");
    }
}
