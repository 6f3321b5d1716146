/// Utility functions for cleaning and parsing model output.

/// Extract the items of a numbered list ("1. Foo" or "2) Bar").
///
/// Lines that do not start with a digit are ignored, as is anything before
/// the first `.` or `)` on a matching line. A digit-prefixed line with
/// neither separator is skipped.
pub fn parse_numbered_list(text: &str) -> Vec<String> {
    let mut items = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !line.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }

        let rest = match line.split_once('.') {
            Some((_, rest)) => rest,
            None => match line.split_once(')') {
                Some((_, rest)) => rest,
                None => continue,
            },
        };

        let cleaned = rest.trim();
        if !cleaned.is_empty() {
            items.push(cleaned.to_string());
        }
    }

    items
}

/// Collapse runs of three or more newlines down to paragraph breaks and
/// trim surrounding whitespace.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newline_run = 0usize;

    for ch in text.replace('\r', "\n").chars() {
        if ch == '\n' {
            newline_run += 1;
            if newline_run <= 2 {
                out.push(ch);
            }
        } else {
            newline_run = 0;
            out.push(ch);
        }
    }

    out.trim().to_string()
}
