/// Shortens `text` to at most `max_chars` characters for one-line output.
///
/// Cuts at the last word break that fits and appends `…`. A single word
/// longer than the limit is cut mid-word.
pub fn clip_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    // room for the ellipsis
    let budget = max_chars - 1;
    let end = text
        .char_indices()
        .nth(budget)
        .map_or(text.len(), |(i, _)| i);
    let head = &text[..end];
    let head = match head.rfind(char::is_whitespace) {
        Some(i) if !head[..i].trim_end().is_empty() => head[..i].trim_end(),
        _ => head,
    };
    format!("{head}\u{2026}")
}
