//! Helpers for narrative filing text (Item 1A risk factors).

/// Default excerpt length for risk-factor text, in characters.
pub const DEFAULT_RISK_EXCERPT_CHARS: usize = 3000;

/// First `max_chars` characters of `text`, with a trailing `...` when
/// anything was cut. Counts characters rather than bytes, so multi-byte
/// text never splits mid-character.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut taken = String::with_capacity(text.len().min(max_chars * 4));
    let mut chars = text.chars();

    for _ in 0..max_chars {
        match chars.next() {
            Some(ch) => taken.push(ch),
            None => return taken,
        }
    }

    if chars.next().is_some() {
        taken.push_str("...");
    }
    taken
}
