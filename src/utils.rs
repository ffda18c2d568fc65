#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Truncates a string slice to the new length.
pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Pads a string slice with spaces to the new length.
pub fn add_padding(s: &str, len: usize) -> String {
    let mut result = String::with_capacity(len);
    result.push_str(truncate(s, len));

    let padding_len = len.saturating_sub(s.chars().count());
    (0..padding_len).for_each(|_| result.push(' '));

    result
}
