//! Input clean-up for front-end adapters.

const STRIPPED: &[char] = &['<', '>', '"', '\'', '&', '\n', '\r', '\t'];

/// Remove markup-sensitive and control characters, cap the length at
/// `max_chars` characters, then trim.
pub fn sanitize(input: &str, max_chars: usize) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .take(max_chars)
        .collect();
    cleaned.trim().to_string()
}
