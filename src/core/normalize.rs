//! Input normalization shared by all country validators.

/// Separators stripped from Italian, Swiss and French identifiers.
pub const DOT_SEPARATORS: &[char] = &['.'];

/// Separators stripped from Austrian identifiers.
pub const DASH_SLASH_SEPARATORS: &[char] = &['-', '/'];

/// Uppercase `input` and drop whitespace plus every character in `strip`.
///
/// ```
/// use nationalid::core::normalize;
///
/// assert_eq!(normalize(" rss.mra 80a01h501u ", &['.']), "RSSMRA80A01H501U");
/// ```
pub fn normalize(input: &str, strip: &[char]) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !strip.contains(c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// True if every byte of `s` is an ASCII digit (and `s` is non-empty).
pub(crate) fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric value of an ASCII digit byte.
pub(crate) fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}
