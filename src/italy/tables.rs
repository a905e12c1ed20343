//! Fixed lookup tables of the Codice Fiscale algorithm.

/// Check-character weights for odd (1-indexed) positions, digits `0`-`9`.
pub(super) const ODD_DIGIT_VALUES: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];

/// Check-character weights for odd (1-indexed) positions, letters `A`-`Z`.
pub(super) const ODD_LETTER_VALUES: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Omocodia letters; the index of each letter is the digit it replaces.
pub(super) const OMOCODIA_LETTERS: [u8; 10] = *b"LMNPQRSTUV";

/// Month letters; index 0 is January.
pub(super) const MONTH_LETTERS: [u8; 12] = *b"ABCDEHLMPRST";

/// 0-indexed positions that hold digits but may carry an omocodia letter.
pub(super) const OMOCODIA_SLOTS: [usize; 7] = [6, 7, 9, 10, 12, 13, 14];

/// Weight of `c` at an odd (1-indexed) position.
pub(super) fn odd_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(ODD_DIGIT_VALUES[usize::from(c - b'0')]),
        b'A'..=b'Z' => Some(ODD_LETTER_VALUES[usize::from(c - b'A')]),
        _ => None,
    }
}

/// Weight of `c` at an even (1-indexed) position.
pub(super) fn even_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'A'..=b'Z' => Some(u32::from(c - b'A')),
        _ => None,
    }
}

/// Digit replaced by an omocodia letter.
pub(super) fn omocodia_digit(c: u8) -> Option<u8> {
    OMOCODIA_LETTERS
        .iter()
        .position(|&l| l == c)
        .map(|d| b'0' + d as u8)
}

/// Month number (1-12) for a month letter.
pub(super) fn month_number(c: u8) -> Option<u32> {
    MONTH_LETTERS
        .iter()
        .position(|&l| l == c)
        .map(|m| m as u32 + 1)
}
