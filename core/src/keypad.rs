//! Letter-to-digit mapping of a standard telephone keypad.

use serde::{Deserialize, Serialize};

/// Keypad digit for each lowercase Latin letter, indexed by `letter - 'a'`.
pub const KEYPAD: [char; 26] = [
    '2', '2', '2', // a b c
    '3', '3', '3', // d e f
    '4', '4', '4', // g h i
    '5', '5', '5', // j k l
    '6', '6', '6', // m n o
    '7', '7', '7', '7', // p q r s
    '8', '8', '8', // t u v
    '9', '9', '9', '9', // w x y z
];

/// How characters outside plain `a`-`z` are treated before encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Accented letters and ligatures have no digit and are dropped.
    #[default]
    Never,
    /// Accented Latin letters are folded to their base letter first (`é` -> `e`).
    Fold,
}

/// Returns the keypad digit for `c`, or `None` if `c` has no mapping.
///
/// Uppercase letters are lowercased first. Digits, punctuation, whitespace and
/// non-Latin letters are never mapped.
pub fn encode(c: char) -> Option<char> {
    let lower = if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        let mut lowered = c.to_lowercase();
        match (lowered.next(), lowered.next()) {
            (Some(single), None) => single,
            _ => return None,
        }
    };

    match lower {
        'a'..='z' => Some(KEYPAD[(lower as u8 - b'a') as usize]),
        _ => None,
    }
}

/// Like [`encode`], applying `normalization` to `c` first.
pub fn encode_with(c: char, normalization: Normalization) -> Option<char> {
    match normalization {
        Normalization::Never => encode(c),
        Normalization::Fold => encode(nucleo::chars::normalize(c)),
    }
}

/// Encodes one user-perceived character (an extended grapheme cluster).
///
/// A cluster of several code points, such as `e` followed by a combining
/// acute accent, is a single accented letter: it is dropped under
/// [`Normalization::Never`], and under [`Normalization::Fold`] its base
/// character is encoded.
pub fn encode_grapheme(grapheme: &str, normalization: Normalization) -> Option<char> {
    let mut chars = grapheme.chars();
    let base = chars.next()?;
    match (chars.next(), normalization) {
        (None, _) => encode_with(base, normalization),
        (Some(_), Normalization::Never) => None,
        (Some(_), Normalization::Fold) => encode_with(base, normalization),
    }
}

/// Returns true if `c` can appear in an encoded fingerprint.
pub fn is_keypad_digit(c: char) -> bool {
    matches!(c, '2'..='9')
}
