//! Builds the keypad fingerprint of a record's name.

use crate::keypad::{self, Normalization};
use crate::types::Fingerprint;
use unicode_segmentation::UnicodeSegmentation;

/// Encodes `"{first} {last}"`, lowercased, into keypad digits.
///
/// Characters without a digit (including the separating space) are skipped,
/// so the first name's digits run straight into the last name's.
pub fn build_fingerprint(first_name: &str, last_name: &str) -> Fingerprint {
    build_fingerprint_with(first_name, last_name, Normalization::Never)
}

/// Like [`build_fingerprint`], applying `normalization` to accented letters.
///
/// Names are walked by grapheme cluster, so a precomposed `é` and an `e`
/// followed by a combining accent encode the same way.
pub fn build_fingerprint_with(
    first_name: &str,
    last_name: &str,
    normalization: Normalization,
) -> Fingerprint {
    let first = first_name.to_lowercase();
    let last = last_name.to_lowercase();

    let mut digits = String::with_capacity(first.len() + last.len());
    let graphemes = first
        .graphemes(true)
        .chain(std::iter::once(" "))
        .chain(last.graphemes(true));
    digits.extend(graphemes.filter_map(|g| keypad::encode_grapheme(g, normalization)));

    Fingerprint::from_digits(digits)
}
