//! Text normalization for joke comparison.
//!
//! Raw submissions arrive with arbitrary casing, punctuation, whitespace and
//! Polish diacritics. Before any similarity scoring, both sides of a
//! comparison are reduced to a canonical form so that `"Żółw!"` and `"zolw"`
//! compare as identical.
//!
//! The pipeline, in order:
//!
//! 1. Unicode NFC composition, so decomposed diacritics (base letter plus
//!    combining mark) behave like their precomposed forms.
//! 2. Locale-free Unicode lowercasing.
//! 3. Stripping of a fixed punctuation set: `. , ! ? ; : ' "`.
//! 4. Folding of Polish diacritics to base Latin letters (ą→a, ż→z, ...).
//! 5. Whitespace collapsing: every run of whitespace becomes one ASCII
//!    space, edges trimmed.
//!
//! The result is idempotent: normalizing already-normalized text is a no-op.
//! No I/O, no locale dependence; same input, same output, on any machine.

use unicode_normalization::UnicodeNormalization;

/// Punctuation characters removed during normalization.
///
/// Deliberately a fixed set rather than all of Unicode punctuation: hyphens,
/// parentheses and ellipsis characters carry meaning in joke set-ups and are
/// kept as-is.
const STRIPPED_PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', '\'', '"'];

/// Canonicalize raw joke text into its comparison form.
///
/// Returns the empty string for empty or whitespace-only input.
///
/// # Examples
///
/// ```rust
/// use zartdup::normalize_text;
///
/// assert_eq!(normalize_text("Żółw  chodzi!!"), "zolw chodzi");
/// assert_eq!(normalize_text("  Jak się  nazywa? "), "jak sie nazywa");
/// ```
pub fn normalize_text(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.nfc() {
        // Lowercasing can expand a single character into multiple.
        for lower in ch.to_lowercase() {
            if STRIPPED_PUNCTUATION.contains(&lower) {
                continue;
            }
            folded.push(fold_polish(lower));
        }
    }
    collapse_whitespace(&folded)
}

/// Collapses repeated whitespace, trims edges, and normalizes newlines and
/// tabs to single spaces.
///
/// Deterministic and useful on its own for callers that need
/// whitespace-normalized text without the full normalization pipeline.
///
/// ```rust
/// use zartdup::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  hello \t\n world  "), "hello world");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Maps a lowercase Polish diacritic to its base Latin letter.
///
/// Uppercase forms are handled upstream: the pipeline lowercases before
/// folding, so `Ż` arrives here as `ż`.
fn fold_polish(ch: char) -> char {
    match ch {
        'ą' => 'a',
        'ć' => 'c',
        'ę' => 'e',
        'ł' => 'l',
        'ń' => 'n',
        'ó' => 'o',
        'ś' => 's',
        'ź' => 'z',
        'ż' => 'z',
        other => other,
    }
}
