//! Base name ordering
//!
//! Names are collated in three levels, the way the root locale orders
//! them: base characters first, then accents, then case. Byte order breaks
//! whatever is still tied so that the ordering is total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// ASCII punctuation and symbols in root collation order
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Character groups, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

/// One collation element: a base character and what is attached to it
#[derive(Debug)]
struct Element {
    primary: (Group, u32),
    accents: Vec<char>,
    uppercase: bool,
}

/// Compares two base names for sorting
///
/// The primary level ignores accents and case. Whitespace sorts before
/// punctuation, punctuation before symbols, symbols before digits and
/// digits before letters. Names equal at that level are ordered by their
/// accents (unaccented first), then by case (lowercase first) and finally
/// by bytes.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use file_renumber::naming::compare_base_names;
///
/// assert_eq!(compare_base_names("apple.txt", "Banana.txt"), Ordering::Less);
/// assert_eq!(compare_base_names("éclair.txt", "fig.txt"), Ordering::Less);
/// assert_eq!(compare_base_names("notes.txt", "Notes.txt"), Ordering::Less);
/// ```
pub fn compare_base_names(a: &str, b: &str) -> Ordering {
    let elements_a = elements(a);
    let elements_b = elements(b);

    compare_level(&elements_a, &elements_b, |e| e.primary)
        .then_with(|| compare_level(&elements_a, &elements_b, |e| e.accents.clone()))
        .then_with(|| compare_level(&elements_a, &elements_b, |e| e.uppercase))
        .then_with(|| a.cmp(b))
}

fn compare_level<K: Ord>(
    a: &[Element],
    b: &[Element],
    key: impl Fn(&Element) -> K,
) -> Ordering {
    a.iter().map(&key).cmp(b.iter().map(&key))
}

fn elements(name: &str) -> Vec<Element> {
    let mut elements: Vec<Element> = Vec::with_capacity(name.len());

    for c in name.nfd() {
        if is_combining_mark(c) {
            // A leading mark has no base character to attach to
            if let Some(last) = elements.last_mut() {
                last.accents.push(c);
            }
            continue;
        }

        for folded in c.to_lowercase() {
            elements.push(Element {
                primary: primary_weight(folded),
                accents: Vec::new(),
                uppercase: c.is_uppercase(),
            });
        }
    }

    elements
}

fn primary_weight(c: char) -> (Group, u32) {
    if c.is_whitespace() || c.is_control() {
        return (Group::Whitespace, c as u32);
    }
    if let Some(rank) = PUNCTUATION_ORDER.find(c) {
        return (Group::Punctuation, rank as u32);
    }
    if let Some(digit) = c.to_digit(10) {
        return (Group::Digit, digit);
    }
    if c.is_numeric() {
        return (Group::Digit, c as u32);
    }
    if c.is_alphabetic() {
        return (Group::Letter, c as u32);
    }
    // Non-ASCII punctuation and symbols follow the ASCII ones
    (Group::Symbol, c as u32)
}
