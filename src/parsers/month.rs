//! Month-name lexicon for Italian and English folder names.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const MONTH_TOKENS: &[(&str, u8)] = &[
    // Italian
    ("GENNAIO", 1),
    ("FEBBRAIO", 2),
    ("MARZO", 3),
    ("APRILE", 4),
    ("MAGGIO", 5),
    ("GIUGNO", 6),
    ("LUGLIO", 7),
    ("AGOSTO", 8),
    ("SETTEMBRE", 9),
    ("OTTOBRE", 10),
    ("NOVEMBRE", 11),
    ("DICEMBRE", 12),
    ("GEN", 1),
    ("FEB", 2),
    ("MAR", 3),
    ("APR", 4),
    ("MAG", 5),
    ("GIU", 6),
    ("LUG", 7),
    ("AGO", 8),
    ("SET", 9),
    ("OTT", 10),
    ("NOV", 11),
    ("DIC", 12),
    // English
    ("JANUARY", 1),
    ("FEBRUARY", 2),
    ("MARCH", 3),
    ("APRIL", 4),
    ("MAY", 5),
    ("JUNE", 6),
    ("JULY", 7),
    ("AUGUST", 8),
    ("SEPTEMBER", 9),
    ("OCTOBER", 10),
    ("NOVEMBER", 11),
    ("DECEMBER", 12),
    ("JAN", 1),
    ("JUN", 6),
    ("JUL", 7),
    ("AUG", 8),
    ("SEP", 9),
    ("SEPT", 9),
    ("OCT", 10),
    ("DEC", 12),
];

static MONTHS: Lazy<HashMap<&'static str, u8>> =
    Lazy::new(|| MONTH_TOKENS.iter().copied().collect());

/// Look up a month number (1-12) from an Italian or English month token
///
/// The token is trimmed and upper-cased before lookup, so `" settembre "` and `"Sept"`
/// both resolve. Unknown tokens return `None`.
///
/// # Examples
///
/// ```
/// use photo_archive_index::month_number;
///
/// assert_eq!(month_number("Settembre"), Some(9));
/// assert_eq!(month_number("sept"), Some(9));
/// assert_eq!(month_number("VACANZE"), None);
/// ```
pub fn month_number(token: &str) -> Option<u8> {
    let key = token.trim().to_uppercase();
    MONTHS.get(key.as_str()).copied()
}
