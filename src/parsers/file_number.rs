//! Intra-folder ordering numbers from file names.

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ([0-9]+)\.").expect("valid trailing number regex"));

/// Extract the ordering number from a bare file name
///
/// Tries a leading `NN-` prefix first, then a `" NN."` suffix before the extension.
/// Returns 0 when neither yields a number.
///
/// # Examples
///
/// ```
/// use photo_archive_index::extract_file_number;
///
/// assert_eq!(extract_file_number("01-Barceloneta, Barcellona.jpg"), 1);
/// assert_eq!(extract_file_number("Barceloneta, Barcellona 2.jpg"), 2);
/// assert_eq!(extract_file_number("noNumberHere.jpg"), 0);
/// ```
pub fn extract_file_number(file_name: &str) -> i64 {
    leading_number(file_name).or_else(|| trailing_number(file_name)).unwrap_or(0)
}

fn leading_number(file_name: &str) -> Option<i64> {
    let (prefix, _) = file_name.split_once('-')?;
    prefix.trim().parse().ok()
}

fn trailing_number(file_name: &str) -> Option<i64> {
    let captures = TRAILING_NUMBER_RE.captures(file_name)?;
    captures[1].parse().ok()
}
