//! Folder label inference from `YEAR/NUMBER-MONTHNAME/` path conventions.
//!
//! Month folders are named by hand, so the parser accepts `"9 - SETTEMBRE"`,
//! `"01-SETTEMBRE"` and a bare `"SETTEMBRE"`. Nothing here fails: a fragment that does
//! not parse leaves its field at the default (`None` or 0).

use crate::parsers::month::month_number;

/// Label used when a path has no parent directory component
pub const ROOT_LABEL: &str = "ROOT";

/// Year-suffix artifacts removed from month folder names before lookup
pub const DEFAULT_STRIP_TOKENS: &[&str] = &[" 25", " 24", " 23"];

const SPACED_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderInfo {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub label: String,
    pub folder_order: i64,
}

/// Infer year, month, label and folder order from path components
///
/// `components` runs from the base directory to the file, filename included. The
/// `YEAR/MONTH/file` pattern needs at least four components, with the third-from-last
/// made only of digits. Otherwise the parent directory name becomes the label.
///
/// # Examples
///
/// ```
/// use photo_archive_index::parse_folder_label;
/// use photo_archive_index::parsers::folder::DEFAULT_STRIP_TOKENS;
///
/// let info = parse_folder_label(
///     &["archivio", "2025", "9 - SETTEMBRE", "01-mare.jpg"],
///     DEFAULT_STRIP_TOKENS,
/// );
/// assert_eq!(info.year, Some(2025));
/// assert_eq!(info.month, Some(9));
/// assert_eq!(info.label, "2025 SETTEMBRE");
/// assert_eq!(info.folder_order, 9);
/// ```
pub fn parse_folder_label<S, T>(components: &[S], strip_tokens: &[T]) -> FolderInfo
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let n = components.len();
    if n >= 4
        && let Some(year) = parse_year(components[n - 3].as_ref())
    {
        let (folder_order, name) = split_month_folder(components[n - 2].as_ref());
        let cleaned = strip_label_noise(name, strip_tokens);
        return FolderInfo {
            year: Some(year),
            month: month_number(&cleaned),
            label: format!("{} {}", year, cleaned),
            folder_order,
        };
    }

    FolderInfo {
        year: None,
        month: None,
        label: parent_folder_name(components).replace('\'', ""),
        folder_order: 0,
    }
}

/// Name of the directory directly containing the file, or [`ROOT_LABEL`]
pub fn parent_folder_name<S: AsRef<str>>(components: &[S]) -> &str {
    let n = components.len();
    if n > 2 { components[n - 2].as_ref() } else { ROOT_LABEL }
}

fn parse_year(component: &str) -> Option<i32> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// Split a month folder name into (folder order, month name)
fn split_month_folder(raw: &str) -> (i64, &str) {
    if let Some((number, name)) = raw.split_once(SPACED_SEPARATOR) {
        (number.trim().parse().unwrap_or(0), name.trim())
    } else if let Some((number, name)) = raw.split_once('-') {
        (number.parse().unwrap_or(0), name)
    } else {
        (0, raw)
    }
}

fn strip_label_noise<T: AsRef<str>>(name: &str, strip_tokens: &[T]) -> String {
    let mut cleaned = name.replace('\'', "");
    for token in strip_tokens {
        let token = token.as_ref();
        if !token.is_empty() {
            cleaned = cleaned.replace(token, "");
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(components: &[&str]) -> FolderInfo {
        parse_folder_label(components, DEFAULT_STRIP_TOKENS)
    }

    #[test]
    fn test_spaced_separator() {
        let info = parse(&["src", "archivio", "2025", "9 - SETTEMBRE", "01-a.jpg"]);
        assert_eq!(info.year, Some(2025));
        assert_eq!(info.month, Some(9));
        assert_eq!(info.label, "2025 SETTEMBRE");
        assert_eq!(info.folder_order, 9);
    }

    #[test]
    fn test_bare_hyphen() {
        let info = parse(&["src", "archivio", "2024", "01-AGOSTO", "foto.jpg"]);
        assert_eq!(info.year, Some(2024));
        assert_eq!(info.month, Some(8));
        assert_eq!(info.label, "2024 AGOSTO");
        assert_eq!(info.folder_order, 1);
    }

    #[test]
    fn test_splits_on_first_separator_only() {
        let info = parse(&["a", "2025", "3 - Roma - Estate", "x.jpg"]);
        assert_eq!(info.folder_order, 3);
        assert_eq!(info.label, "2025 Roma - Estate");
        assert_eq!(info.month, None);

        let info = parse(&["a", "2025", "4-Lug-Ago", "x.jpg"]);
        assert_eq!(info.folder_order, 4);
        assert_eq!(info.label, "2025 Lug-Ago");
    }

    #[test]
    fn test_no_separator() {
        let info = parse(&["a", "2023", "Dicembre", "x.jpg"]);
        assert_eq!(info.year, Some(2023));
        assert_eq!(info.month, Some(12));
        assert_eq!(info.label, "2023 Dicembre");
        assert_eq!(info.folder_order, 0);
    }

    #[test]
    fn test_label_keeps_case_month_lookup_ignores_it() {
        let info = parse(&["a", "2025", "2 - sept", "x.jpg"]);
        assert_eq!(info.label, "2025 sept");
        assert_eq!(info.month, Some(9));
    }

    #[test]
    fn test_non_numeric_prefix_defaults_to_zero() {
        let info = parse(&["a", "2025", "uno - MARZO", "x.jpg"]);
        assert_eq!(info.folder_order, 0);
        assert_eq!(info.month, Some(3));

        let info = parse(&["a", "2025", "X-MARZO", "x.jpg"]);
        assert_eq!(info.folder_order, 0);
        assert_eq!(info.month, Some(3));
    }

    #[test]
    fn test_bare_hyphen_number_is_not_trimmed() {
        let info = parse(&["a", "2025", " 5-MAGGIO", "x.jpg"]);
        assert_eq!(info.folder_order, 0);
        assert_eq!(info.month, Some(5));
    }

    #[test]
    fn test_strips_apostrophes_and_year_suffixes() {
        let info = parse(&["a", "2025", "7 - LUGLIO 25", "x.jpg"]);
        assert_eq!(info.label, "2025 LUGLIO");
        assert_eq!(info.month, Some(7));

        let info = parse(&["a", "2024", "10-OTT'24", "x.jpg"]);
        assert_eq!(info.label, "2024 OTT24");
        assert_eq!(info.month, None);

        let info = parse(&["a", "2024", "11-NOV' 24", "x.jpg"]);
        assert_eq!(info.label, "2024 NOV");
        assert_eq!(info.month, Some(11));
    }

    #[test]
    fn test_custom_strip_tokens() {
        let info = parse_folder_label(&["a", "2026", "1 - GENNAIO 26", "x.jpg"], &[" 26"]);
        assert_eq!(info.label, "2026 GENNAIO");
        assert_eq!(info.month, Some(1));

        let none: [&str; 0] = [];
        let info = parse_folder_label(&["a", "2025", "1 - GENNAIO 25", "x.jpg"], &none);
        assert_eq!(info.label, "2025 GENNAIO 25");
        assert_eq!(info.month, None);
    }

    #[test]
    fn test_fallback_to_parent_folder() {
        let info = parse(&["src", "archivio", "Viaggi", "Sant'Anna", "x.jpg"]);
        assert_eq!(info.year, None);
        assert_eq!(info.month, None);
        assert_eq!(info.label, "SantAnna");
        assert_eq!(info.folder_order, 0);
    }

    #[test]
    fn test_fallback_when_year_not_all_digits() {
        let info = parse(&["a", "2025b", "01-MARZO", "x.jpg"]);
        assert_eq!(info.year, None);
        assert_eq!(info.label, "01-MARZO");
        assert_eq!(info.folder_order, 0);
    }

    #[test]
    fn test_three_components_is_too_short_for_pattern() {
        let info = parse(&["2025", "01-MARZO", "x.jpg"]);
        assert_eq!(info.year, None);
        assert_eq!(info.label, "01-MARZO");
    }

    #[test]
    fn test_root_fallback() {
        assert_eq!(parse(&["archivio", "x.jpg"]).label, "ROOT");
        assert_eq!(parse(&["x.jpg"]).label, "ROOT");
    }

    #[test]
    fn test_every_month_token_with_spaced_prefix() {
        let tokens = [
            ("GENNAIO", 1),
            ("JANUARY", 1),
            ("GEN", 1),
            ("JAN", 1),
            ("FEBBRAIO", 2),
            ("FEBRUARY", 2),
            ("FEB", 2),
            ("MARZO", 3),
            ("MARCH", 3),
            ("MAR", 3),
            ("APRILE", 4),
            ("APRIL", 4),
            ("APR", 4),
            ("MAGGIO", 5),
            ("MAY", 5),
            ("MAG", 5),
            ("GIUGNO", 6),
            ("JUNE", 6),
            ("GIU", 6),
            ("JUN", 6),
            ("LUGLIO", 7),
            ("JULY", 7),
            ("LUG", 7),
            ("JUL", 7),
            ("AGOSTO", 8),
            ("AUGUST", 8),
            ("AGO", 8),
            ("AUG", 8),
            ("SETTEMBRE", 9),
            ("SEPTEMBER", 9),
            ("SET", 9),
            ("SEP", 9),
            ("SEPT", 9),
            ("OTTOBRE", 10),
            ("OCTOBER", 10),
            ("OTT", 10),
            ("OCT", 10),
            ("NOVEMBRE", 11),
            ("NOVEMBER", 11),
            ("NOV", 11),
            ("DICEMBRE", 12),
            ("DECEMBER", 12),
            ("DIC", 12),
            ("DEC", 12),
        ];

        for (n, (token, month)) in tokens.iter().enumerate() {
            let folder = format!("{} - {}", n + 1, token.to_lowercase());
            let info = parse(&["archivio", "2022", folder.as_str(), "x.jpg"]);
            assert_eq!(info.year, Some(2022), "{}", folder);
            assert_eq!(info.month, Some(*month), "{}", folder);
            assert_eq!(info.folder_order, n as i64 + 1, "{}", folder);
        }
    }

    #[test]
    fn test_parent_folder_name() {
        assert_eq!(parent_folder_name(&["a", "EXTRA", "x.jpg"]), "EXTRA");
        assert_eq!(parent_folder_name(&["EXTRA", "x.jpg"]), "ROOT");
    }
}
