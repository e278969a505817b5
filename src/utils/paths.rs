use std::borrow::Cow;
use std::fs;
use std::path::{Component, Path};
use std::time::UNIX_EPOCH;

/// Returns `path` relative to `base`, or `path` unchanged when it is not under `base`
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use photo_archive_index::utils::relative_to;
///
/// let path = Path::new("/site/src/archivio/2025/a.jpg");
/// assert_eq!(relative_to(path, Path::new("/site")), Path::new("src/archivio/2025/a.jpg"));
/// assert_eq!(relative_to(path, Path::new("/other")), path);
/// ```
pub fn relative_to<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

/// Path components as strings, skipping `.` and the root
pub fn path_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::Prefix(prefix) => Some(prefix.as_os_str().to_string_lossy().into_owned()),
            Component::RootDir | Component::CurDir => None,
        })
        .collect()
}

/// Formats a path with `/` separators on every platform, dropping `.` components
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use photo_archive_index::utils::to_slash_path;
///
/// assert_eq!(to_slash_path(Path::new("./src/archivio/x.jpg")), "src/archivio/x.jpg");
/// assert_eq!(to_slash_path(Path::new("/abs/x.jpg")), "/abs/x.jpg");
/// ```
pub fn to_slash_path(path: &Path) -> String {
    let joined = path_components(path).join("/");
    if path.has_root() { format!("/{}", joined) } else { joined }
}

/// Lower-cased file extension, without the dot
pub fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Case-insensitive check against a list of lower-case extensions
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    lowercase_extension(path).is_some_and(|ext| extensions.contains(&ext.as_str()))
}

/// Modification time in seconds since the Unix epoch, or 0.0 when it can't be read
pub fn modified_secs(path: &Path) -> f64 {
    fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .ok()
        .and_then(|mtime| mtime.duration_since(UNIX_EPOCH).ok())
        .map(|duration| duration.as_secs_f64())
        .unwrap_or(0.0)
}

/// Bare file name as a string (lossy for non-UTF-8 names)
pub fn file_name_lossy(path: &Path) -> Cow<'_, str> {
    path.file_name().map(|name| name.to_string_lossy()).unwrap_or(Cow::Borrowed(""))
}
