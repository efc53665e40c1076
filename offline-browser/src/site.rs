//! Path handling for offline website copies: entry point discovery, file URL
//! conversion and the relative form shown in the address bar.

use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::error::NavigatorError;

pub const ENTRY_POINT: &str = "index.html";

/// Finds the page to open for a downloaded site.
///
/// Looks for `dir/index.html` first, then `dir/<name of dir>/index.html`,
/// which is where mirroring tools put a site nested under its host name.
pub fn find_entry_point(dir: &Path) -> Option<PathBuf> {
    let direct = dir.join(ENTRY_POINT);
    if direct.is_file() {
        return Some(direct);
    }

    let nested = dir.join(dir.file_name()?).join(ENTRY_POINT);
    nested.is_file().then_some(nested)
}

pub fn file_url(path: &Path) -> Result<Url, NavigatorError> {
    Url::from_file_path(path).map_err(|()| NavigatorError::NotFileUrl(path.to_path_buf()))
}

pub fn directory_url(path: &Path) -> Result<Url, NavigatorError> {
    Url::from_directory_path(path).map_err(|()| NavigatorError::NotFileUrl(path.to_path_buf()))
}

/// The filesystem path behind a `file:` URL.
pub fn local_path(url: &Url) -> Option<PathBuf> {
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}

/// Lexically removes `.` components and folds `..` into their parent.
///
/// The filesystem is not consulted, so symlinks are not resolved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// `path` relative to `root`, or `None` when it lies outside of it.
pub fn relative_path(path: &Path, root: &Path) -> Option<PathBuf> {
    normalize(path)
        .strip_prefix(normalize(root))
        .ok()
        .map(Path::to_path_buf)
}

/// Address bar text for an entry point opened from `root`.
pub fn entry_display(entry: &Path, root: &Path) -> String {
    match relative_path(entry, root) {
        Some(relative) => relative.to_string_lossy().into_owned(),
        None => entry
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Address bar text for a URL reported by the engine.
///
/// Local files under `root` are shown relative to it (the root itself shows
/// as an empty string); everything else is shown as the full URL.
pub fn display_address(url: &Url, root: Option<&Path>) -> String {
    let relative = root.and_then(|root| {
        let path = local_path(url)?;
        relative_path(&path, root)
    });

    match relative {
        Some(relative) => relative.to_string_lossy().into_owned(),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_folds_parent_and_current_dirs() {
        assert_eq!(
            normalize(Path::new("/srv/site/./docs/../img/logo.png")),
            PathBuf::from("/srv/site/img/logo.png")
        );
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("../../a")), PathBuf::from("../../a"));
    }

    #[test]
    fn test_relative_path_inside_and_outside_root() {
        let root = Path::new("/srv/site");
        assert_eq!(
            relative_path(Path::new("/srv/site/docs/a.html"), root),
            Some(PathBuf::from("docs/a.html"))
        );
        assert_eq!(relative_path(Path::new("/srv/other/a.html"), root), None);
        assert_eq!(relative_path(Path::new("/srv/site-2/a.html"), root), None);
        assert_eq!(
            relative_path(Path::new("/srv/site/../site/a.html"), root),
            Some(PathBuf::from("a.html"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_display_address_round_trip() {
        let root = Path::new("/srv/site");
        let page = Path::new("/srv/site/a b/c.html");
        let url = file_url(page).unwrap();
        assert_eq!(url.as_str(), "file:///srv/site/a%20b/c.html");

        let shown = display_address(&url, Some(root));
        assert_eq!(shown, "a b/c.html");
        assert_eq!(root.join(&shown), page);
    }

    #[cfg(unix)]
    #[test]
    fn test_display_address_falls_back_to_full_url() {
        let root = Path::new("/srv/site");
        let outside = Url::parse("file:///etc/hosts").unwrap();
        assert_eq!(display_address(&outside, Some(root)), "file:///etc/hosts");

        let web = Url::parse("https://example.com/a").unwrap();
        assert_eq!(display_address(&web, Some(root)), "https://example.com/a");

        let inside = Url::parse("file:///srv/site/index.html").unwrap();
        assert_eq!(display_address(&inside, None), "file:///srv/site/index.html");
    }

    #[cfg(unix)]
    #[test]
    fn test_display_address_of_root_is_empty() {
        let root = Path::new("/srv/site");
        let url = directory_url(root).unwrap();
        assert_eq!(display_address(&url, Some(root)), "");
    }

    #[test]
    fn test_entry_display_uses_file_name_outside_root() {
        let entry = Path::new("/elsewhere/index.html");
        assert_eq!(entry_display(entry, Path::new("/srv/site")), "index.html");
    }

    #[test]
    fn test_find_entry_point_prefers_top_level_index() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("example.org");
        fs::create_dir_all(site.join("example.org")).unwrap();
        fs::write(site.join("index.html"), "top").unwrap();
        fs::write(site.join("example.org").join("index.html"), "nested").unwrap();

        assert_eq!(find_entry_point(&site), Some(site.join("index.html")));
    }

    #[test]
    fn test_find_entry_point_ignores_directory_named_index() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("index.html")).unwrap();

        assert_eq!(find_entry_point(dir.path()), None);
    }

    #[test]
    fn test_relative_urls_are_not_file_urls() {
        assert!(matches!(
            file_url(Path::new("docs/index.html")),
            Err(NavigatorError::NotFileUrl(_))
        ));
    }
}
