//! Interpretation of text typed into the address bar.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::NavigatorError;
use crate::site;

/// Schemes that are loaded as typed, even while an offline site is open.
pub const KNOWN_SCHEMES: &[&str] = &["about", "data", "file", "ftp", "http", "https"];

/// Where an address bar entry should take the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Url(Url),
    /// An existing path below the offline root.
    LocalFile(PathBuf),
}

impl Target {
    pub fn into_url(self) -> Result<Url, NavigatorError> {
        match self {
            Target::Url(url) => Ok(url),
            Target::LocalFile(path) => site::file_url(&path),
        }
    }
}

pub fn parse_with_known_scheme(text: &str) -> Option<Url> {
    let url = Url::parse(text).ok()?;
    KNOWN_SCHEMES.contains(&url.scheme()).then_some(url)
}

/// Resolves address bar text against the offline root, if any.
///
/// URLs with a known scheme win. With a root set, any other non-empty text is
/// a path below the root and must exist; it is joined as typed, so file names
/// with leading or trailing spaces stay reachable. Without a root the text is
/// guessed into a web address.
pub fn resolve(text: &str, root: Option<&Path>) -> Result<Target, NavigatorError> {
    let trimmed = text.trim();
    if let Some(url) = parse_with_known_scheme(trimmed) {
        return Ok(Target::Url(url));
    }

    match root {
        Some(root) if !trimmed.is_empty() => {
            let path = site::normalize(&root.join(text));
            if path.exists() {
                Ok(Target::LocalFile(path))
            } else {
                Err(NavigatorError::FileNotFound(path))
            }
        }
        _ => from_user_input(trimmed).map(Target::Url),
    }
}

/// Best-effort conversion of loosely typed text into a URL.
///
/// Empty input becomes `about:blank` and absolute paths become file URLs.
/// Anything that already parses with a scheme (`mailto:`, `sip:`, ...) is
/// kept as typed. Bare host names and `host:port` get `ftp://` (for `ftp.`
/// hosts) or `http://` prepended.
pub fn from_user_input(text: &str) -> Result<Url, NavigatorError> {
    let text = text.trim();
    let invalid = |source: url::ParseError| NavigatorError::InvalidAddress {
        input: text.to_string(),
        source,
    };

    if text.is_empty() {
        return Url::parse("about:blank").map_err(invalid);
    }
    if let Some(url) = parse_with_known_scheme(text) {
        return Ok(url);
    }
    if Path::new(text).is_absolute() {
        return site::file_url(Path::new(text));
    }
    if let Ok(url) = Url::parse(text) {
        if !is_host_and_port(text) {
            return Ok(url);
        }
    }

    let guess = if text.starts_with("ftp.") {
        format!("ftp://{text}")
    } else {
        format!("http://{text}")
    };
    Url::parse(&guess).map_err(invalid)
}

/// `localhost:8080` and `example.com:81/docs` parse as URLs with a made-up
/// scheme; the part after the colon gives them away as a port.
fn is_host_and_port(text: &str) -> bool {
    let Some((_, rest)) = text.split_once(':') else {
        return false;
    };
    let port = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_user_input_guesses_scheme() {
        assert_eq!(
            from_user_input("example.com").unwrap().as_str(),
            "http://example.com/"
        );
        assert_eq!(
            from_user_input("  example.com/docs  ").unwrap().as_str(),
            "http://example.com/docs"
        );
        assert_eq!(
            from_user_input("ftp.example.com").unwrap().as_str(),
            "ftp://ftp.example.com/"
        );
        assert_eq!(
            from_user_input("localhost:8080").unwrap().as_str(),
            "http://localhost:8080/"
        );
    }

    #[test]
    fn test_from_user_input_keeps_known_schemes() {
        assert_eq!(
            from_user_input("https://rust-lang.org").unwrap().as_str(),
            "https://rust-lang.org/"
        );
        assert_eq!(from_user_input("").unwrap().as_str(), "about:blank");
    }

    #[cfg(unix)]
    #[test]
    fn test_from_user_input_absolute_path() {
        assert_eq!(
            from_user_input("/tmp/site/index.html").unwrap().as_str(),
            "file:///tmp/site/index.html"
        );
    }

    #[test]
    fn test_from_user_input_keeps_other_schemes_as_typed() {
        assert_eq!(
            from_user_input("mailto:someone@example.com").unwrap().as_str(),
            "mailto:someone@example.com"
        );
        assert_eq!(
            from_user_input("sip:alice@example.org").unwrap().as_str(),
            "sip:alice@example.org"
        );
        assert_eq!(
            from_user_input("example.com:81/docs").unwrap().as_str(),
            "http://example.com:81/docs"
        );
    }

    #[test]
    fn test_from_user_input_rejects_unparseable_host() {
        let err = from_user_input("hello world").unwrap_err();
        assert!(matches!(err, NavigatorError::InvalidAddress { .. }));
    }

    #[test]
    fn test_unknown_scheme_is_not_a_url() {
        assert!(parse_with_known_scheme("localhost:8080").is_none());
        assert!(parse_with_known_scheme("mailto:someone@example.com").is_none());
        assert!(parse_with_known_scheme("example.com").is_none());
    }

    #[test]
    fn test_resolve_prefers_urls_over_root() {
        let dir = TempDir::new().unwrap();
        let target = resolve("https://example.com/a", Some(dir.path())).unwrap();
        assert_eq!(
            target,
            Target::Url(Url::parse("https://example.com/a").unwrap())
        );
    }

    #[test]
    fn test_resolve_joins_and_normalizes_under_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("a.html"), "a").unwrap();

        let target = resolve("./docs/../docs/a.html", Some(dir.path())).unwrap();
        assert_eq!(
            target,
            Target::LocalFile(site::normalize(&dir.path().join("docs").join("a.html")))
        );
    }

    #[test]
    fn test_resolve_missing_file_under_root() {
        let dir = TempDir::new().unwrap();
        match resolve("missing.html", Some(dir.path())) {
            Err(NavigatorError::FileNotFound(path)) => {
                assert_eq!(path, site::normalize(&dir.path().join("missing.html")))
            }
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_keeps_spaces_in_file_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(" notes.html "), "n").unwrap();

        let target = resolve(" notes.html ", Some(dir.path())).unwrap();
        assert_eq!(
            target,
            Target::LocalFile(site::normalize(&dir.path().join(" notes.html ")))
        );
    }

    #[test]
    fn test_resolve_blank_text_with_root_falls_back_to_web() {
        let dir = TempDir::new().unwrap();
        let target = resolve("   ", Some(dir.path())).unwrap();
        assert_eq!(target, Target::Url(Url::parse("about:blank").unwrap()));
    }
}
