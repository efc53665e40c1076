use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced to the user while resolving addresses or opening sites.
///
/// None of these are fatal: the navigator turns each one into a [`Notice`]
/// and keeps running.
///
/// [`Notice`]: crate::models::Notice
#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("Could not find local file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error(
        "No 'index.html' found directly in '{}' or a subfolder with the same name. \
         Please navigate manually using the address bar.",
        .0.display()
    )]
    NoEntryPoint(PathBuf),

    #[error("Could not interpret '{input}' as an address: {source}")]
    InvalidAddress {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Path cannot be expressed as a file URL: {}", .0.display())]
    NotFileUrl(PathBuf),
}
