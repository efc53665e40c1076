use std::path::{Path, PathBuf};

use tracing::{debug, info};
use url::Url;

use crate::address;
use crate::error::NavigatorError;
use crate::models::{Command, Notice};
use crate::site;

pub const PICKER_TITLE: &str = "Select Offline Website Root Directory";

/// The embedded browser engine.
pub trait Engine {
    fn load(&mut self, url: &Url);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
}

/// The application's own window furniture: address field and dialogs.
pub trait Chrome {
    fn set_address(&mut self, text: &str);
    fn notify(&mut self, notice: &Notice);
    /// Returns `None` when the user cancels.
    fn pick_directory(&mut self, title: &str, start: Option<&Path>) -> Option<PathBuf>;
}

/// Mediates between the toolbar, the directory picker and the engine.
///
/// All methods are called from the UI thread in response to a single event.
pub struct Navigator<E, C> {
    engine: E,
    chrome: C,
    offline_root: Option<PathBuf>,
    address: String,
    current_url: Option<String>,
    downloads_dir: Option<PathBuf>,
}

impl<E: Engine, C: Chrome> Navigator<E, C> {
    pub fn new(engine: E, chrome: C) -> Self {
        Self {
            engine,
            chrome,
            offline_root: None,
            address: String::new(),
            current_url: None,
            downloads_dir: None,
        }
    }

    /// Where the directory picker starts, if that directory exists.
    pub fn with_downloads_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.downloads_dir = dir;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn offline_root(&self) -> Option<&Path> {
        self.offline_root.as_deref()
    }

    /// The text most recently placed in the address field.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn handle(&mut self, command: Command) {
        debug!(?command, "toolbar command");
        match command {
            Command::Back => self.engine.back(),
            Command::Forward => self.engine.forward(),
            Command::Reload => self.engine.reload(),
            Command::Go { text } => self.navigate(&text),
            Command::LoadOfflineSite => self.select_offline_site(),
            Command::Ready => self.chrome.set_address(&self.address),
        }
    }

    /// Resolves address bar text and loads the result.
    pub fn navigate(&mut self, input: &str) {
        let target = address::resolve(input, self.offline_root.as_deref())
            .and_then(address::Target::into_url);
        match target {
            Ok(url) => {
                debug!(%url, "navigating");
                self.engine.load(&url);
            }
            Err(err) => self.report(&err),
        }
    }

    pub fn select_offline_site(&mut self) {
        let start = self.downloads_dir.as_deref().filter(|dir| dir.is_dir());
        match self.chrome.pick_directory(PICKER_TITLE, start) {
            Some(dir) => self.open_site(dir),
            None => debug!("directory selection cancelled"),
        }
    }

    /// Makes `dir` the offline root and loads its entry point.
    pub fn open_site(&mut self, dir: PathBuf) {
        let dir = site::normalize(&dir);
        info!(root = %dir.display(), "opening offline site");
        self.offline_root = Some(dir.clone());

        match site::find_entry_point(&dir) {
            Some(entry) => {
                let url = match site::file_url(&entry) {
                    Ok(url) => url,
                    Err(err) => return self.report(&err),
                };
                self.engine.load(&url);
                self.set_address(site::entry_display(&entry, &dir));
            }
            None => {
                self.report(&NavigatorError::NoEntryPoint(dir.clone()));
                // What the engine shows for a bare directory is up to the engine.
                match site::directory_url(&dir) {
                    Ok(url) => self.engine.load(&url),
                    Err(err) => self.report(&err),
                }
                self.set_address(String::new());
            }
        }
    }

    /// Called whenever the engine reports a new location, including moves
    /// made with its own history.
    pub fn url_changed(&mut self, raw: &str) {
        if self.current_url.as_deref() == Some(raw) {
            return;
        }
        self.current_url = Some(raw.to_string());

        let display = match Url::parse(raw) {
            Ok(url) => site::display_address(&url, self.offline_root.as_deref()),
            Err(_) => raw.to_string(),
        };
        self.set_address(display);
    }

    fn set_address(&mut self, text: String) {
        self.chrome.set_address(&text);
        self.address = text;
    }

    fn report(&mut self, err: &NavigatorError) {
        info!("{}", err);
        self.chrome.notify(&Notice::from(err));
    }
}
