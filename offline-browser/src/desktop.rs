//! tao/wry implementations of the navigator's engine and chrome.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use offline_browser::models::{Command, Notice, NoticeLevel};
use offline_browser::{ui, Chrome, Config, Engine};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::warn;
use url::Url;
use wry::http::Request;
use wry::{WebView, WebViewBuilder};

#[derive(Debug)]
pub enum UserEvent {
    Command(Command),
    UrlChanged(String),
}

/// The page view.
pub struct WebEngine {
    webview: WebView,
}

impl WebEngine {
    pub fn new(webview: WebView) -> Self {
        Self { webview }
    }

    pub fn webview(&self) -> &WebView {
        &self.webview
    }

    fn eval(&self, script: &str) {
        if let Err(e) = self.webview.evaluate_script(script) {
            warn!("evaluate_script failed: {}", e);
        }
    }
}

impl Engine for WebEngine {
    fn load(&mut self, url: &Url) {
        if let Err(e) = self.webview.load_url(url.as_str()) {
            warn!("load_url failed for {}: {}", url, e);
        }
    }

    fn back(&mut self) {
        self.eval("history.back();");
    }

    fn forward(&mut self) {
        self.eval("history.forward();");
    }

    fn reload(&mut self) {
        self.eval("location.reload();");
    }
}

/// Toolbar webview plus native dialogs.
pub struct DesktopChrome {
    toolbar: WebView,
}

impl DesktopChrome {
    pub fn new(toolbar: WebView) -> Self {
        Self { toolbar }
    }

    pub fn webview(&self) -> &WebView {
        &self.toolbar
    }
}

impl Chrome for DesktopChrome {
    fn set_address(&mut self, text: &str) {
        if let Err(e) = self.toolbar.evaluate_script(&ui::set_address_script(text)) {
            warn!("Failed to update address field: {}", e);
        }
    }

    fn notify(&mut self, notice: &Notice) {
        let level = match notice.level {
            NoticeLevel::Info => MessageLevel::Info,
            NoticeLevel::Warning => MessageLevel::Warning,
        };
        MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.message.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn pick_directory(&mut self, title: &str, start: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = FileDialog::new().set_title(title);
        if let Some(start) = start {
            dialog = dialog.set_directory(start);
        }
        dialog.pick_folder()
    }
}

fn toolbar_builder<'a>(
    builder: WebViewBuilder<'a>,
    proxy: EventLoopProxy<UserEvent>,
) -> WebViewBuilder<'a> {
    builder
        .with_html(ui::TOOLBAR_HTML)
        .with_ipc_handler(move |request: Request<String>| {
            match Command::from_ipc(request.body()) {
                Ok(command) => {
                    if proxy.send_event(UserEvent::Command(command)).is_err() {
                        warn!("Event loop closed, dropping toolbar command");
                    }
                }
                Err(e) => warn!("Dropping malformed toolbar message {:?}: {}", request.body(), e),
            }
        })
}

fn page_builder<'a>(
    builder: WebViewBuilder<'a>,
    proxy: EventLoopProxy<UserEvent>,
) -> WebViewBuilder<'a> {
    builder
        .with_html(ui::WELCOME_HTML)
        .with_on_page_load_handler(move |_event, url| {
            // Started covers history moves, Finished catches redirects. The
            // navigator drops the duplicate.
            if proxy.send_event(UserEvent::UrlChanged(url)).is_err() {
                warn!("Event loop closed, dropping location change");
            }
        })
}

/// Builds the toolbar and page webviews, stacked vertically in the window.
#[cfg(target_os = "linux")]
pub fn build_webviews(
    window: &Window,
    config: &Config,
    proxy: EventLoopProxy<UserEvent>,
) -> Result<(WebView, WebView)> {
    use gtk::prelude::*;
    use tao::platform::unix::WindowExtUnix;
    use wry::WebViewBuilderExtUnix;

    let vbox = window
        .default_vbox()
        .context("Linux GTK container not available")?;

    let toolbar_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
    toolbar_box.set_size_request(-1, config.toolbar_pixels());

    let page_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
    page_box.set_vexpand(true);

    vbox.pack_start(&toolbar_box, false, false, 0);
    vbox.pack_start(&page_box, true, true, 0);
    vbox.show_all();

    let toolbar = toolbar_builder(WebViewBuilder::new_gtk(&toolbar_box), proxy.clone())
        .build()
        .context("Failed to build toolbar webview")?;
    let page = page_builder(WebViewBuilder::new_gtk(&page_box), proxy)
        .build()
        .context("Failed to build page webview")?;

    Ok((toolbar, page))
}

/// Builds the toolbar and page webviews, stacked vertically in the window.
#[cfg(not(target_os = "linux"))]
pub fn build_webviews(
    window: &Window,
    config: &Config,
    proxy: EventLoopProxy<UserEvent>,
) -> Result<(WebView, WebView)> {
    let (toolbar_bounds, page_bounds) = bounds(window, config.toolbar_height);

    let toolbar = toolbar_builder(WebViewBuilder::new_as_child(window), proxy.clone())
        .with_bounds(toolbar_bounds)
        .build()
        .context("Failed to build toolbar webview")?;
    let page = page_builder(WebViewBuilder::new_as_child(window), proxy)
        .with_bounds(page_bounds)
        .build()
        .context("Failed to build page webview")?;

    Ok((toolbar, page))
}

#[cfg(not(target_os = "linux"))]
fn bounds(window: &Window, toolbar_height: u32) -> (wry::Rect, wry::Rect) {
    use wry::dpi::{LogicalPosition, LogicalSize};

    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    let bar = f64::from(toolbar_height);
    let toolbar = wry::Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(size.width, bar).into(),
    };
    let page = wry::Rect {
        position: LogicalPosition::new(0.0, bar).into(),
        size: LogicalSize::new(size.width, (size.height - bar).max(0.0)).into(),
    };
    (toolbar, page)
}

/// Keeps child webviews sized to the window. GTK boxes do this on Linux.
#[cfg(target_os = "linux")]
pub fn relayout(_window: &Window, _toolbar: &WebView, _page: &WebView, _toolbar_height: u32) {}

#[cfg(not(target_os = "linux"))]
pub fn relayout(window: &Window, toolbar: &WebView, page: &WebView, toolbar_height: u32) {
    let (toolbar_bounds, page_bounds) = bounds(window, toolbar_height);
    if let Err(e) = toolbar.set_bounds(toolbar_bounds) {
        warn!("Failed to resize toolbar: {}", e);
    }
    if let Err(e) = page.set_bounds(page_bounds) {
        warn!("Failed to resize page: {}", e);
    }
}
