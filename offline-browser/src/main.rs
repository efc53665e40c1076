mod desktop;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use desktop::{DesktopChrome, UserEvent, WebEngine};
use offline_browser::{Config, Navigator};
use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "offline-browser")]
#[command(about = "Browse locally downloaded copies of websites", long_about = None)]
struct Args {
    /// Root directory of a downloaded site to open at start-up
    #[arg(long, conflicts_with = "url")]
    root: Option<PathBuf>,

    /// Address to open at start-up
    #[arg(long)]
    url: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match &args.config {
        Some(path) if path.exists() => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        Some(path) => {
            warn!("Config file not found at {:?}, using defaults", path);
            Config::default()
        }
        None => Config::default(),
    };

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(config.window_title.as_str())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .build(&event_loop)
        .context("Failed to create window")?;

    let (toolbar, page) = desktop::build_webviews(&window, &config, proxy)?;
    let mut navigator = Navigator::new(WebEngine::new(page), DesktopChrome::new(toolbar))
        .with_downloads_dir(config.downloads_dir());

    if let Some(root) = args.root {
        let root = std::path::absolute(&root)
            .with_context(|| format!("Invalid site directory {}", root.display()))?;
        if !root.is_dir() {
            bail!("Site directory {} does not exist", root.display());
        }
        navigator.open_site(root);
    } else if let Some(url) = args.url {
        navigator.navigate(&url);
    }

    info!("Offline browser started");
    let toolbar_height = config.toolbar_height;

    event_loop.run(move |event, _target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = ControlFlow::Exit,
            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => desktop::relayout(
                &window,
                navigator.chrome().webview(),
                navigator.engine().webview(),
                toolbar_height,
            ),
            Event::UserEvent(UserEvent::Command(command)) => navigator.handle(command),
            Event::UserEvent(UserEvent::UrlChanged(url)) => navigator.url_changed(&url),
            _ => {}
        }
    });
}
