use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

/// Doctor Finder - browse, filter and share doctor listings from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to $TMPDIR/docfinder-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, / to search)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Doctor list URL or JSON file (overrides `source` in the config)
    #[arg(short, long)]
    source: Option<String>,

    /// Initial filters as a query string or full URL
    #[arg(short, long)]
    query: Option<String>,

    /// Print the filtered list and shareable link, then exit
    #[arg(short, long)]
    print: bool,
}

mod app;
mod handlers;
mod logging;
mod ui;
mod utils;

use docfinder::config::{find_config_path, missing_source_error, Config};
use docfinder::{api, logic, model};

pub struct App {
    pub model: model::Model,
    source: String,
}

impl App {
    fn new(config: &Config, source: String) -> Self {
        Self {
            model: model::Model::new(
                config.vim_mode,
                config.max_suggestions,
                config.base_url.clone(),
            ),
            source,
        }
    }

    /// Load the record set once; failures end up in the status banner
    async fn load_doctors(&mut self) {
        tracing::debug!(source = %self.source, "loading doctors");
        match api::load_doctors(&self.source).await {
            Ok(doctors) => self.model.set_doctors(doctors),
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "failed to load doctors");
                self.model
                    .set_load_error(logic::errors::load_error_banner(&e));
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    logging::init_logging(args.debug, &utils::get_debug_log_path())?;

    // Load configuration, falling back to defaults when no file exists
    let mut config = match find_config_path(args.config.as_deref())? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::load(&path)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if args.source.is_some() {
        config.source = args.source.clone();
    }

    let source = config
        .source
        .clone()
        .ok_or_else(missing_source_error)?;

    let mut app = App::new(&config, source);
    app.load_doctors().await;

    // Address bar: overlay any incoming filters onto the defaults
    if let Some(query) = args.query.as_deref() {
        app.model.restore_from_query(query);
    }

    if args.print {
        if let Some(message) = app.model.directory.error_message() {
            anyhow::bail!("{}", message);
        }
        print!("{}", ui::report::render_report(&app.model));
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if result.is_ok() {
        println!("{}", app.model.shareable_url());
    }

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &app.model);
        })?;

        // Auto-dismiss toast
        if let Some((_, timestamp)) = app.model.ui.toast_message {
            if logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis()) {
                app.model.ui.toast_message = None;
            }
        }

        if app.model.ui.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key);
            }
        }
    }

    Ok(())
}
