use std::io;
use std::sync::Arc;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
    catalog::CatalogStore,
    config::AppConfig,
    errors::CatalogError,
    router::{Navigator, View},
};

use super::screens;

pub struct CatalogClientUI {
    pub store: Arc<dyn CatalogStore>,
    pub config: AppConfig,
    pub navigator: Navigator,
    pub view: View,
    pub input_mode: InputMode,
    pub path_input: String,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the search term of the current view.
    Search,
    /// Keystrokes edit a path typed after `:`.
    Path,
}

impl CatalogClientUI {
    pub fn new(store: Arc<dyn CatalogStore>, config: AppConfig) -> Self {
        let navigator = Navigator::new(&config.start_path);
        let view = navigator.current_route().resolve(store.as_ref());
        Self {
            store,
            config,
            navigator,
            view,
            input_mode: InputMode::Normal,
            path_input: String::new(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Pushes `path` and rebuilds the view from scratch.
    pub fn navigate(&mut self, path: &str) {
        self.navigator.navigate(path);
        self.refresh_view();
    }

    pub fn go_back(&mut self) {
        if self.navigator.back() {
            self.refresh_view();
        }
    }

    fn refresh_view(&mut self) {
        self.view = self.navigator.current_route().resolve(self.store.as_ref());
        self.input_mode = InputMode::Normal;
        self.status_message = None;
    }

    pub fn run_ui(&mut self) -> Result<(), CatalogError> {
        let _guard = TerminalGuard;
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        info!("starting at {}", self.navigator.current_path());
        let result = self.ui_loop(&mut terminal);

        terminal.show_cursor()?;

        result.map_err(CatalogError::from)
    }

    fn ui_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| screens::render(f, self))?;

            if self.should_quit {
                return Ok(());
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
    }
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
    }
}
