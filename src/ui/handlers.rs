use crossterm::event::KeyCode;
use log::{error, info};

use crate::{
    export::export_csv,
    filter::SortField,
    router::{View, OVERVIEW_PATH},
    views::table_catalog::CatalogTab,
};

use super::{components::InputMode, CatalogClientUI};

const EXPORT_FILE_NAME: &str = "tables.csv";

/// Sort keys on the tables list, in column order.
const SORT_KEYS: [(char, SortField); 5] = [
    ('1', SortField::Name),
    ('2', SortField::Database),
    ('3', SortField::Columns),
    ('4', SortField::Records),
    ('5', SortField::Owner),
];

impl CatalogClientUI {
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.input_mode {
            InputMode::Search => self.handle_search_input(key),
            InputMode::Path => self.handle_path_input(key),
            InputMode::Normal => match key {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char(':') => {
                    self.path_input.clear();
                    self.input_mode = InputMode::Path;
                }
                KeyCode::Backspace => self.go_back(),
                KeyCode::Esc if self.parent_path().is_some() => self.leave_view(),
                KeyCode::Char('x') if matches!(self.view, View::TablesList(_)) => {
                    self.export_visible_tables()
                }
                _ => self.handle_view_input(key),
            },
        }
    }

    fn handle_view_input(&mut self, key: KeyCode) {
        let target = match &mut self.view {
            View::Overview(view) => match key {
                KeyCode::Up => {
                    view.move_cursor(false);
                    None
                }
                KeyCode::Down => {
                    view.move_cursor(true);
                    None
                }
                KeyCode::Enter => view.selected_path(),
                KeyCode::Char('t') => Some("/tables".to_string()),
                _ => None,
            },
            View::DatabaseDetail(view) => match key {
                KeyCode::Up => {
                    view.move_cursor(false);
                    None
                }
                KeyCode::Down => {
                    view.move_cursor(true);
                    None
                }
                KeyCode::Enter => view.selected_path(),
                _ => None,
            },
            View::TableDetail(view) => match key {
                KeyCode::Tab => {
                    view.toggle_tab();
                    None
                }
                KeyCode::Char('/') if view.tab == CatalogTab::Schema => {
                    self.input_mode = InputMode::Search;
                    None
                }
                _ => None,
            },
            View::TablesList(view) => match key {
                KeyCode::Up => {
                    view.move_cursor(false);
                    None
                }
                KeyCode::Down => {
                    view.move_cursor(true);
                    None
                }
                KeyCode::Char('/') => {
                    self.input_mode = InputMode::Search;
                    None
                }
                KeyCode::Char('d') => {
                    view.cycle_database_filter();
                    None
                }
                KeyCode::Char('t') => {
                    view.cycle_type_filter();
                    None
                }
                KeyCode::Char('s') => {
                    view.cycle_status_filter();
                    None
                }
                KeyCode::Char(' ') => {
                    view.toggle_current();
                    None
                }
                KeyCode::Char('a') => {
                    view.toggle_all();
                    None
                }
                KeyCode::Char(c) => {
                    if let Some((_, field)) = SORT_KEYS.iter().find(|(k, _)| *k == c) {
                        view.sort_by(*field);
                    }
                    None
                }
                KeyCode::Enter => view.current_database_path(),
                _ => None,
            },
            View::NotFound(not_found) => match key {
                KeyCode::Enter | KeyCode::Esc => Some(not_found.recovery_path.clone()),
                _ => None,
            },
        };

        if let Some(path) = target {
            self.navigate(&path);
        }
    }

    /// Page a view falls back to when there is no history to return to.
    fn parent_path(&self) -> Option<String> {
        match &self.view {
            View::DatabaseDetail(view) => Some(view.back_path().to_string()),
            View::TableDetail(view) => Some(view.back_path()),
            View::TablesList(_) => Some(OVERVIEW_PATH.to_string()),
            View::Overview(_) | View::NotFound(_) => None,
        }
    }

    fn leave_view(&mut self) {
        if self.navigator.history_len() > 1 {
            self.go_back();
        } else if let Some(parent) = self.parent_path() {
            self.navigate(&parent);
        }
    }

    fn handle_search_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => match &mut self.view {
                View::TablesList(view) => view.pop_search(),
                View::TableDetail(view) => {
                    view.search.pop();
                }
                _ => {}
            },
            KeyCode::Char(c) => match &mut self.view {
                View::TablesList(view) => view.push_search(c),
                View::TableDetail(view) => view.search.push(c),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_path_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.path_input.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let path = std::mem::take(&mut self.path_input);
                self.input_mode = InputMode::Normal;
                if !path.is_empty() {
                    self.navigate(&path);
                }
            }
            KeyCode::Backspace => {
                self.path_input.pop();
            }
            KeyCode::Char(c) => self.path_input.push(c),
            _ => {}
        }
    }

    fn export_visible_tables(&mut self) {
        let View::TablesList(view) = &self.view else {
            return;
        };
        let tables = view.visible();
        let path = self.config.export_file(EXPORT_FILE_NAME);

        self.status_message = Some(match export_csv(&tables, &path) {
            Ok(()) => {
                info!("export finished: {}", path.display());
                format!("Exported {} tables to {}", tables.len(), path.display())
            }
            Err(err) => {
                error!("export failed: {}", err);
                err.to_string()
            }
        });
    }
}
