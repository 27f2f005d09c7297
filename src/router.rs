//! Path parsing, view resolution and navigation history.

use log::{debug, warn};

use crate::{
    catalog::CatalogStore,
    errors::CatalogError,
    views::{
        master_sheet::MasterSheetView, overview::OverviewView, table_catalog::TableCatalogView,
        tables_list::TablesListView,
    },
};

pub const OVERVIEW_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Overview,
    Database { name: String },
    Table { database: String, table: String },
    Tables,
    Unknown(String),
}

impl Route {
    /// Parses a navigation path. Segments are opaque identifiers; a trailing
    /// slash is ignored.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Overview;
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Route::Unknown(path.to_string());
        };
        let segments: Vec<&str> = rest.split('/').collect();

        match segments.as_slice() {
            ["overview"] => Route::Overview,
            ["tables"] => Route::Tables,
            ["database", name] if !name.is_empty() => Route::Database {
                name: name.to_string(),
            },
            ["database", database, "table", table] if !database.is_empty() && !table.is_empty() => {
                Route::Table {
                    database: database.to_string(),
                    table: table.to_string(),
                }
            }
            _ => Route::Unknown(path.to_string()),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Overview => OVERVIEW_PATH.to_string(),
            Route::Database { name } => database_path(name),
            Route::Table { database, table } => table_path(database, table),
            Route::Tables => "/tables".to_string(),
            Route::Unknown(path) => path.clone(),
        }
    }

    /// Looks the route up in the store. Missing entities resolve to a
    /// not-found view carrying a recovery path.
    pub fn resolve(&self, store: &dyn CatalogStore) -> View {
        match self {
            Route::Overview => View::Overview(OverviewView::new(store)),
            Route::Tables => View::TablesList(TablesListView::new(store)),
            Route::Database { name } => match store.find_database(name) {
                Some(database) => {
                    View::DatabaseDetail(MasterSheetView::new(database, store))
                }
                None => {
                    warn!("database not found: {}", name);
                    View::NotFound(NotFound::from_error(
                        &CatalogError::DatabaseNotFound(name.clone()),
                        OVERVIEW_PATH,
                        "Back to Overview",
                    ))
                }
            },
            Route::Table { database, table } => {
                if store.find_database(database).is_none() {
                    warn!("database not found: {}", database);
                    return View::NotFound(NotFound::from_error(
                        &CatalogError::DatabaseNotFound(database.clone()),
                        OVERVIEW_PATH,
                        "Back to Overview",
                    ));
                }
                match store.find_table_detail(database, table) {
                    Some(detail) => View::TableDetail(TableCatalogView::new(detail)),
                    None => {
                        warn!("table not found: {}/{}", database, table);
                        View::NotFound(NotFound::from_error(
                            &CatalogError::TableNotFound {
                                database: database.clone(),
                                table: table.clone(),
                            },
                            &database_path(database),
                            &format!("Back to {}", database),
                        ))
                    }
                }
            }
            Route::Unknown(path) => {
                warn!("no route for path: {}", path);
                View::NotFound(NotFound {
                    message: format!("The page \"{}\" could not be found.", path),
                    recovery_path: OVERVIEW_PATH.to_string(),
                    recovery_label: "Back to Overview".to_string(),
                })
            }
        }
    }
}

pub fn database_path(database: &str) -> String {
    format!("/database/{}", database)
}

pub fn table_path(database: &str, table: &str) -> String {
    format!("/database/{}/table/{}", database, table)
}

/// Resolved page for the current path.
#[derive(Debug)]
pub enum View {
    Overview(OverviewView),
    DatabaseDetail(MasterSheetView),
    TableDetail(TableCatalogView),
    TablesList(TablesListView),
    NotFound(NotFound),
}

impl View {
    pub fn is_not_found(&self) -> bool {
        matches!(self, View::NotFound(_))
    }

    pub fn title(&self) -> String {
        match self {
            View::Overview(_) => "Overview".to_string(),
            View::DatabaseDetail(view) => format!("{} - Tables Overview", view.database.name),
            View::TableDetail(view) => view.detail.table.clone(),
            View::TablesList(_) => "Tables Management".to_string(),
            View::NotFound(_) => "Not Found".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub message: String,
    pub recovery_path: String,
    pub recovery_label: String,
}

impl NotFound {
    fn from_error(error: &CatalogError, recovery_path: &str, recovery_label: &str) -> Self {
        Self {
            message: error.to_string(),
            recovery_path: recovery_path.to_string(),
            recovery_label: recovery_label.to_string(),
        }
    }
}

/// Navigation history. The first entry is never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<String>,
}

impl Navigator {
    pub fn new(start: &str) -> Self {
        Self {
            history: vec![start.to_string()],
        }
    }

    pub fn navigate(&mut self, path: &str) {
        debug!("navigate: {} -> {}", self.current_path(), path);
        self.history.push(path.to_string());
    }

    pub fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or(OVERVIEW_PATH)
    }

    pub fn current_route(&self) -> Route {
        Route::parse(self.current_path())
    }

    /// Returns to the previous path. `false` when already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            debug!("back -> {}", self.current_path());
            true
        } else {
            false
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(OVERVIEW_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::StaticCatalog;
    use crate::models::{
        catalog::{Database, DatabaseStatus, Table},
        schema::{Column, TableDetail},
    };
    use mockall::{mock, predicate};

    mock! {
        pub CatalogStoreMock {}

        impl CatalogStore for CatalogStoreMock {
            fn databases(&self) -> Vec<Database>;
            fn tables(&self) -> Vec<Table>;
            fn find_database(&self, name: &str) -> Option<Database>;
            fn find_tables_for_database(&self, name: &str) -> Vec<Table>;
            fn find_columns(&self, database: &str, table: &str) -> Option<Vec<Column>>;
            fn find_table_detail(&self, database: &str, table: &str) -> Option<TableDetail>;
        }
    }

    fn database(name: &str) -> Database {
        Database {
            name: name.to_string(),
            table_count: 3,
            size: "1MB".to_string(),
            last_update: "now".to_string(),
            status: DatabaseStatus::Active,
        }
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Overview);
        assert_eq!(Route::parse(""), Route::Overview);
        assert_eq!(Route::parse("/overview"), Route::Overview);
        assert_eq!(Route::parse("/overview/"), Route::Overview);
        assert_eq!(Route::parse("/tables"), Route::Tables);
        assert_eq!(
            Route::parse("/database/UserDB"),
            Route::Database {
                name: "UserDB".to_string()
            }
        );
        assert_eq!(
            Route::parse("/database/ProductDB/table/orders"),
            Route::Table {
                database: "ProductDB".to_string(),
                table: "orders".to_string()
            }
        );
        assert_eq!(
            Route::parse("/database"),
            Route::Unknown("/database".to_string())
        );
        assert_eq!(
            Route::parse("tables"),
            Route::Unknown("tables".to_string())
        );
        assert_eq!(
            Route::parse("/database/UserDB/columns/id"),
            Route::Unknown("/database/UserDB/columns/id".to_string())
        );
    }

    #[test]
    fn test_route_path_round_trips() {
        for path in ["/", "/tables", "/database/UserDB", "/database/ProductDB/table/orders"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_resolve_passes_route_params_to_store() {
        let mut store = MockCatalogStoreMock::new();
        store
            .expect_find_database()
            .with(predicate::eq("OrderDB"))
            .times(1)
            .returning(|name| Some(database(name)));
        store
            .expect_find_tables_for_database()
            .with(predicate::eq("OrderDB"))
            .times(1)
            .returning(|_| Vec::new());

        let view = Route::parse("/database/OrderDB").resolve(&store);
        match view {
            View::DatabaseDetail(sheet) => {
                assert_eq!(sheet.database.name, "OrderDB");
                assert!(sheet.tables.is_empty());
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_missing_database() {
        let mut store = MockCatalogStoreMock::new();
        store.expect_find_database().returning(|_| None);

        let view = Route::parse("/database/NoSuchDB").resolve(&store);
        match view {
            View::NotFound(not_found) => {
                assert!(not_found.message.contains("NoSuchDB"));
                assert_eq!(not_found.recovery_path, "/");
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_table_skips_detail_lookup_for_missing_database() {
        let mut store = MockCatalogStoreMock::new();
        store.expect_find_database().returning(|_| None);
        store.expect_find_table_detail().never();

        let view = Route::parse("/database/Ghost/table/orders").resolve(&store);
        assert!(view.is_not_found());
    }

    #[test]
    fn test_resolve_missing_table_recovers_to_database() {
        let store = StaticCatalog::new();

        let view = Route::parse("/database/ProductDB/table/unknown_table").resolve(&store);
        match view {
            View::NotFound(not_found) => {
                assert_eq!(
                    not_found.message,
                    "The table \"unknown_table\" in database \"ProductDB\" could not be found."
                );
                assert_eq!(not_found.recovery_path, "/database/ProductDB");
                assert_eq!(not_found.recovery_label, "Back to ProductDB");
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_unknown_path() {
        let store = StaticCatalog::new();
        let view = Route::parse("/settings").resolve(&store);

        match view {
            View::NotFound(not_found) => {
                assert!(not_found.message.contains("/settings"));
                assert_eq!(not_found.recovery_path, "/");
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_navigator_history() {
        let mut navigator = Navigator::default();
        assert_eq!(navigator.current_path(), "/");
        assert!(!navigator.back());

        navigator.navigate("/database/UserDB");
        navigator.navigate("/tables");
        assert_eq!(navigator.current_route(), Route::Tables);
        assert_eq!(navigator.history_len(), 3);

        assert!(navigator.back());
        assert_eq!(navigator.current_path(), "/database/UserDB");
        assert!(navigator.back());
        assert!(!navigator.back());
        assert_eq!(navigator.current_path(), "/");
    }
}
