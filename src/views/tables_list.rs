use log::debug;

use crate::{
    catalog::CatalogStore,
    filter::{Selection, SortField, TableQuery, TableStats},
    models::catalog::{Table, TableStatus, TableType},
    router::database_path,
};

use super::step_cursor;

/// Tables management page: every table in the catalog behind search,
/// filters, sorting and a checkbox selection.
#[derive(Debug, Clone)]
pub struct TablesListView {
    pub tables: Vec<Table>,
    pub database_options: Vec<String>,
    pub query: TableQuery,
    pub selection: Selection,
    pub stats: TableStats,
    pub cursor: usize,
}

impl TablesListView {
    pub fn new(store: &dyn CatalogStore) -> Self {
        let tables = store.tables();
        let stats = TableStats::compute(&tables);
        Self {
            database_options: store.database_names(),
            tables,
            query: TableQuery::default(),
            selection: Selection::new(),
            stats,
            cursor: 0,
        }
    }

    /// Rows currently shown, recomputed from the query on every call.
    pub fn visible(&self) -> Vec<Table> {
        self.query.apply(&self.tables)
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.visible().into_iter().map(|t| t.id).collect()
    }

    pub fn push_search(&mut self, c: char) {
        self.query.search.push(c);
        self.query_changed();
    }

    pub fn pop_search(&mut self) {
        self.query.search.pop();
        self.query_changed();
    }

    pub fn set_search(&mut self, term: &str) {
        self.query.search = term.to_string();
        self.query_changed();
    }

    pub fn cycle_database_filter(&mut self) {
        self.query.database = self.query.database.cycle(&self.database_options);
        self.query_changed();
    }

    pub fn cycle_type_filter(&mut self) {
        self.query.table_type = self.query.table_type.cycle(&TableType::ALL);
        self.query_changed();
    }

    pub fn cycle_status_filter(&mut self) {
        self.query.status = self.query.status.cycle(&TableStatus::ALL);
        self.query_changed();
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.query.sort.toggle(field);
        debug!(
            "sort by {} {:?}",
            field.as_str(),
            self.query.sort.direction
        );
    }

    pub fn move_cursor(&mut self, down: bool) {
        self.cursor = step_cursor(self.cursor, self.visible().len(), down);
    }

    /// Table under the cursor.
    pub fn current(&self) -> Option<Table> {
        self.visible().into_iter().nth(self.cursor)
    }

    pub fn toggle_current(&mut self) {
        if let Some(table) = self.current() {
            self.selection.toggle(&table.id);
        }
    }

    pub fn toggle_all(&mut self) {
        let ids = self.visible_ids();
        self.selection.toggle_all(&ids);
    }

    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(&self.visible_ids())
    }

    /// Path of the database owning the row under the cursor.
    pub fn current_database_path(&self) -> Option<String> {
        self.current().map(|table| database_path(&table.database))
    }

    fn query_changed(&mut self) {
        let len = self.visible().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        debug!(
            "query: search={:?} database={} type={} status={} -> {} rows",
            self.query.search,
            self.query.database,
            self.query.table_type,
            self.query.status,
            len
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::StaticCatalog;
    use crate::filter::{Filter, SortDirection};

    fn view() -> TablesListView {
        TablesListView::new(&StaticCatalog::new())
    }

    #[test]
    fn test_search_narrows_visible_rows() {
        let mut view = view();
        for c in "prod".chars() {
            view.push_search(c);
        }
        let names: Vec<String> = view.visible().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["orders", "product_categories", "products"]);

        view.pop_search();
        assert_eq!(view.query.search, "pro");
    }

    #[test]
    fn test_cursor_clamped_after_filter() {
        let mut view = view();
        for _ in 0..9 {
            view.move_cursor(true);
        }
        assert_eq!(view.cursor, 9);

        view.set_search("audit");
        assert_eq!(view.cursor, 0);
        assert_eq!(view.current().unwrap().name, "audit_logs");
    }

    #[test]
    fn test_filter_cycles() {
        let mut view = view();
        view.cycle_database_filter();
        assert_eq!(view.query.database, Filter::Only("UserDB".to_string()));
        assert_eq!(view.visible().len(), 4);

        view.cycle_status_filter();
        view.cycle_status_filter();
        assert_eq!(view.query.status, Filter::Only(TableStatus::Maintenance));
        assert_eq!(view.visible().len(), 1);

        view.cycle_type_filter();
        assert!(view.visible().is_empty());
        assert_eq!(
            view.query.empty_state_hint(),
            "Try adjusting your search or filter criteria."
        );
    }

    #[test]
    fn test_sort_by_toggles_direction() {
        let mut view = view();
        view.sort_by(SortField::Name);
        assert_eq!(view.query.sort.direction, SortDirection::Descending);
        assert_eq!(view.visible()[0].name, "users");

        view.sort_by(SortField::Columns);
        assert_eq!(view.query.sort.direction, SortDirection::Ascending);
        assert_eq!(view.visible()[0].name, "app_settings");
    }

    #[test]
    fn test_select_all_uses_visible_rows() {
        let mut view = view();
        view.set_search("user");
        let visible = view.visible_ids();
        assert_eq!(visible.len(), 4);

        view.toggle_current();
        assert_eq!(view.selection.len(), 1);
        assert!(!view.all_selected());

        view.toggle_all();
        assert_eq!(view.selection.len(), 4);
        assert!(view.all_selected());

        view.toggle_all();
        assert!(view.selection.is_empty());
    }

    #[test]
    fn test_current_database_path() {
        let mut view = view();
        view.set_search("audit");
        assert_eq!(
            view.current_database_path().as_deref(),
            Some("/database/AnalyticsDB")
        );
    }
}
