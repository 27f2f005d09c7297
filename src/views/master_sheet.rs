use crate::{
    catalog::CatalogStore,
    models::catalog::{Database, Table},
    router::{table_path, OVERVIEW_PATH},
};

use super::step_cursor;

/// Database detail page: the database record and its tables.
#[derive(Debug, Clone)]
pub struct MasterSheetView {
    pub database: Database,
    pub tables: Vec<Table>,
    pub cursor: usize,
}

impl MasterSheetView {
    pub fn new(database: Database, store: &dyn CatalogStore) -> Self {
        let tables = store.find_tables_for_database(&database.name);
        Self {
            database,
            tables,
            cursor: 0,
        }
    }

    pub fn move_cursor(&mut self, down: bool) {
        self.cursor = step_cursor(self.cursor, self.tables.len(), down);
    }

    pub fn selected_path(&self) -> Option<String> {
        self.tables
            .get(self.cursor)
            .map(|table| table_path(&self.database.name, &table.name))
    }

    pub fn back_path(&self) -> &'static str {
        OVERVIEW_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::StaticCatalog;

    #[test]
    fn test_master_sheet_lists_database_tables() {
        let store = StaticCatalog::new();
        let database = store.find_database("ProductDB").unwrap();
        let mut view = MasterSheetView::new(database, &store);

        let names: Vec<&str> = view.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["products", "product_categories", "orders"]);

        view.move_cursor(true);
        view.move_cursor(true);
        view.move_cursor(true);
        assert_eq!(
            view.selected_path().as_deref(),
            Some("/database/ProductDB/table/orders")
        );
        assert_eq!(view.back_path(), "/");
    }
}
