use crate::{
    models::schema::{Column, TableDetail},
    router::{database_path, OVERVIEW_PATH},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogTab {
    #[default]
    Schema,
    Statistics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStats {
    pub total: usize,
    pub primary_keys: usize,
    pub foreign_keys: usize,
}

/// Table detail page with a schema tab and a statistics tab.
#[derive(Debug, Clone)]
pub struct TableCatalogView {
    pub detail: TableDetail,
    pub tab: CatalogTab,
    pub search: String,
}

impl TableCatalogView {
    pub fn new(detail: TableDetail) -> Self {
        Self {
            detail,
            tab: CatalogTab::Schema,
            search: String::new(),
        }
    }

    /// Switching tabs keeps the search term.
    pub fn switch_tab(&mut self, tab: CatalogTab) {
        self.tab = tab;
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            CatalogTab::Schema => CatalogTab::Statistics,
            CatalogTab::Statistics => CatalogTab::Schema,
        };
    }

    pub fn filtered_columns(&self) -> Vec<&Column> {
        let term = self.search.to_lowercase();
        self.detail
            .columns
            .iter()
            .filter(|column| column.matches(&term))
            .collect()
    }

    pub fn stats(&self) -> ColumnStats {
        let columns = &self.detail.columns;
        ColumnStats {
            total: columns.len(),
            primary_keys: columns.iter().filter(|c| c.is_primary_key).count(),
            foreign_keys: columns.iter().filter(|c| c.is_foreign_key).count(),
        }
    }

    /// `Home / {database} / {table}` with the path each crumb links to.
    pub fn breadcrumb(&self) -> Vec<(String, Option<String>)> {
        vec![
            ("Home".to_string(), Some(OVERVIEW_PATH.to_string())),
            (
                self.detail.database.clone(),
                Some(database_path(&self.detail.database)),
            ),
            (self.detail.table.clone(), None),
        ]
    }

    pub fn back_path(&self) -> String {
        database_path(&self.detail.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample::StaticCatalog, CatalogStore};

    fn orders() -> TableCatalogView {
        let detail = StaticCatalog::new()
            .find_table_detail("ProductDB", "orders")
            .unwrap();
        TableCatalogView::new(detail)
    }

    #[test]
    fn test_search_matches_name_or_type() {
        let mut view = orders();
        assert_eq!(view.filtered_columns().len(), 10);

        view.search = "Decimal".to_string();
        let names: Vec<&str> = view
            .filtered_columns()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["unit_price", "total_amount"]);

        view.search = "_at".to_string();
        assert_eq!(view.filtered_columns().len(), 2);

        view.search = "nothing".to_string();
        assert!(view.filtered_columns().is_empty());
    }

    #[test]
    fn test_search_survives_tab_switch() {
        let mut view = orders();
        view.search = "id".to_string();

        view.toggle_tab();
        assert_eq!(view.tab, CatalogTab::Statistics);
        view.switch_tab(CatalogTab::Schema);
        assert_eq!(view.search, "id");
        assert_eq!(view.filtered_columns().len(), 3);
    }

    #[test]
    fn test_column_stats() {
        let view = orders();
        assert_eq!(
            view.stats(),
            ColumnStats {
                total: 10,
                primary_keys: 1,
                foreign_keys: 2,
            }
        );
    }

    #[test]
    fn test_breadcrumb_and_back_path() {
        let view = orders();
        let crumbs = view.breadcrumb();
        let labels: Vec<&str> = crumbs.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "ProductDB", "orders"]);
        assert_eq!(crumbs[1].1.as_deref(), Some("/database/ProductDB"));
        assert_eq!(view.back_path(), "/database/ProductDB");
    }
}
