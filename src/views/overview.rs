use crate::{
    catalog::CatalogStore,
    models::catalog::{Database, DatabaseStatus, Table},
    router::database_path,
};

use super::step_cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewStats {
    pub databases: usize,
    pub tables: u32,
    pub columns: u32,
    pub active_databases: usize,
}

impl OverviewStats {
    pub fn compute(databases: &[Database], tables: &[Table]) -> Self {
        Self {
            databases: databases.len(),
            tables: databases.iter().map(|db| db.table_count).sum(),
            columns: tables.iter().map(|t| t.columns).sum(),
            active_databases: databases
                .iter()
                .filter(|db| db.status == DatabaseStatus::Active)
                .count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OverviewView {
    pub databases: Vec<Database>,
    pub stats: OverviewStats,
    pub cursor: usize,
}

impl OverviewView {
    pub fn new(store: &dyn CatalogStore) -> Self {
        let databases = store.databases();
        let stats = OverviewStats::compute(&databases, &store.tables());
        Self {
            databases,
            stats,
            cursor: 0,
        }
    }

    pub fn move_cursor(&mut self, down: bool) {
        self.cursor = step_cursor(self.cursor, self.databases.len(), down);
    }

    /// Path of the database under the cursor.
    pub fn selected_path(&self) -> Option<String> {
        self.databases
            .get(self.cursor)
            .map(|db| database_path(&db.name))
    }
}
