use crate::models::{
    catalog::{Database, Table},
    schema::{Column, TableDetail},
};

pub mod sample;

/// Read-only lookups over the catalog.
///
/// Every view is derived from one store. Absence is reported as `None` (or an
/// empty list), never as an error; callers decide how to present it.
pub trait CatalogStore {
    fn databases(&self) -> Vec<Database>;
    fn tables(&self) -> Vec<Table>;
    fn find_database(&self, name: &str) -> Option<Database>;
    fn find_tables_for_database(&self, name: &str) -> Vec<Table>;
    fn find_columns(&self, database: &str, table: &str) -> Option<Vec<Column>>;
    fn find_table_detail(&self, database: &str, table: &str) -> Option<TableDetail>;

    /// Unique database names referenced by the table collection, first-seen order.
    fn database_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for table in self.tables() {
            if !names.contains(&table.database) {
                names.push(table.database);
            }
        }
        names
    }
}
