use log::debug;

use crate::models::{
    catalog::{Database, DatabaseStatus, Engine, Table, TableStatus, TableType},
    schema::{Column, ForeignKeyRef, TableDetail},
};

use super::CatalogStore;

/// Compiled-in sample catalog.
pub struct StaticCatalog {
    databases: Vec<Database>,
    tables: Vec<Table>,
    details: Vec<TableDetail>,
}

type DatabaseRow = (&'static str, u32, &'static str, &'static str, DatabaseStatus);

const DATABASES: [DatabaseRow; 4] = [
    ("UserDB", 15, "2.3GB", "2 mins ago", DatabaseStatus::Active),
    ("ProductDB", 8, "1.1GB", "5 mins ago", DatabaseStatus::Active),
    ("OrderDB", 12, "3.7GB", "1 hour ago", DatabaseStatus::Active),
    ("AnalyticsDB", 6, "850MB", "3 hours ago", DatabaseStatus::Maintenance),
];

// id, name, database, columns, records, size, last update, type, status, engine, last accessed, owner
type TableRow = (
    &'static str,
    &'static str,
    &'static str,
    u32,
    &'static str,
    &'static str,
    &'static str,
    TableType,
    TableStatus,
    Engine,
    &'static str,
    &'static str,
);

#[rustfmt::skip]
const TABLES: [TableRow; 10] = [
    ("1", "users", "UserDB", 12, "125,430", "45MB", "2 mins ago", TableType::Primary, TableStatus::Active, Engine::MySQL, "1 min ago", "john.doe"),
    ("2", "user_profiles", "UserDB", 18, "125,430", "78MB", "5 mins ago", TableType::Secondary, TableStatus::Active, Engine::MySQL, "3 mins ago", "jane.smith"),
    ("3", "products", "ProductDB", 15, "8,720", "12MB", "15 mins ago", TableType::Primary, TableStatus::Active, Engine::PostgreSQL, "10 mins ago", "mike.johnson"),
    ("4", "product_categories", "ProductDB", 5, "156", "1MB", "2 days ago", TableType::Lookup, TableStatus::Active, Engine::PostgreSQL, "4 hours ago", "sarah.wilson"),
    ("5", "orders", "OrderDB", 12, "89,340", "78MB", "5 mins ago", TableType::Primary, TableStatus::Active, Engine::MySQL, "2 mins ago", "david.brown"),
    ("6", "order_items", "OrderDB", 7, "234,580", "145MB", "5 mins ago", TableType::Secondary, TableStatus::Active, Engine::MySQL, "2 mins ago", "david.brown"),
    ("7", "user_sessions", "UserDB", 8, "892,100", "156MB", "30 secs ago", TableType::Log, TableStatus::Active, Engine::MySQL, "10 secs ago", "system"),
    ("8", "audit_logs", "AnalyticsDB", 11, "2,340,560", "890MB", "1 min ago", TableType::Log, TableStatus::Error, Engine::MongoDB, "5 mins ago", "system"),
    ("9", "app_settings", "UserDB", 4, "23", "256KB", "1 week ago", TableType::Config, TableStatus::Maintenance, Engine::MySQL, "2 days ago", "admin"),
    ("10", "orders", "ProductDB", 10, "89,340", "78MB", "5 mins ago", TableType::Primary, TableStatus::Active, Engine::PostgreSQL, "2 mins ago", "mike.johnson"),
];

impl StaticCatalog {
    pub fn new() -> Self {
        let databases = DATABASES
            .iter()
            .map(|&(name, table_count, size, last_update, status)| Database {
                name: name.to_string(),
                table_count,
                size: size.to_string(),
                last_update: last_update.to_string(),
                status,
            })
            .collect();

        let tables = TABLES
            .iter()
            .map(
                |&(
                    id,
                    name,
                    database,
                    columns,
                    records,
                    size,
                    last_update,
                    table_type,
                    status,
                    engine,
                    last_accessed,
                    owner,
                )| Table {
                    id: id.to_string(),
                    name: name.to_string(),
                    database: database.to_string(),
                    columns,
                    records: records.to_string(),
                    size: size.to_string(),
                    last_update: last_update.to_string(),
                    table_type,
                    status,
                    engine,
                    last_accessed: last_accessed.to_string(),
                    owner: owner.to_string(),
                },
            )
            .collect();

        Self {
            databases,
            tables,
            details: vec![product_orders_detail()],
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for StaticCatalog {
    fn databases(&self) -> Vec<Database> {
        self.databases.clone()
    }

    fn tables(&self) -> Vec<Table> {
        self.tables.clone()
    }

    fn find_database(&self, name: &str) -> Option<Database> {
        let found = self.databases.iter().find(|db| db.name == name).cloned();
        debug!("find_database({}) -> {}", name, found.is_some());
        found
    }

    fn find_tables_for_database(&self, name: &str) -> Vec<Table> {
        self.tables
            .iter()
            .filter(|table| table.database == name)
            .cloned()
            .collect()
    }

    fn find_columns(&self, database: &str, table: &str) -> Option<Vec<Column>> {
        self.find_table_detail(database, table)
            .map(|detail| detail.columns)
    }

    fn find_table_detail(&self, database: &str, table: &str) -> Option<TableDetail> {
        let found = self
            .details
            .iter()
            .find(|detail| detail.database == database && detail.table == table)
            .cloned();
        debug!(
            "find_table_detail({}, {}) -> {}",
            database,
            table,
            found.is_some()
        );
        found
    }
}

fn column(
    name: &str,
    data_type: &str,
    nullable: bool,
    default_value: Option<&str>,
    description: &str,
) -> Column {
    Column {
        name: name.to_string(),
        data_type: data_type.to_string(),
        nullable,
        default_value: default_value.map(str::to_string),
        is_primary_key: false,
        is_foreign_key: false,
        foreign_key_ref: None,
        description: Some(description.to_string()),
    }
}

fn references(mut column: Column, table: &str, target: &str) -> Column {
    column.is_foreign_key = true;
    column.foreign_key_ref = Some(ForeignKeyRef {
        table: table.to_string(),
        column: target.to_string(),
    });
    column
}

fn product_orders_detail() -> TableDetail {
    let mut order_id = column(
        "order_id",
        "BIGINT",
        false,
        None,
        "Unique identifier for each order",
    );
    order_id.is_primary_key = true;

    TableDetail {
        database: "ProductDB".to_string(),
        table: "orders".to_string(),
        description: "Customer order records with payment and shipping information".to_string(),
        engine: "PostgreSQL".to_string(),
        total_rows: "89,340".to_string(),
        data_size: "78.2 MB".to_string(),
        columns: vec![
            order_id,
            references(
                column(
                    "customer_id",
                    "BIGINT",
                    false,
                    None,
                    "Reference to customer who placed the order",
                ),
                "customers",
                "customer_id",
            ),
            references(
                column(
                    "product_id",
                    "BIGINT",
                    false,
                    None,
                    "Reference to the ordered product",
                ),
                "products",
                "product_id",
            ),
            column("quantity", "INT", false, Some("1"), "Number of items ordered"),
            column(
                "unit_price",
                "DECIMAL(10,2)",
                false,
                None,
                "Price per unit at time of order",
            ),
            column(
                "total_amount",
                "DECIMAL(10,2)",
                false,
                None,
                "Total order amount",
            ),
            column(
                "order_status",
                "ENUM",
                false,
                Some("'pending'"),
                "Current status of the order",
            ),
            column(
                "payment_method",
                "VARCHAR(50)",
                true,
                None,
                "Payment method used",
            ),
            column(
                "created_at",
                "TIMESTAMP",
                false,
                Some("CURRENT_TIMESTAMP"),
                "When the order was created",
            ),
            column(
                "updated_at",
                "TIMESTAMP",
                false,
                Some("CURRENT_TIMESTAMP"),
                "When the order was last updated",
            ),
        ],
    }
}
