use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TableDetail {
    pub database: String,
    pub table: String,
    pub description: String,
    pub engine: String,
    pub total_rows: String,
    pub data_size: String,
    pub columns: Vec<Column>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    pub foreign_key_ref: Option<ForeignKeyRef>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub table: String,
    pub column: String,
}

impl Column {
    /// Case-insensitive match on the column name or its type label.
    ///
    /// `term` is expected to be lower case already.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.data_type.to_lowercase().contains(term)
    }
}
