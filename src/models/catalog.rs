use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Active,
    Maintenance,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Database {
    pub name: String,
    pub table_count: u32,
    pub size: String,
    pub last_update: String,
    pub status: DatabaseStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    Primary,
    Secondary,
    Lookup,
    Log,
    Config,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Active,
    Maintenance,
    Error,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    MySQL,
    PostgreSQL,
    MongoDB,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub database: String,
    pub columns: u32,
    pub records: String,
    pub size: String,
    pub last_update: String,
    #[serde(rename = "type")]
    pub table_type: TableType,
    pub status: TableStatus,
    pub engine: Engine,
    pub last_accessed: String,
    pub owner: String,
}

impl DatabaseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DatabaseStatus::Active => "active",
            DatabaseStatus::Maintenance => "maintenance",
        }
    }
}

impl TableType {
    pub const ALL: [TableType; 5] = [
        TableType::Primary,
        TableType::Secondary,
        TableType::Lookup,
        TableType::Log,
        TableType::Config,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TableType::Primary => "primary",
            TableType::Secondary => "secondary",
            TableType::Lookup => "lookup",
            TableType::Log => "log",
            TableType::Config => "config",
        }
    }
}

impl TableStatus {
    pub const ALL: [TableStatus; 3] = [
        TableStatus::Active,
        TableStatus::Maintenance,
        TableStatus::Error,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TableStatus::Active => "active",
            TableStatus::Maintenance => "maintenance",
            TableStatus::Error => "error",
        }
    }
}

impl Engine {
    pub fn as_str(&self) -> &str {
        match self {
            Engine::MySQL => "MySQL",
            Engine::PostgreSQL => "PostgreSQL",
            Engine::MongoDB => "MongoDB",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(DatabaseStatus, TableType, TableStatus, Engine);

impl FromStr for TableType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown table type: {}", s))
    }
}

impl FromStr for TableStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableStatus::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown table status: {}", s))
    }
}
