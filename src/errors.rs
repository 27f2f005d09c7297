use thiserror::Error;

/// Custom error type for catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The requested database is not part of the catalog.
    #[error("The database \"{0}\" could not be found.")]
    DatabaseNotFound(String),
    /// The database exists but has no catalog entry for the table.
    #[error("The table \"{table}\" in database \"{database}\" could not be found.")]
    TableNotFound { database: String, table: String },
    #[error("Export error: {0}")]
    Export(String),
    /// Configuration error (e.g., empty start path or invalid export directory).
    #[error("Configuration error: {0}")]
    Config(String),
    /// Terminal or filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
