use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::{errors::CatalogError, models::catalog::Table};

/// CSV column names, matching the serialized field order of [`Table`].
pub const CSV_HEADER: [&str; 12] = [
    "id",
    "name",
    "database",
    "columns",
    "records",
    "size",
    "last_update",
    "type",
    "status",
    "engine",
    "last_accessed",
    "owner",
];

/// Table list export to CSV, one header row plus one row per table.
pub fn export_csv(tables: &[Table], file_path: &Path) -> Result<(), CatalogError> {
    let file = File::create(file_path).map_err(|e| CatalogError::Export(e.to_string()))?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    wtr.write_record(CSV_HEADER)
        .map_err(|e| CatalogError::Export(e.to_string()))?;
    for table in tables {
        wtr.serialize(table)
            .map_err(|e| CatalogError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| CatalogError::Export(e.to_string()))?;
    info!("exported {} tables to {}", tables.len(), file_path.display());

    Ok(())
}

/// Table list export as a pretty-printed JSON array.
pub fn export_json(tables: &[Table], file_path: &Path) -> Result<(), CatalogError> {
    let file = File::create(file_path).map_err(|e| CatalogError::Export(e.to_string()))?;
    serde_json::to_writer_pretty(file, tables).map_err(|e| CatalogError::Export(e.to_string()))?;
    info!("exported {} tables to {}", tables.len(), file_path.display());

    Ok(())
}
