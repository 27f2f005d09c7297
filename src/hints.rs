//! Colour hints for enum values. Presentation only; the models never see these.

use ratatui::style::Color;

use crate::models::catalog::{DatabaseStatus, TableStatus, TableType};

pub fn table_status_color(status: TableStatus) -> Color {
    match status {
        TableStatus::Active => Color::Green,
        TableStatus::Maintenance => Color::Yellow,
        TableStatus::Error => Color::Red,
    }
}

pub fn database_status_color(status: DatabaseStatus) -> Color {
    match status {
        DatabaseStatus::Active => Color::Green,
        DatabaseStatus::Maintenance => Color::Yellow,
    }
}

pub fn table_type_color(table_type: TableType) -> Color {
    match table_type {
        TableType::Primary => Color::Blue,
        TableType::Secondary => Color::Magenta,
        TableType::Lookup => Color::Green,
        TableType::Log => Color::LightRed,
        TableType::Config => Color::Gray,
    }
}

/// Colour for a free-form column type label, by substring.
pub fn column_type_color(data_type: &str) -> Color {
    if data_type.contains("INT") {
        Color::Blue
    } else if data_type.contains("VARCHAR") || data_type.contains("TEXT") {
        Color::Green
    } else if data_type.contains("DECIMAL") {
        Color::Magenta
    } else if data_type.contains("TIMESTAMP") {
        Color::LightRed
    } else if data_type.contains("ENUM") {
        Color::Yellow
    } else {
        Color::Gray
    }
}
