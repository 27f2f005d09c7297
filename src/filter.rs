//! Search, filtering, sorting and multi-select over the table collection.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::models::catalog::{Table, TableStatus, TableType};

/// Equality filter; `All` lets every row through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

impl<T: PartialEq + Clone> Filter<T> {
    /// Next filter in the cycle `All -> options[0] -> ... -> options[n-1] -> All`.
    pub fn cycle(&self, options: &[T]) -> Filter<T> {
        match self {
            Filter::All => options
                .first()
                .cloned()
                .map_or(Filter::All, Filter::Only),
            Filter::Only(current) => {
                let next = options
                    .iter()
                    .position(|option| option == current)
                    .and_then(|i| options.get(i + 1));
                next.cloned().map_or(Filter::All, Filter::Only)
            }
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Database,
    Columns,
    Records,
    Size,
    LastUpdate,
    Type,
    Status,
    Engine,
    LastAccessed,
    Owner,
}

impl SortField {
    /// Parses an attribute name. Unknown names give `None`, which sorts nothing.
    pub fn parse(name: &str) -> Option<SortField> {
        let field = match name {
            "id" => SortField::Id,
            "name" => SortField::Name,
            "database" => SortField::Database,
            "columns" => SortField::Columns,
            "records" => SortField::Records,
            "size" => SortField::Size,
            "lastUpdate" | "last_update" => SortField::LastUpdate,
            "type" => SortField::Type,
            "status" => SortField::Status,
            "engine" => SortField::Engine,
            "lastAccessed" | "last_accessed" => SortField::LastAccessed,
            "owner" => SortField::Owner,
            _ => return None,
        };
        Some(field)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Database => "database",
            SortField::Columns => "columns",
            SortField::Records => "records",
            SortField::Size => "size",
            SortField::LastUpdate => "lastUpdate",
            SortField::Type => "type",
            SortField::Status => "status",
            SortField::Engine => "engine",
            SortField::LastAccessed => "lastAccessed",
            SortField::Owner => "owner",
        }
    }

    fn compare(&self, a: &Table, b: &Table) -> Ordering {
        match self {
            SortField::Columns => a.columns.cmp(&b.columns),
            SortField::Id => locale_compare(&a.id, &b.id),
            SortField::Name => locale_compare(&a.name, &b.name),
            SortField::Database => locale_compare(&a.database, &b.database),
            SortField::Records => locale_compare(&a.records, &b.records),
            SortField::Size => locale_compare(&a.size, &b.size),
            SortField::LastUpdate => locale_compare(&a.last_update, &b.last_update),
            SortField::Type => locale_compare(a.table_type.as_str(), b.table_type.as_str()),
            SortField::Status => locale_compare(a.status.as_str(), b.status.as_str()),
            SortField::Engine => locale_compare(a.engine.as_str(), b.engine.as_str()),
            SortField::LastAccessed => locale_compare(&a.last_accessed, &b.last_accessed),
            SortField::Owner => locale_compare(&a.owner, &b.owner),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: Some(SortField::Name),
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    pub fn new(field: Option<SortField>, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Same field flips the direction, a new field starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.flip();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }

    fn compare(&self, a: &Table, b: &Table) -> Ordering {
        let Some(field) = self.field else {
            return Ordering::Equal;
        };
        let ordering = field.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Locale-style string ordering: case-insensitive first, with punctuation
/// and whitespace before digits and digits before letters; lower case comes
/// before upper case when the strings differ only in case.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = collation_keys(a).cmp(collation_keys(b));
    if primary != Ordering::Equal {
        return primary;
    }

    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return if x.is_lowercase() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
    }
    a.len().cmp(&b.len())
}

fn collation_keys(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.chars().flat_map(char::to_lowercase).map(|c| {
        let class = if c.is_whitespace() || c.is_ascii_punctuation() {
            0
        } else if c.is_numeric() {
            1
        } else {
            2
        };
        (class, c)
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableQuery {
    pub search: String,
    pub database: Filter<String>,
    pub table_type: Filter<TableType>,
    pub status: Filter<TableStatus>,
    pub sort: SortState,
}

impl TableQuery {
    /// Computes the filtered, sorted view. The source slice is left untouched.
    ///
    /// Order of operations: search term, database filter, type filter, status
    /// filter, then a stable sort on the selected field.
    pub fn apply(&self, tables: &[Table]) -> Vec<Table> {
        let term = self.search.to_lowercase();

        let mut filtered: Vec<Table> = tables
            .iter()
            .filter(|table| term.is_empty() || matches_search(table, &term))
            .filter(|table| self.database.matches(&table.database))
            .filter(|table| self.table_type.matches(&table.table_type))
            .filter(|table| self.status.matches(&table.status))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| self.sort.compare(a, b));
        filtered
    }

    /// True when a search term or any equality filter is active.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
            || !self.database.is_all()
            || !self.table_type.is_all()
            || !self.status.is_all()
    }

    pub fn empty_state_hint(&self) -> &'static str {
        if self.is_filtered() {
            "Try adjusting your search or filter criteria."
        } else {
            "Get started by creating your first table."
        }
    }
}

fn matches_search(table: &Table, term: &str) -> bool {
    table.name.to_lowercase().contains(term)
        || table.database.to_lowercase().contains(term)
        || table.owner.to_lowercase().contains(term)
}

/// Checked table ids. Independent of the query that produced the visible rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Header checkbox state for the visible rows.
    pub fn all_selected(&self, filtered_ids: &[String]) -> bool {
        !filtered_ids.is_empty()
            && self.ids.len() == filtered_ids.len()
            && filtered_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Clears the selection when it already equals the visible rows,
    /// otherwise selects exactly the visible rows.
    pub fn toggle_all(&mut self, filtered_ids: &[String]) {
        let everything_selected = self.ids.len() == filtered_ids.len()
            && filtered_ids.iter().all(|id| self.ids.contains(id));

        if everything_selected {
            self.ids.clear();
        } else {
            self.ids = filtered_ids.iter().cloned().collect();
        }
    }
}

/// Summary cards for the tables page, over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub total: usize,
    pub active: usize,
    pub total_records: u64,
    pub avg_columns: u32,
}

impl TableStats {
    pub fn compute(tables: &[Table]) -> Self {
        let total = tables.len();
        let active = tables
            .iter()
            .filter(|t| t.status == TableStatus::Active)
            .count();
        let total_records = tables.iter().map(|t| parse_count(&t.records)).sum();
        let avg_columns = if total == 0 {
            0
        } else {
            let sum: u32 = tables.iter().map(|t| t.columns).sum();
            (f64::from(sum) / total as f64).round() as u32
        };

        Self {
            total,
            active,
            total_records,
            avg_columns,
        }
    }
}

/// Parses a record label such as `"2,340,560"`. Unparsable labels count as 0.
pub fn parse_count(label: &str) -> u64 {
    label.replace(',', "").trim().parse().unwrap_or(0)
}

/// Formats a count with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
