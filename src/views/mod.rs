//! Page state derived from the catalog. Each view is rebuilt on navigation,
//! so search terms, filters, tabs and selections never outlive their route.

pub mod master_sheet;
pub mod overview;
pub mod table_catalog;
pub mod tables_list;

/// Moves a list cursor one step, clamped to `len`.
pub(crate) fn step_cursor(cursor: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (cursor + 1).min(len - 1)
    } else {
        cursor.saturating_sub(1)
    }
}
