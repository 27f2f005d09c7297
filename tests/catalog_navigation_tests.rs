use dbcat::catalog::sample::StaticCatalog;
use dbcat::catalog::CatalogStore;
use dbcat::filter::{Filter, Selection, SortDirection, SortField, SortState, TableQuery};
use dbcat::models::catalog::{Engine, Table, TableStatus, TableType};
use dbcat::router::{Navigator, Route, View};
use dbcat::views::tables_list::TablesListView;

fn table(id: &str, name: &str, database: &str, columns: u32, owner: &str) -> Table {
    Table {
        id: id.to_string(),
        name: name.to_string(),
        database: database.to_string(),
        columns,
        records: "0".to_string(),
        size: "1MB".to_string(),
        last_update: "now".to_string(),
        table_type: TableType::Primary,
        status: TableStatus::Active,
        engine: Engine::PostgreSQL,
        last_accessed: "now".to_string(),
        owner: owner.to_string(),
    }
}

#[test]
fn test_engine_is_deterministic() {
    let tables = StaticCatalog::new().tables();
    let queries = [
        TableQuery::default(),
        TableQuery {
            search: "o".to_string(),
            sort: SortState::new(Some(SortField::Owner), SortDirection::Descending),
            ..Default::default()
        },
        TableQuery {
            status: Filter::Only(TableStatus::Active),
            sort: SortState::new(Some(SortField::Records), SortDirection::Ascending),
            ..Default::default()
        },
    ];

    for query in &queries {
        assert_eq!(query.apply(&tables), query.apply(&tables));
    }
}

#[test]
fn test_engine_does_not_mutate_source() {
    let tables = StaticCatalog::new().tables();
    let before = tables.clone();
    let query = TableQuery {
        sort: SortState::new(Some(SortField::Columns), SortDirection::Descending),
        ..Default::default()
    };

    let _ = query.apply(&tables);
    assert_eq!(tables, before);
}

#[test]
fn test_every_row_contains_search_term() {
    let tables = StaticCatalog::new().tables();

    for term in ["user", "DB", "SyS", "_", "o", "zzz", "Product"] {
        let query = TableQuery {
            search: term.to_string(),
            ..Default::default()
        };
        let needle = term.to_lowercase();
        for row in query.apply(&tables) {
            assert!(
                row.name.to_lowercase().contains(&needle)
                    || row.database.to_lowercase().contains(&needle)
                    || row.owner.to_lowercase().contains(&needle),
                "{} does not match {}",
                row.name,
                term
            );
        }
    }
}

#[test]
fn test_columns_sort_reverses_without_ties() {
    let tables = vec![
        table("a", "alpha", "X", 7, "ann"),
        table("b", "beta", "X", 3, "bob"),
        table("c", "gamma", "Y", 12, "cid"),
        table("d", "delta", "Y", 1, "dee"),
    ];

    let mut query = TableQuery {
        sort: SortState::new(Some(SortField::Columns), SortDirection::Ascending),
        ..Default::default()
    };
    let ascending = query.apply(&tables);
    query.sort.toggle(SortField::Columns);
    let mut descending = query.apply(&tables);
    descending.reverse();

    assert_eq!(ascending, descending);
    let counts: Vec<u32> = ascending.iter().map(|t| t.columns).collect();
    assert_eq!(counts, vec![1, 3, 7, 12]);
}

#[test]
fn test_find_database() {
    let store = StaticCatalog::new();
    assert_eq!(store.find_database("UserDB").unwrap().table_count, 15);
    assert!(store.find_database("NoSuchDB").is_none());
}

#[test]
fn test_navigate_to_orders_detail() {
    let store = StaticCatalog::new();
    let mut navigator = Navigator::default();
    navigator.navigate("/database/ProductDB/table/orders");

    match navigator.current_route().resolve(&store) {
        View::TableDetail(view) => {
            let columns = &view.detail.columns;
            assert_eq!(columns.len(), 10);

            let order_id = columns.iter().find(|c| c.name == "order_id").unwrap();
            assert!(order_id.is_primary_key);

            let customer_id = columns.iter().find(|c| c.name == "customer_id").unwrap();
            assert!(customer_id.is_foreign_key);
            let reference = customer_id.foreign_key_ref.as_ref().unwrap();
            assert_eq!(reference.table, "customers");
            assert_eq!(reference.column, "customer_id");
        }
        other => panic!("expected table detail, got {:?}", other),
    }
}

#[test]
fn test_navigate_to_unknown_table() {
    let store = StaticCatalog::new();
    let view = Route::parse("/database/ProductDB/table/unknown_table").resolve(&store);
    assert!(view.is_not_found());

    let view = Route::parse("/database/OrderDB/table/orders").resolve(&store);
    assert!(view.is_not_found());
}

#[test]
fn test_select_all_on_filtered_list() {
    let mut view = TablesListView::new(&StaticCatalog::new());
    view.set_search("db");
    view.cycle_status_filter();
    let visible = view.visible_ids();
    let k = visible.len();
    assert!(k > 1);

    view.toggle_current();
    assert!(!view.selection.is_empty() && view.selection.len() < k);

    view.toggle_all();
    assert_eq!(view.selection.len(), k);
    assert!(visible.iter().all(|id| view.selection.contains(id)));

    view.toggle_all();
    assert!(view.selection.is_empty());
}

#[test]
fn test_selection_is_independent_of_query() {
    let mut selection = Selection::new();
    selection.toggle("1");
    selection.toggle("5");

    let tables = StaticCatalog::new().tables();
    let query = TableQuery {
        database: Filter::Only("UserDB".to_string()),
        ..Default::default()
    };
    let visible = query.apply(&tables);

    assert_eq!(visible.len(), 4);
    assert!(selection.contains("5"));
    assert_eq!(selection.ids().collect::<Vec<_>>(), vec!["1", "5"]);
}

#[test]
fn test_tables_route_uses_unified_store() {
    let store = StaticCatalog::new();
    match Route::Tables.resolve(&store) {
        View::TablesList(view) => {
            for table in view.tables {
                assert!(store.find_database(&table.database).is_some());
            }
        }
        other => panic!("expected tables list, got {:?}", other),
    }
}
