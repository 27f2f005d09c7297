use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs, Wrap};
use ratatui::Frame;

use crate::{
    filter::{format_count, SortDirection},
    hints::{column_type_color, database_status_color, table_status_color, table_type_color},
    router::{NotFound, View},
    views::{
        master_sheet::MasterSheetView,
        overview::OverviewView,
        table_catalog::{CatalogTab, TableCatalogView},
        tables_list::TablesListView,
    },
};

use super::{components::InputMode, CatalogClientUI};

pub fn render(f: &mut Frame, ui: &CatalogClientUI) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.area());

    render_header(f, ui, chunks[0]);

    match &ui.view {
        View::Overview(view) => render_overview(f, view, chunks[1]),
        View::DatabaseDetail(view) => render_master_sheet(f, view, chunks[1]),
        View::TableDetail(view) => render_table_catalog(f, view, ui.input_mode, chunks[1]),
        View::TablesList(view) => render_tables_list(f, view, ui.input_mode, chunks[1]),
        View::NotFound(not_found) => render_not_found(f, not_found, chunks[1]),
    }

    render_footer(f, ui, chunks[2]);
}

fn render_header(f: &mut Frame, ui: &CatalogClientUI, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            ui.view.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            ui.navigator.current_path().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title("dbcat"));

    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame, ui: &CatalogClientUI, area: Rect) {
    let line = if ui.input_mode == InputMode::Path {
        Line::from(vec![
            Span::styled(":", Style::default().fg(Color::Yellow)),
            Span::raw(ui.path_input.clone()),
        ])
    } else if let Some(message) = &ui.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        ))
    } else {
        help_line(&ui.view, ui.input_mode)
    };

    let footer = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}

fn help_line(view: &View, mode: InputMode) -> Line<'static> {
    let mut keys: Vec<(&str, &str)> = if mode == InputMode::Search {
        vec![("Enter", "done"), ("Esc", "done")]
    } else {
        match view {
            View::Overview(_) => vec![("Up/Down", "navigate"), ("Enter", "open"), ("t", "tables")],
            View::DatabaseDetail(_) => {
                vec![("Up/Down", "navigate"), ("Enter", "open"), ("Esc", "overview")]
            }
            View::TableDetail(_) => vec![("Tab", "switch tab"), ("/", "search"), ("Esc", "back")],
            View::TablesList(_) => vec![
                ("/", "search"),
                ("d/t/s", "filters"),
                ("1-5", "sort"),
                ("Space", "select"),
                ("a", "all"),
                ("x", "export"),
                ("Enter", "database"),
            ],
            View::NotFound(_) => vec![("Enter", "recover")],
        }
    };
    if mode == InputMode::Normal {
        keys.push((":", "go to path"));
        keys.push(("q", "quit"));
    }

    let mut spans = Vec::new();
    for (i, (key, action)) in keys.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(", "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }
    Line::from(spans)
}

fn stat_card(f: &mut Frame, label: &str, value: String, area: Rect) {
    let card = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(label.to_string()));
    f.render_widget(card, area);
}

fn stat_row(f: &mut Frame, cards: Vec<(&str, String)>, area: Rect) {
    let width = 100 / cards.len().max(1) as u16;
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Percentage(width))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (label, value)) in cards.into_iter().enumerate() {
        stat_card(f, label, value, columns[i]);
    }
}

fn highlight(selected: bool) -> Style {
    if selected {
        Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_overview(f: &mut Frame, view: &OverviewView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)].as_ref())
        .split(area);

    stat_row(
        f,
        vec![
            ("Total Databases", view.stats.databases.to_string()),
            ("Total Tables", view.stats.tables.to_string()),
            ("Total Columns", view.stats.columns.to_string()),
            ("Active Databases", view.stats.active_databases.to_string()),
        ],
        chunks[0],
    );

    let items: Vec<ListItem> = view
        .databases
        .iter()
        .enumerate()
        .map(|(i, db)| {
            let line = Line::from(vec![
                Span::styled("● ", Style::default().fg(database_status_color(db.status))),
                Span::raw(format!(
                    "{:<14} {} tables • {} • {}",
                    db.name, db.table_count, db.size, db.last_update
                )),
            ]);
            ListItem::new(line).style(highlight(i == view.cursor))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Database Status")
            .borders(Borders::ALL),
    );
    f.render_widget(list, chunks[1]);
}

fn render_master_sheet(f: &mut Frame, view: &MasterSheetView, area: Rect) {
    let header = Row::new(vec![
        "Table Name",
        "Columns",
        "Records",
        "Size",
        "Last Update",
        "Status",
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .tables
        .iter()
        .enumerate()
        .map(|(i, table)| {
            Row::new(vec![
                Cell::from(table.name.clone()),
                Cell::from(table.columns.to_string()),
                Cell::from(table.records.clone()),
                Cell::from(table.size.clone()),
                Cell::from(table.last_update.clone()),
                Cell::from(Span::styled(
                    table.status.to_string(),
                    Style::default().fg(table_status_color(table.status)),
                )),
            ])
            .style(highlight(i == view.cursor))
        })
        .collect();

    let title = format!(
        "{} • {} • {} • updated {}",
        view.database.name, view.database.status, view.database.size, view.database.last_update
    );
    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(10),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
        Constraint::Percentage(20),
        Constraint::Percentage(15),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(table, area);
}

fn render_tables_list(f: &mut Frame, view: &TablesListView, mode: InputMode, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ]
            .as_ref(),
        )
        .split(area);

    stat_row(
        f,
        vec![
            ("Total Tables", view.stats.total.to_string()),
            ("Active Tables", view.stats.active.to_string()),
            ("Total Records", format_count(view.stats.total_records)),
            ("Avg Columns", view.stats.avg_columns.to_string()),
        ],
        chunks[0],
    );

    let sort = match view.query.sort.field {
        Some(field) => format!(
            "{} {}",
            field.as_str(),
            match view.query.sort.direction {
                SortDirection::Ascending => "↑",
                SortDirection::Descending => "↓",
            }
        ),
        None => "none".to_string(),
    };
    let search_style = if mode == InputMode::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let filters = Paragraph::new(Line::from(vec![
        Span::styled(format!("Search: {}", view.query.search), search_style),
        Span::raw(format!(
            "  Database: {}  Type: {}  Status: {}  Sort: {}",
            view.query.database, view.query.table_type, view.query.status, sort
        )),
    ]))
    .block(Block::default().title("Filters").borders(Borders::ALL));
    f.render_widget(filters, chunks[1]);

    let visible = view.visible();
    let mut title = format!("Tables ({})", visible.len());
    if !view.selection.is_empty() {
        title.push_str(&format!(" • {} selected", view.selection.len()));
    }
    let block = Block::default().title(title).borders(Borders::ALL);

    if visible.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No tables found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(view.query.empty_state_hint()),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, chunks[2]);
        return;
    }

    let header = Row::new(vec![
        if view.all_selected() { "[x]" } else { "[ ]" },
        "Table Name",
        "Engine",
        "Database",
        "Type",
        "Columns",
        "Records",
        "Size",
        "Status",
        "Owner",
        "Last Update",
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, table)| {
            let checkbox = if view.selection.contains(&table.id) {
                "[x]"
            } else {
                "[ ]"
            };
            Row::new(vec![
                Cell::from(checkbox),
                Cell::from(table.name.clone()),
                Cell::from(table.engine.to_string()),
                Cell::from(table.database.clone()),
                Cell::from(Line::from(vec![
                    Span::styled("● ", Style::default().fg(table_type_color(table.table_type))),
                    Span::raw(table.table_type.to_string()),
                ])),
                Cell::from(table.columns.to_string()),
                Cell::from(table.records.clone()),
                Cell::from(table.size.clone()),
                Cell::from(Span::styled(
                    table.status.to_string(),
                    Style::default().fg(table_status_color(table.status)),
                )),
                Cell::from(table.owner.clone()),
                Cell::from(table.last_update.clone()),
            ])
            .style(highlight(i == view.cursor))
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(18),
        Constraint::Length(10),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(11),
        Constraint::Length(12),
        Constraint::Length(11),
    ];
    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, chunks[2]);
}

fn render_table_catalog(f: &mut Frame, view: &TableCatalogView, mode: InputMode, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(3),
            ]
            .as_ref(),
        )
        .split(area);

    let crumbs: Vec<String> = view
        .breadcrumb()
        .into_iter()
        .map(|(label, _)| label)
        .collect();
    let info = Paragraph::new(vec![
        Line::from(Span::styled(
            crumbs.join(" / "),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(view.detail.description.clone()),
    ])
    .block(Block::default().borders(Borders::TOP | Borders::LEFT | Borders::RIGHT));
    f.render_widget(info, chunks[0]);

    let selected = match view.tab {
        CatalogTab::Schema => 0,
        CatalogTab::Statistics => 1,
    };
    let tabs = Tabs::new(vec!["Schema", "Statistics"])
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[1]);

    match view.tab {
        CatalogTab::Schema => render_schema_tab(f, view, mode, chunks[2]),
        CatalogTab::Statistics => render_statistics_tab(f, view, chunks[2]),
    }
}

fn render_schema_tab(f: &mut Frame, view: &TableCatalogView, mode: InputMode, area: Rect) {
    let columns = view.filtered_columns();
    let mut items: Vec<ListItem> = Vec::with_capacity(columns.len());

    for column in columns {
        let mut spans = vec![Span::styled(
            column.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if column.is_primary_key {
            spans.push(Span::styled(" PK", Style::default().fg(Color::Yellow)));
        }
        if column.is_foreign_key {
            spans.push(Span::styled(" FK", Style::default().fg(Color::Blue)));
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            column.data_type.clone(),
            Style::default().fg(column_type_color(&column.data_type)),
        ));
        if !column.nullable {
            spans.push(Span::styled(" NOT NULL", Style::default().fg(Color::Red)));
        }
        if let Some(default) = &column.default_value {
            spans.push(Span::styled(
                format!("  Default: {}", default),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(description) = &column.description {
            lines.push(Line::from(format!("  {}", description)));
        }
        if let Some(reference) = &column.foreign_key_ref {
            lines.push(Line::from(Span::styled(
                format!("  → References {}.{}", reference.table, reference.column),
                Style::default().fg(Color::Blue),
            )));
        }
        items.push(ListItem::new(lines));
    }

    let search = if mode == InputMode::Search {
        format!("search: {}_", view.search)
    } else if view.search.is_empty() {
        "/ to search".to_string()
    } else {
        format!("search: {}", view.search)
    };
    let title = format!("Columns ({}) • {}", view.detail.columns.len(), search);
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_statistics_tab(f: &mut Frame, view: &TableCatalogView, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let basic = Paragraph::new(vec![
        Line::from(format!("Total Rows: {}", view.detail.total_rows)),
        Line::from(format!("Data Size:  {}", view.detail.data_size)),
        Line::from(format!("Engine:     {}", view.detail.engine)),
    ])
    .block(
        Block::default()
            .title("Basic Information")
            .borders(Borders::ALL),
    );

    let stats = view.stats();
    let summary = Paragraph::new(vec![
        Line::from(format!("Total Columns: {}", stats.total)),
        Line::from(format!("Primary Keys:  {}", stats.primary_keys)),
        Line::from(format!("Foreign Keys:  {}", stats.foreign_keys)),
    ])
    .block(Block::default().title("Column Summary").borders(Borders::ALL));

    f.render_widget(basic, halves[0]);
    f.render_widget(summary, halves[1]);
}

fn render_not_found(f: &mut Frame, not_found: &NotFound, area: Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ]
            .as_ref(),
        )
        .split(area);

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            "Not found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(not_found.message.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", not_found.recovery_label)),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(body, centered_rect(70, vertical[1]));
}

fn centered_rect(percent_x: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    popup_layout[1]
}
