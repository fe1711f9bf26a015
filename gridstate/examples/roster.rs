//! Roster example - drives a headless table through its full pipeline.
//!
//! Builds a small character roster, then exercises sorting, search,
//! selection, and pagination, printing the visible projection after each
//! step the way a renderer would read it.
//!
//! Run with `cargo run --example roster`; set `RUST_LOG`-style verbosity by
//! editing the `LevelFilter` below to see the engine's stage logging.

use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

use gridstate::model::{Column, Record};
use gridstate::{Pagination, Table, TableOptions};

// =============================================================================
// Fixture data
// =============================================================================

fn columns() -> Vec<Column<Record>> {
    vec![
        Column::new("name").label("Name"),
        Column::new("culture").label("Culture"),
        Column::new("age").label("Age"),
    ]
}

fn roster() -> Vec<Record> {
    vec![
        Record::new().set("name", "Frodo Baggins").set("culture", "Hobbit").set("age", 50i64),
        Record::new().set("name", "Samwise Gamgee").set("culture", "Hobbit").set("age", 38i64),
        Record::new().set("name", "Gandalf").set("culture", "Maia").set("age", 2019i64),
        Record::new().set("name", "Aragorn").set("culture", "Dunedain").set("age", 87i64),
        Record::new().set("name", "Legolas").set("culture", "Sindar").set("age", 500i64),
        Record::new().set("name", "Gimli").set("culture", "Dwarf").set("age", 139i64),
        Record::new().set("name", "Boromir").set("culture", "Gondorian").set("age", 40i64),
    ]
}

fn print_table(table: &Table<Record>) {
    let headers: Vec<String> = table
        .headers()
        .iter()
        .map(|header| {
            let indicator = if header.sorted.on {
                if header.sorted.asc { " ^" } else { " v" }
            } else {
                ""
            };
            format!("{}{indicator}", header.render())
        })
        .collect();
    println!("| {} |", headers.join(" | "));

    for row in table.rows() {
        let marker = if row.selected { "*" } else { " " };
        let cells: Vec<String> = row.cells.iter().map(|cell| cell.render()).collect();
        println!("{marker} {}", cells.join(" | "));
    }
    if let Some(cursor) = table.pagination() {
        println!(
            "  page {} (next: {}, prev: {})",
            cursor.page, cursor.can_next, cursor.can_prev
        );
    }
    println!();
}

fn main() -> Result<(), gridstate::TableError> {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());

    let options = TableOptions::new()
        .selectable()
        .sortable()
        .pagination(Pagination::PerPage(4));
    let mut table = Table::with_options(columns(), &roster(), options)?;

    println!("initial:");
    print_table(&table);

    println!("sorted by name:");
    table.toggle_sort("name", None)?;
    print_table(&table);

    println!("searching 'g':");
    table.set_search_string("g");
    print_table(&table);

    println!("select the first two visible rows, then toggle-all:");
    let first_two: Vec<_> = table.rows().iter().take(2).map(|row| row.id).collect();
    for id in first_two {
        table.select_row(id);
    }
    table.toggle_all();
    print_table(&table);

    println!("clear search, second page:");
    table.set_search_string("");
    table.next_page()?;
    print_table(&table);

    Ok(())
}
