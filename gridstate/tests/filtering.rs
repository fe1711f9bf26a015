use gridstate::model::{CellValue, Column, Fields, Record, Row};
use gridstate::{Table, TableOptions};

fn columns() -> Vec<Column<Record>> {
    vec![
        Column::new("firstName").label("First Name"),
        Column::new("lastName").label("Last Name"),
    ]
}

fn data() -> Vec<Record> {
    vec![
        Record::new().set("firstName", "Frodo").set("lastName", "Baggins"),
        Record::new().set("firstName", "Bilbo").set("lastName", "Baggins"),
        Record::new().set("firstName", "Gandalf").set("lastName", "Grey"),
    ]
}

fn last_name(row: &Row<Record>) -> String {
    row.original
        .field("lastName")
        .map(|value| value.text())
        .unwrap_or_default()
}

// ============================================================================
// Custom filter
// ============================================================================

#[test]
fn test_filter_keeps_subset() {
    let options = TableOptions::new().filter(|rows: &[Row<Record>]| {
        rows.iter()
            .enumerate()
            .filter(|(index, _)| index % 2 == 0)
            .map(|(_, row)| row.clone())
            .collect()
    });
    let table = Table::with_options(columns(), &data(), options).unwrap();

    // 3 rows, indexes 0 and 2 survive
    assert_eq!(table.rows().len(), 2);
    // the canonical set is untouched
    assert_eq!(table.original_rows().len(), 3);
}

#[test]
fn test_set_and_clear_filter() {
    let mut table = Table::new(columns(), &data()).unwrap();
    assert_eq!(table.rows().len(), 3);

    table.set_filter(|rows: &[Row<Record>]| {
        rows.iter()
            .filter(|row| last_name(row) == "Baggins")
            .cloned()
            .collect()
    });
    assert_eq!(table.rows().len(), 2);

    table.clear_filter();
    assert_eq!(table.rows().len(), 3);
}

// ============================================================================
// Selection through filtering
// ============================================================================

#[test]
fn test_selection_persists_when_filtered_out() {
    let mut table = Table::new(columns(), &data()).unwrap();

    // select Frodo (id 0), then filter him out of view
    table.select_row(0);
    table.set_filter(|rows: &[Row<Record>]| {
        rows.iter()
            .filter(|row| last_name(row) != "Baggins")
            .cloned()
            .collect()
    });

    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.selected_rows().len(), 1);
    assert_eq!(table.selected_rows()[0].id, 0);

    // clearing the filter brings the row back, still selected
    table.clear_filter();
    assert!(table.rows()[0].selected);
    assert_eq!(table.selected_rows().len(), 1);
}

#[test]
fn test_selection_carried_onto_filtered_view() {
    let mut table = Table::new(columns(), &data()).unwrap();

    table.select_row(1);
    table.set_filter(|rows: &[Row<Record>]| {
        rows.iter()
            .filter(|row| last_name(row) == "Baggins")
            .cloned()
            .collect()
    });

    // Bilbo (id 1) is in the filtered view and still selected
    let bilbo = table.rows().iter().find(|row| row.id == 1).unwrap();
    assert!(bilbo.selected);
}

#[test]
fn test_toggle_all_under_filter_affects_filtered_rows_only() {
    let columns = vec![Column::new("n")];
    let data: Vec<Record> = (0..10)
        .map(|n| Record::new().set("n", n as i64))
        .collect();
    let mut table = Table::new(columns, &data).unwrap();

    table.set_filter(|rows: &[Row<Record>]| {
        rows.iter()
            .filter(|row| matches!(row.original.field("n"), Some(CellValue::Int(n)) if n < 3))
            .cloned()
            .collect()
    });
    assert_eq!(table.rows().len(), 3);

    table.toggle_all();
    assert_eq!(table.selected_rows().len(), 3);
    assert!(table.toggle_all_state());

    // rows outside the filter were never selected
    table.clear_filter();
    assert_eq!(table.selected_rows().len(), 3);
    assert_eq!(
        table.rows().iter().filter(|row| row.selected).count(),
        3
    );

    // toggle-all again under the filter deselects exactly those rows
    table.set_filter(|rows: &[Row<Record>]| {
        rows.iter()
            .filter(|row| matches!(row.original.field("n"), Some(CellValue::Int(n)) if n < 3))
            .cloned()
            .collect()
    });
    table.toggle_all();
    assert!(table.selected_rows().is_empty());
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_narrows_and_resets() {
    let mut table = Table::new(columns(), &data()).unwrap();
    assert_eq!(table.rows().len(), 3);

    table.set_search_string("Frodo");
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.rows()[0].cells[0].value.text(), "Frodo");

    table.set_search_string("");
    assert_eq!(table.rows().len(), 3);

    table.set_search_string("Bag");
    assert_eq!(table.rows().len(), 2);
}

#[test]
fn test_search_is_case_insensitive() {
    let mut table = Table::new(columns(), &data()).unwrap();

    table.set_search_string("bag");
    assert_eq!(table.rows().len(), 2);

    table.set_search_string("GANDALF");
    assert_eq!(table.rows().len(), 1);
}

#[test]
fn test_search_matches_any_cell() {
    let mut table = Table::new(columns(), &data()).unwrap();

    // "Grey" only appears in the lastName column
    table.set_search_string("Grey");
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.rows()[0].cells[0].value.text(), "Gandalf");
}

#[test]
fn test_search_applies_within_filtered_set() {
    let mut table = Table::new(columns(), &data()).unwrap();

    table.set_filter(|rows: &[Row<Record>]| {
        rows.iter()
            .filter(|row| last_name(row) == "Baggins")
            .cloned()
            .collect()
    });
    assert_eq!(table.rows().len(), 2);

    table.set_search_string("Frodo");
    assert_eq!(table.rows().len(), 1);

    // Gandalf matches the search but is filtered out upstream
    table.set_search_string("Gandalf");
    assert!(table.rows().is_empty());
}
