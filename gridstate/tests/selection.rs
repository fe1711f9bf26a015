use gridstate::model::{Column, Record};
use gridstate::{Pagination, Table, TableOptions};

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

// ============================================================================
// Single-row selection
// ============================================================================

#[test]
fn test_select_row_toggles() {
    let mut table = Table::new(columns(), &data()).unwrap();
    assert!(table.selected_rows().is_empty());

    table.select_row(0);
    assert_eq!(table.selected_rows().len(), 1);
    assert_eq!(table.selected_rows()[0].id, 0);
    assert!(table.rows()[0].selected);

    table.select_row(0);
    assert!(table.selected_rows().is_empty());
    assert!(!table.rows()[0].selected);
}

#[test]
fn test_select_unknown_id_is_noop() {
    let mut table = Table::new(columns(), &data()).unwrap();
    table.select_row(99);
    assert!(table.selected_rows().is_empty());
}

#[test]
fn test_selecting_every_visible_row_sets_toggle_all_state() {
    let mut table = Table::new(columns(), &data()).unwrap();
    assert!(!table.toggle_all_state());

    table.select_row(0);
    table.select_row(1);
    assert!(!table.toggle_all_state());

    table.select_row(2);
    assert!(table.toggle_all_state());
}

// ============================================================================
// Toggle-all
// ============================================================================

#[test]
fn test_toggle_all_selects_then_deselects() {
    let mut table = Table::new(columns(), &data()).unwrap();

    table.toggle_all();
    assert_eq!(table.selected_rows().len(), 3);
    assert!(table.toggle_all_state());
    assert!(table.rows().iter().all(|row| row.selected));

    table.toggle_all();
    assert!(table.selected_rows().is_empty());
    assert!(!table.toggle_all_state());
    assert!(table.rows().iter().all(|row| !row.selected));
}

#[test]
fn test_toggle_all_with_partial_selection_selects_rest() {
    let mut table = Table::new(columns(), &data()).unwrap();

    table.select_row(1);
    assert_eq!(table.selected_rows().len(), 1);

    // fewer selected than visible: toggle-all selects everything visible
    table.toggle_all();
    assert_eq!(table.selected_rows().len(), 3);
    assert!(table.toggle_all_state());
}

// ============================================================================
// Selection under pagination
// ============================================================================

#[test]
fn test_toggle_all_only_affects_current_page() {
    let options = TableOptions::new().pagination(Pagination::PerPage(2));
    let mut table = Table::with_options(columns(), &data(), options).unwrap();
    assert_eq!(table.rows().len(), 2);

    table.toggle_all();
    // only the two visible rows were selected
    assert_eq!(table.selected_rows().len(), 2);
    assert!(table.toggle_all_state());

    table.next_page().unwrap();
    assert_eq!(table.rows().len(), 1);
    assert!(!table.rows()[0].selected);
    // selection is independent of visibility
    assert_eq!(table.selected_rows().len(), 2);
}

#[test]
fn test_selection_visible_across_page_turns() {
    let options = TableOptions::new().pagination(Pagination::PerPage(2));
    let mut table = Table::with_options(columns(), &data(), options).unwrap();

    table.select_row(0);
    table.next_page().unwrap();
    table.prev_page().unwrap();

    assert!(table.rows()[0].selected);
    assert_eq!(table.selected_rows().len(), 1);
}

// ============================================================================
// Dataset replacement
// ============================================================================

#[test]
fn test_replace_data_clears_selection() {
    let mut table = Table::new(columns(), &data()).unwrap();

    table.select_row(0);
    table.select_row(2);
    assert_eq!(table.selected_rows().len(), 2);

    table.replace_data(&data()).unwrap();
    assert!(table.selected_rows().is_empty());
    assert!(!table.toggle_all_state());
    assert!(table.rows().iter().all(|row| !row.selected));
}
