//! The pure state transition function and the pipeline stages it drives.
//!
//! Re-derivation order is fixed: sort, then filter, then search, then
//! paginate. Every operation that changes a stage input runs the whole
//! chain from the top, so no stale intermediate view ever leaks into the
//! visible rows.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::TableError;
use crate::model::{Fields, Row, SortFn, SortState};
use crate::sort::by_text_ascending;

use super::action::Action;
use super::state::{FilterFn, TableState};

/// Applies one action to the previous state, producing the next state.
///
/// Pure: the previous state is never mutated, so a failed operation leaves
/// the caller's state exactly as it was.
pub(crate) fn reduce<T: Fields>(
    state: &TableState<T>,
    action: Action<T>,
) -> Result<TableState<T>, TableError> {
    log::debug!("[Engine::reduce] {action:?}");

    match action {
        Action::SetRows { rows } => Ok(set_rows(state, rows)),
        Action::ToggleSort { column, ascending } => toggle_sort(state, &column, ascending),
        Action::SetFilter { filter } => Ok(set_filter(state, filter)),
        Action::SetSearchString { search } => Ok(set_search_string(state, search)),
        Action::SelectRow { id } => Ok(select_row(state, id)),
        Action::ToggleAll => Ok(toggle_all(state)),
        Action::NextPage => turn_page(state, "next_page", state.cursor.page + 1),
        Action::PrevPage => {
            // floor at page 1
            let page = state.cursor.page.saturating_sub(1).max(1);
            turn_page(state, "prev_page", page)
        }
    }
}

// =============================================================================
// Operations that re-derive the full pipeline
// =============================================================================

/// Replaces the row set with a new generation and re-runs the pipeline.
///
/// Selection does not migrate across generations: the incoming rows carry
/// fresh ids, so the previous selection is dropped before the filter stage
/// can re-apply it.
fn set_rows<T: Fields>(state: &TableState<T>, rows: Vec<Row<T>>) -> TableState<T> {
    let mut next = state.clone();
    next.original_rows = rows.clone();
    next.rows = rows;
    next.selected_rows.clear();
    next.toggle_all_state = false;
    run_pipeline(&mut next);
    next
}

/// Activates or flips the sort on a column, then re-runs the pipeline.
fn toggle_sort<T: Fields>(
    state: &TableState<T>,
    column: &str,
    ascending_override: Option<bool>,
) -> Result<TableState<T>, TableError> {
    let mut next = state.clone();

    let index = next
        .columns
        .iter()
        .position(|cs| cs.column.name == column)
        .ok_or_else(|| TableError::unknown_column(column))?;

    let ascending = ascending_override.unwrap_or_else(|| {
        let sorted = next.columns[index].sorted;
        // first activation sorts ascending, repeat activations flip
        if sorted.on { !sorted.asc } else { true }
    });

    // single-column sort: every other indicator is cleared
    for (i, cs) in next.columns.iter_mut().enumerate() {
        cs.sorted = if i == index {
            SortState { on: true, asc: ascending }
        } else {
            SortState::default()
        };
    }
    next.sort_column = Some(column.to_string());

    next.rows = next.original_rows.clone();
    run_pipeline(&mut next);
    Ok(next)
}

/// Installs or clears the custom filter, then re-runs the pipeline.
fn set_filter<T: Fields>(state: &TableState<T>, filter: Option<FilterFn<T>>) -> TableState<T> {
    let mut next = state.clone();
    next.filter = filter;
    next.rows = next.original_rows.clone();
    run_pipeline(&mut next);
    next
}

/// Sets the search string, then re-runs the pipeline.
fn set_search_string<T: Fields>(state: &TableState<T>, search: String) -> TableState<T> {
    let mut next = state.clone();
    next.search_string = search;
    next.rows = next.original_rows.clone();
    run_pipeline(&mut next);
    next
}

/// Runs the fixed sort → filter → search → paginate chain over the working
/// row set, resetting pagination to page 1, and refreshes the derived
/// selection views.
fn run_pipeline<T: Fields>(next: &mut TableState<T>) {
    apply_sort(next);
    apply_filter(next);
    apply_search(next);
    next.unpaginated_rows = next.rows.clone();
    apply_paginate(next, 1);
    refresh_selection(next);
}

/// Sort stage: re-applies the active sort column's ordering to the working
/// set. With no active sort column the existing order stands (a null sort
/// request never "unsorts").
fn apply_sort<T: Fields>(next: &mut TableState<T>) {
    let Some(name) = next.sort_column.clone() else {
        return;
    };
    // the active column always exists: toggle_sort validated it before
    // recording sort_column
    let Some(cs) = next.columns.iter().find(|cs| cs.column.name == name) else {
        return;
    };
    let ascending = cs.sorted.asc;

    let comparator: SortFn<T> = match &cs.column.sort {
        Some(custom) => custom.clone(),
        None => {
            let field = name.clone();
            Arc::new(by_text_ascending(move |row: &Row<T>| {
                row.original
                    .field(&field)
                    .map(|value| value.text())
                    .unwrap_or_default()
            }))
        }
    };

    next.rows.sort_by(|a, b| {
        let ordering = comparator(a, b);
        if ascending { ordering } else { ordering.reverse() }
    });

    // the canonical full set is the post-sort order
    next.original_rows = next.rows.clone();

    log::trace!("[Engine::sort] column '{name}' ascending={ascending}");
}

/// Filter stage: keeps the predicate's subset of the working set, carrying
/// selection flags onto rows the previous selection contains.
fn apply_filter<T: Fields>(next: &mut TableState<T>) {
    let Some(filter) = next.filter.clone() else {
        return;
    };

    let selected_ids: HashSet<_> = next.selected_rows.iter().map(|row| row.id).collect();
    let before = next.rows.len();

    let mut kept = filter(&next.rows);
    for row in kept.iter_mut() {
        if selected_ids.contains(&row.id) {
            row.selected = true;
        }
    }
    next.rows = kept;

    log::trace!("[Engine::filter] kept {} of {before} rows", next.rows.len());
}

/// Search stage: case-insensitive substring match against every cell's
/// value text. An empty search string keeps the post-filter set unchanged.
fn apply_search<T: Fields>(next: &mut TableState<T>) {
    if next.search_string.is_empty() {
        return;
    }

    let needle = next.search_string.to_uppercase();
    let before = next.rows.len();
    next.rows
        .retain(|row| row.cells.iter().any(|cell| cell.value.sort_key().contains(&needle)));

    log::trace!(
        "[Engine::search] '{}' kept {} of {before} rows",
        next.search_string,
        next.rows.len()
    );
}

/// Pagination stage: slices the visible page out of the post-search set and
/// recomputes the cursor booleans. With pagination disabled the whole
/// post-search set is visible.
fn apply_paginate<T: Fields>(next: &mut TableState<T>, page: usize) {
    if !next.pagination_enabled {
        next.rows = next.unpaginated_rows.clone();
        return;
    }

    let total = next.unpaginated_rows.len();
    let per_page = next.cursor.per_page;
    let start = (page - 1) * per_page;

    // running past the last page is allowed and yields an empty slice
    next.rows = if start >= total {
        Vec::new()
    } else {
        next.unpaginated_rows[start..(start + per_page).min(total)].to_vec()
    };

    next.cursor.page = page;
    next.cursor.can_next = page * per_page < total;
    next.cursor.can_prev = page != 1;

    log::trace!(
        "[Engine::paginate] page {page} shows {} of {total} rows",
        next.rows.len()
    );
}

/// Recomputes the derived selection views: `selected_rows` from the
/// canonical set, and the all-selected flag against the visible row count.
fn refresh_selection<T: Fields>(next: &mut TableState<T>) {
    next.selected_rows = next
        .original_rows
        .iter()
        .filter(|row| row.selected)
        .cloned()
        .collect();
    next.toggle_all_state = next.selected_rows.len() == next.rows.len();
}

// =============================================================================
// Selection operations (no pipeline re-derivation)
// =============================================================================

/// Toggles selection of one row in every retained view containing its id.
fn select_row<T: Fields>(state: &TableState<T>, id: usize) -> TableState<T> {
    let mut next = state.clone();

    for row in next.rows.iter_mut().filter(|row| row.id == id) {
        row.selected = !row.selected;
    }
    for row in next.unpaginated_rows.iter_mut().filter(|row| row.id == id) {
        row.selected = !row.selected;
    }
    for row in next.original_rows.iter_mut().filter(|row| row.id == id) {
        row.selected = !row.selected;
    }

    refresh_selection(&mut next);
    next
}

/// Selects every currently visible row if fewer are selected than visible,
/// otherwise deselects the visible rows. Rows filtered out of view are
/// never touched.
fn toggle_all<T: Fields>(state: &TableState<T>) -> TableState<T> {
    let mut next = state.clone();
    let select = next.selected_rows.len() < next.rows.len();

    let mut visible_ids = HashSet::new();
    for row in next.rows.iter_mut() {
        visible_ids.insert(row.id);
        row.selected = select;
    }
    for row in next.unpaginated_rows.iter_mut() {
        if visible_ids.contains(&row.id) {
            row.selected = select;
        }
    }
    for row in next.original_rows.iter_mut() {
        if visible_ids.contains(&row.id) {
            row.selected = select;
        }
    }

    next.selected_rows = next
        .original_rows
        .iter()
        .filter(|row| row.selected)
        .cloned()
        .collect();
    next.toggle_all_state = select;
    next
}

// =============================================================================
// Page navigation (re-slice only)
// =============================================================================

/// Moves the pagination cursor and re-slices the visible page out of the
/// post-search set. Sort, filter, and search are not re-run.
fn turn_page<T: Fields>(
    state: &TableState<T>,
    operation: &'static str,
    page: usize,
) -> Result<TableState<T>, TableError> {
    if !state.pagination_enabled {
        return Err(TableError::invalid_operation(operation));
    }

    let mut next = state.clone();
    apply_paginate(&mut next, page);
    next.toggle_all_state = next.selected_rows.len() == next.rows.len();
    Ok(next)
}
