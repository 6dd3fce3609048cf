//! Table/Grid View: client-side sorting and pagination.
//!
//! # Responsibility
//! - Order store records by one selected column.
//! - Slice the ordered records into pages.
//!
//! # Invariants
//! - Sorting never mutates the store; it works on a copy.
//! - Ties keep store (insertion) order in both directions.
//! - Page size is always one of `PAGE_SIZE_OPTIONS`.

use crate::schema::Entity;
use std::marker::PhantomData;

/// Page size used when none (or an unsupported one) is requested.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Normalizes a requested page size to a supported option.
pub fn normalize_page_size(page_size: Option<usize>) -> usize {
    match page_size {
        Some(size) if PAGE_SIZE_OPTIONS.contains(&size) => size,
        _ => DEFAULT_PAGE_SIZE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

/// Initial grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub page_size: usize,
    pub sort: Option<SortState>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

/// Per-row actions exposed by the actions column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

/// One rendered page of records.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPage<T> {
    pub rows: Vec<T>,
    /// Zero-based page index actually rendered.
    pub page: usize,
    pub page_size: usize,
    /// Total records across all pages.
    pub total: usize,
    /// At least one, even for an empty store.
    pub page_count: usize,
    /// Filler rows that keep the table height stable on the last page.
    pub empty_rows: usize,
}

/// Sort and pagination state for one entity grid.
#[derive(Debug, Clone)]
pub struct GridView<T> {
    sort: Option<SortState>,
    page: usize,
    page_size: usize,
    _entity: PhantomData<T>,
}

impl<T: Entity> GridView<T> {
    pub fn new(options: GridOptions) -> Self {
        let sort = options
            .sort
            .filter(|state| is_sortable::<T>(state.column));
        Self {
            sort,
            page: 0,
            page_size: normalize_page_size(Some(options.page_size)),
            _entity: PhantomData,
        }
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Header click: flips direction on the active column, otherwise sorts
    /// the new column ascending.
    ///
    /// Returns `false` and leaves state unchanged for unknown or
    /// non-sortable columns.
    pub fn toggle_sort(&mut self, column: &str) -> bool {
        let Some(spec) = T::columns()
            .iter()
            .find(|spec| spec.key == column && spec.sortable)
        else {
            return false;
        };

        let direction = match self.sort {
            Some(state)
                if state.column == spec.key && state.direction == SortDirection::Ascending =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortState {
            column: spec.key,
            direction,
        });
        true
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = normalize_page_size(Some(page_size));
        self.page = 0;
    }

    /// Copy of `records` in the active sort order.
    pub fn sorted(&self, records: &[T]) -> Vec<T> {
        let mut rows = records.to_vec();
        if let Some(state) = self.sort {
            rows.sort_by(|left, right| {
                let ordering = match (left.sort_value(state.column), right.sort_value(state.column))
                {
                    (Some(left), Some(right)) => left.compare(&right),
                    _ => std::cmp::Ordering::Equal,
                };
                match state.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Sorted, paginated view of `records`.
    ///
    /// A page index past the end is clamped to the last page.
    pub fn render(&self, records: &[T]) -> GridPage<T> {
        let total = records.len();
        let page_count = self.page_count(total);
        let page = self.page.min(page_count - 1);
        let start = page * self.page_size;
        let rows: Vec<T> = self
            .sorted(records)
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();
        let empty_rows = if page > 0 {
            ((page + 1) * self.page_size).saturating_sub(total)
        } else {
            0
        };

        GridPage {
            rows,
            page,
            page_size: self.page_size,
            total,
            page_count,
            empty_rows,
        }
    }

    /// Display cells for one row, in column order, skipping the actions column.
    pub fn cells(&self, record: &T) -> Vec<(&'static str, String)> {
        T::columns()
            .iter()
            .filter_map(|spec| {
                record
                    .display_value(spec.key)
                    .map(|value| (spec.label, value))
            })
            .collect()
    }
}

impl<T: Entity> Default for GridView<T> {
    fn default() -> Self {
        Self::new(GridOptions::default())
    }
}

fn is_sortable<T: Entity>(column: &str) -> bool {
    T::columns()
        .iter()
        .any(|spec| spec.key == column && spec.sortable)
}
