//! The task table: a paginated, sortable collection of display rows.
//!
//! [`TaskTable`] is the seam the synchronization controller talks to. It
//! only exposes what a data grid offers: add, remove and look up rows, read
//! and move the current page, and redraw (which re-applies the ordering).
//! [`PagedTable`] is the in-memory grid the CLI renders.

use super::row::DisplayRow;
use super::sorting::{sort_by_schedule, ScheduleSort, SortDirection, SortError};
use super::task::TaskId;

/// Paging state, with the current page 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub length: usize,
    pub pages: usize,
    pub records: usize,
}

impl PageInfo {
    /// Row number of the first row on the current page.
    pub fn first_number(&self) -> usize {
        self.page * self.length + 1
    }
}

pub trait TaskTable {
    fn add_row(&mut self, row: DisplayRow);

    fn remove_row(&mut self, id: TaskId) -> Option<DisplayRow>;

    fn row(&self, id: TaskId) -> Option<&DisplayRow>;

    fn row_mut(&mut self, id: TaskId) -> Option<&mut DisplayRow>;

    /// All rows, in display order.
    fn rows(&self) -> &[DisplayRow];

    fn clear(&mut self);

    fn page_info(&self) -> PageInfo;

    /// Moves to a 0-based page, clamped to the pages that exist.
    fn set_page(&mut self, page: usize);

    /// Rows on the current page, in display order.
    fn page_rows_mut(&mut self) -> &mut [DisplayRow];

    /// Re-applies the ordering without resetting the page.
    fn draw(&mut self) -> Result<(), SortError>;

    fn completed_count(&self) -> usize {
        self.rows().iter().filter(|row| row.completed).count()
    }
}

#[derive(Debug, Clone)]
pub struct PagedTable {
    rows: Vec<DisplayRow>,
    page: usize,
    page_size: usize,
    order: Option<(ScheduleSort, SortDirection)>,
}

impl PagedTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            page: 0,
            page_size: page_size.max(1),
            order: None,
        }
    }

    /// Orders rows chronologically by their schedule column on every draw.
    pub fn with_order(mut self, sort: ScheduleSort, direction: SortDirection) -> Self {
        self.order = Some((sort, direction));
        self
    }

    fn page_range(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(self.rows.len());
        let end = (start + self.page_size).min(self.rows.len());
        start..end
    }
}

impl TaskTable for PagedTable {
    fn add_row(&mut self, row: DisplayRow) {
        self.rows.push(row);
    }

    fn remove_row(&mut self, id: TaskId) -> Option<DisplayRow> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index))
    }

    fn row(&self, id: TaskId) -> Option<&DisplayRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn row_mut(&mut self, id: TaskId) -> Option<&mut DisplayRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.page = 0;
    }

    fn page_info(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            length: self.page_size,
            pages: self.rows.len().div_ceil(self.page_size),
            records: self.rows.len(),
        }
    }

    fn set_page(&mut self, page: usize) {
        let pages = self.page_info().pages;
        self.page = page.min(pages.saturating_sub(1));
    }

    fn page_rows_mut(&mut self) -> &mut [DisplayRow] {
        let range = self.page_range();
        &mut self.rows[range]
    }

    fn draw(&mut self) -> Result<(), SortError> {
        if let Some((sort, direction)) = &self.order {
            sort_by_schedule(&mut self.rows, sort, *direction, |row| row.schedule.as_str())?;
        }
        self.set_page(self.page);
        Ok(())
    }
}

/// Numbers the rows of the current page from `page * page_size + 1`.
pub fn renumber<T: TaskTable + ?Sized>(table: &mut T) {
    let first = table.page_info().first_number();
    for (offset, row) in table.page_rows_mut().iter_mut().enumerate() {
        row.number = first + offset;
    }
}
