//! Generic Record Manager coordinating store, grid, form and detail view.
//!
//! # Responsibility
//! - Expose the UI shell lifecycle: open create/edit/view, close, submit.
//! - Route row actions to the form, the detail view or the store.
//!
//! # Invariants
//! - At most one of form and detail view is open at a time.
//! - The grid always renders from the current store contents.
//! - Deleting a record closes any detail view or edit form bound to it.

use crate::model::RecordId;
use crate::repo::record_store::{RecordRepository, RecordStore, StoreError, StoreResult};
use crate::schema::Entity;
use crate::service::detail::DetailView;
use crate::service::form::{FormController, FormMode, FormResult};
use crate::service::grid::{GridOptions, GridPage, GridView, RowAction};
use log::{info, warn};

/// One domain table with its overlays.
#[derive(Debug, Clone)]
pub struct RecordManager<T: Entity, R: RecordRepository<T> = RecordStore<T>> {
    repo: R,
    grid: GridView<T>,
    form: FormController<T>,
    detail: DetailView<T>,
}

impl<T: Entity> RecordManager<T> {
    /// Empty in-memory table.
    pub fn new() -> Self {
        Self::with_repository(RecordStore::new(), GridOptions::default())
    }

    /// In-memory table seeded with existing records.
    pub fn with_records(records: Vec<T>, options: GridOptions) -> Self {
        Self::with_repository(RecordStore::with_records(records), options)
    }
}

impl<T: Entity> Default for RecordManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity, R: RecordRepository<T>> RecordManager<T, R> {
    pub fn with_repository(repo: R, options: GridOptions) -> Self {
        Self {
            repo,
            grid: GridView::new(options),
            form: FormController::new(),
            detail: DetailView::new(),
        }
    }

    /// Store contents in insertion order.
    pub fn records(&self) -> &[T] {
        self.repo.list()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.repo.get(id)
    }

    pub fn grid(&self) -> &GridView<T> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridView<T> {
        &mut self.grid
    }

    pub fn form(&self) -> &FormController<T> {
        &self.form
    }

    pub fn detail(&self) -> &DetailView<T> {
        &self.detail
    }

    /// Current sorted page.
    pub fn page(&self) -> GridPage<T> {
        self.grid.render(self.repo.list())
    }

    /// "Add" button: empty create-mode draft.
    pub fn open_create(&mut self) {
        self.detail.close();
        self.form.open_create();
    }

    /// Opens the form seeded from the record with `id`.
    pub fn open_edit(&mut self, id: RecordId) -> StoreResult<()> {
        let record = self.lookup(id, "open_edit")?.clone();
        self.detail.close();
        self.form.open_edit(&record);
        Ok(())
    }

    /// Opens the read-only detail view for `id`.
    pub fn open_view(&mut self, id: RecordId) -> StoreResult<()> {
        let record = self.lookup(id, "open_view")?.clone();
        self.form.close();
        self.detail.open(record);
        Ok(())
    }

    /// Closes whichever overlay is open, discarding any draft.
    pub fn close(&mut self) {
        self.form.close();
        self.detail.close();
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        self.form.set_field(name, value)
    }

    /// Submits the open form; the grid reflects the result on next render.
    pub fn submit(&mut self) -> FormResult<T> {
        self.form.submit(&mut self.repo)
    }

    /// Removes the record with `id` from the store.
    pub fn delete(&mut self, id: RecordId) -> StoreResult<T> {
        let removed = self.repo.remove(id).map_err(|err| {
            warn!(
                "event=record_delete module={} status=error reason=not_found id={id}",
                T::DOMAIN
            );
            err
        })?;
        if self.detail.record().is_some_and(|shown| shown.id() == id) {
            self.detail.close();
        }
        if self.form.mode() == Some(FormMode::Edit(id)) {
            self.form.close();
        }
        info!(
            "event=record_delete module={} status=ok id={id} remaining={}",
            T::DOMAIN,
            self.repo.list().len()
        );
        Ok(removed)
    }

    /// Dispatches a row action from the actions column.
    pub fn act(&mut self, action: RowAction, id: RecordId) -> StoreResult<()> {
        match action {
            RowAction::View => self.open_view(id),
            RowAction::Edit => self.open_edit(id),
            RowAction::Delete => self.delete(id).map(|_| ()),
        }
    }

    fn lookup(&self, id: RecordId, action: &str) -> StoreResult<&T> {
        self.repo.get(id).ok_or_else(|| {
            warn!(
                "event={action} module={} status=error reason=not_found id={id}",
                T::DOMAIN
            );
            StoreError::NotFound(id)
        })
    }
}
