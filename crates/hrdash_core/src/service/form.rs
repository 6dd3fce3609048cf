//! Create/edit Form Controller.
//!
//! # Responsibility
//! - Hold a draft for one record, seeded empty (create) or from a record (edit).
//! - Validate on submit and commit through the repository.
//!
//! # Invariants
//! - A rejected submit keeps the form open with the full error map.
//! - A successful submit closes the form; edit mode never changes the id.
//! - `close()` discards the draft unconditionally.

use crate::model::RecordId;
use crate::repo::record_store::{RecordRepository, StoreError};
use crate::schema::{find_field, CoerceError, Draft, Entity};
use crate::validation::{validate, ErrorMap};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

/// Whether the form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    /// Label of the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Add",
            Self::Edit(_) => "Update",
        }
    }
}

/// Form lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Open {
        mode: FormMode,
        draft: Draft,
        errors: ErrorMap,
    },
}

/// Errors from form operations.
#[derive(Debug)]
pub enum FormError {
    /// Operation needs an open form.
    NotOpen,
    /// Field name is not declared by the entity schema.
    UnknownField(String),
    /// Validation failed; the form stays open.
    Invalid(ErrorMap),
    /// A validated draft could not be coerced into a record.
    Coerce(CoerceError),
    /// The repository rejected the commit.
    Store(StoreError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOpen => write!(f, "form is not open"),
            Self::UnknownField(name) => write!(f, "unknown form field: `{name}`"),
            Self::Invalid(errors) => {
                write!(f, "form has {} invalid field(s)", errors.len())
            }
            Self::Coerce(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coerce(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoerceError> for FormError {
    fn from(value: CoerceError) -> Self {
        Self::Coerce(value)
    }
}

impl From<StoreError> for FormError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub type FormResult<T> = Result<T, FormError>;

/// Draft editor for one entity type.
#[derive(Debug, Clone)]
pub struct FormController<T> {
    state: FormState,
    _entity: PhantomData<T>,
}

impl<T: Entity> FormController<T> {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            _entity: PhantomData,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            FormState::Open { mode, .. } => Some(*mode),
            FormState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            FormState::Open { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    /// Errors from the last rejected submit.
    pub fn errors(&self) -> Option<&ErrorMap> {
        match &self.state {
            FormState::Open { errors, .. } => Some(errors),
            FormState::Closed => None,
        }
    }

    /// Opens an empty create-mode draft, replacing any open draft.
    pub fn open_create(&mut self) {
        self.state = FormState::Open {
            mode: FormMode::Create,
            draft: Draft::from_defaults(T::fields()),
            errors: ErrorMap::new(),
        };
    }

    /// Opens an edit-mode draft seeded from `record`.
    pub fn open_edit(&mut self, record: &T) {
        self.state = FormState::Open {
            mode: FormMode::Edit(record.id()),
            draft: record.to_draft(),
            errors: ErrorMap::new(),
        };
    }

    /// Replaces one draft value.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        let FormState::Open { draft, .. } = &mut self.state else {
            return Err(FormError::NotOpen);
        };
        let spec = find_field(T::fields(), name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        draft.set(spec.name, value);
        Ok(())
    }

    /// Validates the draft and commits it through `repo`.
    ///
    /// Returns the stored record and closes the form on success. On
    /// validation failure the form stays open and carries the error map.
    pub fn submit<R: RecordRepository<T>>(&mut self, repo: &mut R) -> FormResult<T> {
        let FormState::Open {
            mode,
            draft,
            errors,
        } = &mut self.state
        else {
            return Err(FormError::NotOpen);
        };

        let found = validate::<T>(draft);
        if !found.is_empty() {
            debug!(
                "event=form_submit module={} status=rejected invalid_fields={}",
                T::DOMAIN,
                found.fields().join(",")
            );
            *errors = found.clone();
            return Err(FormError::Invalid(found));
        }
        errors.clear();

        let mode = *mode;
        let record = T::from_draft(draft)?;
        let committed = match mode {
            FormMode::Create => repo.insert(record).map_err(|err| {
                warn!(
                    "event=record_insert module={} status=error reason=ids_exhausted",
                    T::DOMAIN
                );
                err
            })?,
            FormMode::Edit(id) => repo.update(id, record).map_err(|err| {
                warn!(
                    "event=record_update module={} status=error reason=not_found id={id}",
                    T::DOMAIN
                );
                err
            })?,
        };

        info!(
            "event=form_submit module={} status=ok mode={} id={}",
            T::DOMAIN,
            match mode {
                FormMode::Create => "create",
                FormMode::Edit(_) => "edit",
            },
            committed.id()
        );
        self.state = FormState::Closed;
        Ok(committed)
    }

    /// Discards the draft without confirmation.
    pub fn close(&mut self) {
        self.state = FormState::Closed;
    }
}

impl<T: Entity> Default for FormController<T> {
    fn default() -> Self {
        Self::new()
    }
}
