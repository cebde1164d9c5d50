//! Create/edit dialog state around a single Draft Record.
//!
//! DESIGN
//! ======
//! The form is one enum slot, so at most one draft exists at a time: opening
//! a dialog replaces whatever draft was there. Drafts keep raw input text and
//! are only turned into a [`CagePayload`] by [`CageDraft::validate`], before
//! any network call is made.
//!
//! Every opened dialog gets a fresh session id. A [`MutationRequest`] carries
//! the id of the session that produced it, so a late answer can be matched
//! against the dialog that is open when it arrives.

#[cfg(test)]
#[path = "cage_form_test.rs"]
mod cage_form_test;

use crate::net::api::CageApi;
use crate::net::error::ApiError;
use crate::net::types::{Area, Cage, CagePayload};

/// Locally detected bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Cage name is required")]
    NameRequired,
    #[error("Max quantity is required")]
    QuantityRequired,
    #[error("Max quantity must be a whole number, got '{0}'")]
    QuantityNotNumber(String),
    #[error("Max quantity must be greater than zero")]
    QuantityNotPositive,
}

/// Why a submission did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no cage form is open")]
    NotEditing,
    #[error("a submission is already in progress")]
    InFlight,
}

/// Editable draft fields addressed by input name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CageField {
    Name,
    Description,
    MaxQuantity,
}

impl CageField {
    /// Input `name` attribute, matching the wire field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "animalCageName",
            Self::Description => "description",
            Self::MaxQuantity => "maxQuantity",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "animalCageName" => Some(Self::Name),
            "description" => Some(Self::Description),
            "maxQuantity" => Some(Self::MaxQuantity),
            _ => None,
        }
    }
}

/// Unsaved copy of a cage's editable fields, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CageDraft {
    pub name: String,
    pub description: String,
    pub max_quantity: String,
    pub area_id: Option<i64>,
}

impl CageDraft {
    pub fn from_cage(cage: &Cage) -> Self {
        Self {
            name: cage.name.clone(),
            description: cage.description.clone(),
            max_quantity: cage.max_quantity.to_string(),
            area_id: cage.area_id,
        }
    }

    pub fn field(&self, field: CageField) -> &str {
        match field {
            CageField::Name => &self.name,
            CageField::Description => &self.description,
            CageField::MaxQuantity => &self.max_quantity,
        }
    }

    pub fn set_field(&mut self, field: CageField, value: String) {
        match field {
            CageField::Name => self.name = value,
            CageField::Description => self.description = value,
            CageField::MaxQuantity => self.max_quantity = value,
        }
    }

    /// Check required fields and build the request body.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a blank name or a missing,
    /// non-numeric, or non-positive max quantity.
    pub fn validate(&self) -> Result<CagePayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let raw_quantity = self.max_quantity.trim();
        if raw_quantity.is_empty() {
            return Err(ValidationError::QuantityRequired);
        }
        let max_quantity = raw_quantity
            .parse::<i64>()
            .map_err(|_| ValidationError::QuantityNotNumber(raw_quantity.to_owned()))?;
        if max_quantity <= 0 {
            return Err(ValidationError::QuantityNotPositive);
        }
        Ok(CagePayload {
            id: None,
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            max_quantity,
            area_id: self.area_id,
        })
    }
}

/// Draft plus submission bookkeeping for an open dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftSession {
    pub id: u64,
    pub draft: CageDraft,
    pub submitting: bool,
    /// Last submission failure, shown inside the dialog.
    pub error: Option<String>,
}

/// Create/edit dialog state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    EditingNew(DraftSession),
    EditingExisting { cage_id: i64, session: DraftSession },
}

/// A validated create or update ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationRequest {
    Create { session: u64, payload: CagePayload },
    Update { session: u64, payload: CagePayload },
}

impl MutationRequest {
    pub fn payload(&self) -> &CagePayload {
        match self {
            Self::Create { payload, .. } | Self::Update { payload, .. } => payload,
        }
    }

    /// Id of the dialog session that produced this request.
    pub fn session(&self) -> u64 {
        match self {
            Self::Create { session, .. } | Self::Update { session, .. } => *session,
        }
    }

    /// Issue the request and return the server's feedback message.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by `api`.
    pub async fn send(&self, api: &dyn CageApi) -> Result<String, ApiError> {
        match self {
            Self::Create { payload, .. } => api.create_cage(payload).await,
            Self::Update { payload, .. } => api.update_cage(payload).await,
        }
    }
}

impl FormState {
    /// Open the create dialog with a blank draft.
    pub fn open_new(&mut self, session_id: u64) {
        *self = Self::EditingNew(DraftSession { id: session_id, ..DraftSession::default() });
    }

    /// Open the edit dialog pre-filled from `cage`.
    pub fn open_existing(&mut self, cage: &Cage, session_id: u64) {
        *self = Self::EditingExisting {
            cage_id: cage.id,
            session: DraftSession { id: session_id, draft: CageDraft::from_cage(cage), ..DraftSession::default() },
        };
    }

    /// Close the dialog and discard the draft.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Id of the cage being edited, if any.
    pub fn editing_id(&self) -> Option<i64> {
        match self {
            Self::EditingExisting { cage_id, .. } => Some(*cage_id),
            Self::Closed | Self::EditingNew(_) => None,
        }
    }

    pub fn session(&self) -> Option<&DraftSession> {
        match self {
            Self::Closed => None,
            Self::EditingNew(session) | Self::EditingExisting { session, .. } => Some(session),
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DraftSession> {
        match self {
            Self::Closed => None,
            Self::EditingNew(session) | Self::EditingExisting { session, .. } => Some(session),
        }
    }

    pub fn draft(&self) -> Option<&CageDraft> {
        self.session().map(|s| &s.draft)
    }

    /// Whether the open dialog is the session `session_id`.
    pub fn is_session(&self, session_id: u64) -> bool {
        self.session().is_some_and(|s| s.id == session_id)
    }

    /// Whether the open dialog has a submission awaiting the server.
    pub fn is_submitting(&self) -> bool {
        self.session().is_some_and(|s| s.submitting)
    }

    /// Update exactly one draft field. No-op when closed.
    pub fn handle_field_change(&mut self, field: CageField, value: String) {
        if let Some(session) = self.session_mut() {
            session.draft.set_field(field, value);
            session.error = None;
        }
    }

    /// Set or clear the draft's area reference. No-op when closed.
    pub fn handle_area_select(&mut self, area: Option<&Area>) {
        if let Some(session) = self.session_mut() {
            session.draft.area_id = area.map(|a| a.area_id);
            session.error = None;
        }
    }

    /// Validate the draft and mark the session as submitting.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NotEditing`] when closed,
    /// [`SubmitError::InFlight`] while a previous submission is pending, and
    /// [`SubmitError::Validation`] for bad input (recorded on the session).
    pub fn begin_submit(&mut self) -> Result<MutationRequest, SubmitError> {
        let editing_id = self.editing_id();
        let session = self.session_mut().ok_or(SubmitError::NotEditing)?;
        if session.submitting {
            return Err(SubmitError::InFlight);
        }
        let mut payload = match session.draft.validate() {
            Ok(payload) => payload,
            Err(e) => {
                session.error = Some(e.to_string());
                return Err(e.into());
            }
        };
        session.submitting = true;
        session.error = None;
        let session = session.id;
        Ok(match editing_id {
            Some(id) => {
                payload.id = Some(id);
                MutationRequest::Update { session, payload }
            }
            None => MutationRequest::Create { session, payload },
        })
    }

    /// Record a failed submission; the dialog stays open with its draft.
    pub fn fail_submit(&mut self, message: String) {
        if let Some(session) = self.session_mut() {
            session.submitting = false;
            session.error = Some(message);
        }
    }
}
