//! Keeps the cage table, dialogs and confirmation slot consistent with the
//! remote store.
//!
//! ARCHITECTURE
//! ============
//! Each user operation is available in two shapes:
//! - `begin_*` / `finish_*` pairs that never hold state across an `.await`,
//!   for reactive pages that keep [`CageScreen`] inside a signal;
//! - a single `async fn` that runs both halves against a [`CageApi`].
//!
//! Outcomes are reported to the [`Notifications`] instance the caller passes
//! in. The `finish_*` functions return `true` when the cage list should be
//! re-fetched.
//!
//! CONSISTENCY
//! ===========
//! Nothing is applied before the server confirms. A confirmed update or
//! delete is patched into the list right away, then the list is re-fetched so
//! it matches the server (which also assigns ids to created cages).
//!
//! Responses may arrive out of order. Cage list fetches carry a ticket from
//! [`CagesState::begin_fetch`] and stale ones are dropped. A submit result only
//! touches the dialog when that dialog is still the session that sent it, and
//! only one submission is in flight per screen.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use crate::net::api::CageApi;
use crate::net::error::ApiError;
use crate::net::types::{Area, Cage};
use crate::state::cage_form::{FormState, MutationRequest, SubmitError};
use crate::state::cages::CagesState;
use crate::state::confirm::{ConfirmState, DELETE_CAGE_PROMPT, PendingAction};
use crate::state::notify::Notifications;

/// Results of the initial cage + area fan-out.
#[derive(Debug)]
pub struct LoadOutcome {
    pub cages: Result<Vec<Cage>, ApiError>,
    pub areas: Result<Vec<Area>, ApiError>,
}

/// Fetch cages and areas concurrently and wait for both.
pub async fn fetch_screen_data(api: &dyn CageApi) -> LoadOutcome {
    let (cages, areas) = futures::join!(api.list_cages(), api.list_areas());
    LoadOutcome { cages, areas }
}

impl PendingAction {
    /// Execute a confirmed action.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by `api`.
    pub async fn run(self, api: &dyn CageApi) -> Result<String, ApiError> {
        match self {
            Self::DeleteCage { cage_id } => api.delete_cage(cage_id).await,
        }
    }
}

/// Whole-screen state: table, create/edit dialog and confirmation slot.
#[derive(Clone, Debug, Default)]
pub struct CageScreen {
    pub list: CagesState,
    pub form: FormState,
    pub confirm: ConfirmState,
    last_session: u64,
    pending_submit: Option<u64>,
}

impl CageScreen {
    // =========================================================
    // Loading
    // =========================================================

    /// Mark the list as loading and return the fetch ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.list.begin_fetch()
    }

    /// Apply the fan-out results. Cage and area failures are independent.
    pub fn finish_load(&mut self, ticket: u64, outcome: LoadOutcome, notices: &mut Notifications) {
        let failure = outcome.cages.as_ref().err().map(ToString::to_string);
        if self.list.apply_fetched(ticket, outcome.cages)
            && let Some(e) = failure
        {
            notices.failure(format!("Could not load cages: {e}"));
        }
        self.list.apply_areas(outcome.areas);
    }

    pub async fn load(&mut self, api: &dyn CageApi, notices: &mut Notifications) {
        let ticket = self.begin_load();
        let outcome = fetch_screen_data(api).await;
        self.finish_load(ticket, outcome, notices);
    }

    /// Start a cage list re-fetch and return its ticket.
    pub fn begin_refresh(&mut self) -> u64 {
        self.list.begin_fetch()
    }

    /// Apply a re-fetch. A failure keeps the already patched rows; a result
    /// overtaken by a later fetch or mutation is dropped.
    pub fn finish_refresh(&mut self, ticket: u64, result: Result<Vec<Cage>, ApiError>) -> bool {
        self.list.apply_fetched(ticket, result)
    }

    /// Re-fetch the cage list after a mutation.
    pub async fn refresh(&mut self, api: &dyn CageApi) {
        let ticket = self.begin_refresh();
        let result = api.list_cages().await;
        self.finish_refresh(ticket, result);
    }

    // =========================================================
    // Create / edit
    // =========================================================

    fn next_session(&mut self) -> u64 {
        self.last_session += 1;
        self.last_session
    }

    pub fn open_create(&mut self) {
        let session = self.next_session();
        self.form.open_new(session);
    }

    /// Open the edit dialog for a listed cage; `false` if it is not listed.
    pub fn open_edit(&mut self, cage_id: i64) -> bool {
        let Some(cage) = self.list.cage(cage_id).cloned() else {
            return false;
        };
        let session = self.next_session();
        self.form.open_existing(&cage, session);
        true
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    /// Whether a submission is waiting for the server.
    pub fn submit_pending(&self) -> bool {
        self.pending_submit.is_some()
    }

    /// Validate the open draft and produce the request to send.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] while any submission from this screen
    /// is pending, even one whose dialog has since been replaced. Otherwise
    /// see [`FormState::begin_submit`]. Validation failures are also reported
    /// to `notices`.
    pub fn begin_submit(&mut self, notices: &mut Notifications) -> Result<MutationRequest, SubmitError> {
        if self.pending_submit.is_some() {
            return Err(SubmitError::InFlight);
        }
        let result = self.form.begin_submit();
        match &result {
            Ok(request) => self.pending_submit = Some(request.session()),
            Err(SubmitError::Validation(e)) => {
                notices.failure(e.to_string());
            }
            Err(_) => {}
        }
        result
    }

    /// Apply the server's answer to a submitted draft.
    ///
    /// The list is patched and the outcome notified regardless of which
    /// dialog is open, but only the session that sent `request` is closed or
    /// marked failed.
    pub fn finish_submit(
        &mut self,
        request: &MutationRequest,
        result: Result<String, ApiError>,
        notices: &mut Notifications,
    ) -> bool {
        let session = request.session();
        if self.pending_submit == Some(session) {
            self.pending_submit = None;
        }
        let own_dialog = self.form.is_session(session);
        match result {
            Ok(message) => {
                if let MutationRequest::Update { payload, .. } = request
                    && let Some(id) = payload.id
                {
                    let area_name = payload.area_id.and_then(|area_id| self.list.area_name(area_id));
                    self.list.replace_cage(payload.to_cage(id, area_name));
                } else {
                    self.list.mark_mutated();
                }
                if own_dialog {
                    self.form.close();
                }
                notices.success(message);
                true
            }
            Err(e) => {
                leptos::logging::warn!("cage submit failed: session={session} {e}");
                let message = e.to_string();
                if own_dialog {
                    self.form.fail_submit(message.clone());
                }
                notices.failure(message);
                false
            }
        }
    }

    /// Validate, send, apply and (on success) re-fetch.
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitError`] that stopped the submission; every failure
    /// has also been reported to `notices`.
    pub async fn submit(&mut self, api: &dyn CageApi, notices: &mut Notifications) -> Result<(), SubmitError> {
        let request = self.begin_submit(notices)?;
        let result = request.send(api).await;
        let failure = result.as_ref().err().cloned();
        if self.finish_submit(&request, result, notices) {
            self.refresh(api).await;
        }
        match failure {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    // =========================================================
    // Delete confirmation
    // =========================================================

    pub fn request_delete(&mut self, cage_id: i64) {
        self.confirm
            .request_confirmation(PendingAction::DeleteCage { cage_id }, DELETE_CAGE_PROMPT);
    }

    pub fn cancel_confirmation(&mut self) {
        self.confirm.cancel();
    }

    /// Take the confirmed action, leaving the slot idle.
    pub fn take_confirmed(&mut self) -> Option<PendingAction> {
        self.confirm.confirm()
    }

    /// Apply the server's answer to a confirmed action.
    pub fn finish_action(
        &mut self,
        action: PendingAction,
        result: Result<String, ApiError>,
        notices: &mut Notifications,
    ) -> bool {
        match (action, result) {
            (PendingAction::DeleteCage { cage_id }, Ok(message)) => {
                self.list.remove_cage(cage_id);
                if self.form.editing_id() == Some(cage_id) {
                    self.form.close();
                }
                notices.success(message);
                true
            }
            (PendingAction::DeleteCage { cage_id }, Err(e)) => {
                leptos::logging::warn!("cage delete failed: id={cage_id} {e}");
                notices.failure(e.to_string());
                false
            }
        }
    }

    /// Run the pending action, if any, and reconcile the list.
    ///
    /// Returns `None` when nothing was awaiting confirmation.
    pub async fn confirm(&mut self, api: &dyn CageApi, notices: &mut Notifications) -> Option<Result<(), ApiError>> {
        let action = self.take_confirmed()?;
        let result = action.run(api).await;
        let failure = result.as_ref().err().cloned();
        if self.finish_action(action, result, notices) {
            self.refresh(api).await;
        }
        Some(failure.map_or(Ok(()), Err))
    }
}
