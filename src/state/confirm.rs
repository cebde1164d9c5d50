//! Single-slot confirmation for destructive actions.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

pub const DELETE_CAGE_PROMPT: &str = "Are you sure you want to delete this cage?";

/// A deferred destructive operation awaiting the user's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    DeleteCage { cage_id: i64 },
}

/// `Idle -> AwaitingConfirmation -> Idle`. A new request overwrites an
/// outstanding one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    Idle,
    AwaitingConfirmation { action: PendingAction, message: String },
}

impl ConfirmState {
    pub fn request_confirmation(&mut self, action: PendingAction, message: impl Into<String>) {
        *self = Self::AwaitingConfirmation { action, message: message.into() };
    }

    /// Take the stored action for execution and return to `Idle`.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        match std::mem::take(self) {
            Self::AwaitingConfirmation { action, .. } => Some(action),
            Self::Idle => None,
        }
    }

    /// Discard the stored action without running it.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::AwaitingConfirmation { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::AwaitingConfirmation { message, .. } => Some(message),
            Self::Idle => None,
        }
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<PendingAction> {
        match self {
            Self::AwaitingConfirmation { action, .. } => Some(*action),
            Self::Idle => None,
        }
    }
}
