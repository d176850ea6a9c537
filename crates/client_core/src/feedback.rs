//! User feedback for search submissions: outcome, modal state and toast events.

use std::time::Duration;

use shared::error::SubmissionError;

pub const MODAL_TITLE: &str = "Request Received";
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

pub fn success_message(message_code: &str) -> String {
    format!("Request received! Processing status: {message_code}")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Success {
        message: String,
    },
    Failure {
        message: String,
    },
}

impl SubmissionOutcome {
    pub fn failure(error: &SubmissionError) -> Self {
        Self::Failure {
            message: error.user_message().to_string(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Success { message } | Self::Failure { message } => Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Success modal. Opens on a successful submission and stays open until dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedbackModal {
    #[default]
    Closed,
    Open {
        message: String,
    },
}

impl FeedbackModal {
    pub fn open(&mut self, message: impl Into<String>) {
        *self = Self::Open {
            message: message.into(),
        };
    }

    pub fn dismiss(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open { message } => Some(message),
        }
    }
}

/// Fire-and-forget notification; the presenter hides it after `duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: TOAST_DURATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Toast(Toast),
    ModalOpened { title: String, message: String },
    ModalClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_reopens_after_dismissal() {
        let mut modal = FeedbackModal::default();
        assert!(!modal.is_open());

        modal.open(success_message("A1"));
        assert_eq!(modal.message(), Some("Request received! Processing status: A1"));

        assert!(modal.dismiss());
        assert_eq!(modal, FeedbackModal::Closed);
        assert!(!modal.dismiss());

        modal.open(success_message("A2"));
        assert!(modal.is_open());
    }

    #[test]
    fn failure_outcome_uses_user_message() {
        let outcome = SubmissionOutcome::failure(&SubmissionError::from_status(400));
        assert_eq!(outcome.message(), Some("Invalid search parameters."));
        assert!(!outcome.is_success());
    }
}
