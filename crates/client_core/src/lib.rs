use std::sync::Arc;

use shared::{
    domain::{SearchField, SearchQuery},
    error::{FormError, SubmissionError},
    protocol::SearchRequest,
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

pub mod config;
pub mod credentials;
pub mod feedback;
pub mod transport;

pub use config::{load_settings, ClientSettings};
pub use credentials::{
    CredentialProvider, MissingCredentialProvider, StaticCredentialProvider,
    StorageCredentialProvider,
};
pub use feedback::{ClientEvent, FeedbackModal, SubmissionOutcome, Toast, MODAL_TITLE};
pub use transport::{search_endpoint, HttpSearchTransport, SearchTransport};

struct SearchPageState {
    query: SearchQuery,
    outcome: SubmissionOutcome,
    modal: FeedbackModal,
    latest_submission: u64,
}

/// Owns the search form and turns submit actions into backend requests and user feedback.
///
/// Only the most recent submission may update the outcome and modal; responses to
/// older submissions are logged and dropped.
pub struct SearchPage {
    transport: Arc<dyn SearchTransport>,
    credentials: Arc<dyn CredentialProvider>,
    inner: Mutex<SearchPageState>,
    events: broadcast::Sender<ClientEvent>,
}

impl SearchPage {
    pub fn new(
        transport: Arc<dyn SearchTransport>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Arc<Self> {
        Self::with_query(transport, credentials, SearchQuery::default())
    }

    pub fn with_query(
        transport: Arc<dyn SearchTransport>,
        credentials: Arc<dyn CredentialProvider>,
        query: SearchQuery,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(256);
        Arc::new(Self {
            transport,
            credentials,
            inner: Mutex::new(SearchPageState {
                query,
                outcome: SubmissionOutcome::Idle,
                modal: FeedbackModal::Closed,
                latest_submission: 0,
            }),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    pub async fn query(&self) -> SearchQuery {
        self.inner.lock().await.query.clone()
    }

    pub async fn set_field(
        &self,
        field: SearchField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.inner.lock().await.query.set_field(field, value)
    }

    pub async fn outcome(&self) -> SubmissionOutcome {
        self.inner.lock().await.outcome.clone()
    }

    pub async fn modal(&self) -> FeedbackModal {
        self.inner.lock().await.modal.clone()
    }

    pub async fn dismiss_modal(&self) {
        let was_open = self.inner.lock().await.modal.dismiss();
        if was_open {
            let _ = self.events.send(ClientEvent::ModalClosed);
        }
    }

    /// Submits the current form. Never fails: every error ends up as a `Failure` outcome.
    ///
    /// The form is left as the user entered it whatever the result.
    pub async fn submit(&self) -> SubmissionOutcome {
        let (submission, request) = {
            let mut guard = self.inner.lock().await;
            guard.latest_submission += 1;
            (guard.latest_submission, SearchRequest::from(&guard.query))
        };
        debug!(submission, in_out = %request.in_out, "search submission queued");

        let token = match self.credentials.session_token().await {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => {
                return self
                    .finish(submission, Err(SubmissionError::MissingCredential))
                    .await;
            }
            Err(error) => {
                error!(%error, "failed to read session token from client storage");
                return self
                    .finish(submission, Err(SubmissionError::MissingCredential))
                    .await;
            }
        };

        let result = self
            .transport
            .submit_search(&token, &request)
            .await
            .map(|ack| feedback::success_message(&ack.message_code_text()));
        self.finish(submission, result).await
    }

    async fn finish(
        &self,
        submission: u64,
        result: Result<String, SubmissionError>,
    ) -> SubmissionOutcome {
        let outcome = match &result {
            Ok(message) => {
                info!(submission, %message, "search request acknowledged");
                SubmissionOutcome::Success {
                    message: message.clone(),
                }
            }
            Err(err) => {
                error!(
                    submission,
                    error = %err,
                    status = ?err.status(),
                    requires_reauth = err.requires_reauth(),
                    "error submitting search"
                );
                SubmissionOutcome::failure(err)
            }
        };

        let mut guard = self.inner.lock().await;
        if submission != guard.latest_submission {
            warn!(
                submission,
                latest = guard.latest_submission,
                "discarding outcome of superseded search submission"
            );
            return outcome;
        }

        guard.outcome = outcome.clone();
        match &outcome {
            SubmissionOutcome::Success { message } => {
                guard.modal.open(message.clone());
                let _ = self.events.send(ClientEvent::ModalOpened {
                    title: MODAL_TITLE.to_string(),
                    message: message.clone(),
                });
            }
            SubmissionOutcome::Failure { message } => {
                let _ = self.events.send(ClientEvent::Toast(Toast::error(message.clone())));
            }
            SubmissionOutcome::Idle => {}
        }
        outcome
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
