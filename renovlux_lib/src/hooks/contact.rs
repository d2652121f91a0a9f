use renovlux_api::types::{ContactFormData, ContactReply};
use tokio::sync::watch;

use crate::error::LibError;
use crate::messages::handle_api_error;
use crate::services::ContactApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub loading: bool,
    pub error: Option<String>,
}

/// Imperative contact submissions. Failures never surface as errors: they
/// come back as a reply with `success == false` and a display message, which
/// is also kept in the state.
pub struct ContactHook {
    api: ContactApi,
    state: watch::Sender<ContactState>,
}

impl ContactHook {
    pub fn new(api: ContactApi) -> Self {
        let (state, _) = watch::channel(ContactState::default());
        Self { api, state }
    }

    pub fn state(&self) -> ContactState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ContactState> {
        self.state.subscribe()
    }

    pub async fn send_message(&self, form: &ContactFormData) -> ContactReply {
        self.begin();
        let result = self.api.send_message(form).await;
        self.finish(result)
    }

    pub async fn subscribe_newsletter(&self, email: &str) -> ContactReply {
        self.begin();
        let result = self.api.subscribe_newsletter(email).await;
        self.finish(result)
    }

    fn begin(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn finish(&self, result: Result<ContactReply, LibError>) -> ContactReply {
        match result {
            Ok(reply) => {
                self.state.send_modify(|s| s.loading = false);
                reply
            }
            Err(e) => {
                let message = handle_api_error(&e);
                tracing::warn!("Contact submission failed: {}", e);
                self.state.send_modify(|s| {
                    s.loading = false;
                    s.error = Some(message.clone());
                });
                ContactReply::failed(message)
            }
        }
    }
}
