use renovlux_api::types::{ContactFormData, ContactReply, NewsletterRequest};
use renovlux_api::Client;

use crate::error::LibError;
use crate::validation::{validate_contact_form, validate_email};

const ENDPOINT: &str = "/contact";

/// Contact form and newsletter submissions (`/contact`).
///
/// Input is validated before anything is sent; invalid input fails with
/// [`LibError::InvalidInput`] and never reaches the network.
#[derive(Debug, Clone)]
pub struct ContactApi {
    client: Client,
}

impl ContactApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn submit<B: serde::Serialize>(&self, endpoint: &str, body: &B) -> Result<ContactReply, LibError> {
        let resp = self
            .client
            .post::<Option<ContactReply>, B>(endpoint, Some(body))
            .await?;
        // An empty 2xx body still counts as accepted.
        Ok(resp.payload.unwrap_or_else(|| ContactReply {
            success: resp.succeeded,
            message: resp.message.unwrap_or_default(),
        }))
    }

    pub async fn send_message(&self, form: &ContactFormData) -> Result<ContactReply, LibError> {
        let form = validate_contact_form(form)?;
        self.submit(&format!("{}/message", ENDPOINT), &form).await
    }

    pub async fn subscribe_newsletter(&self, email: &str) -> Result<ContactReply, LibError> {
        let request = NewsletterRequest {
            email: validate_email(email)?,
        };
        self.submit(&format!("{}/newsletter", ENDPOINT), &request).await
    }
}
