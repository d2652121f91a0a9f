//! Contact form and newsletter submissions (`/contact`).

use serde::{Deserialize, Serialize};

/// Body of `POST /contact/message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// Body of `POST /contact/newsletter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

/// Acknowledgement returned by both contact endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ContactReply {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
