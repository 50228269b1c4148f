//! Contact form data types.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_RELAY_ENDPOINT, messages};

/// How a contact form submission is delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    /// POST the form as multipart data to a third-party relay.
    Relay {
        endpoint: String,
        /// Sent as `access_key`, replacing any hidden field of that name.
        access_key: Option<String>,
    },
    /// Log the fields locally and always report success.
    Simulated,
}

impl Default for SubmitMode {
    fn default() -> Self {
        Self::Relay {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            access_key: None,
        }
    }
}

impl SubmitMode {
    /// Message shown after a successful submission in this mode.
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Relay { .. } => messages::RELAY_SUCCESS,
            Self::Simulated => messages::SIMULATED_SUCCESS,
        }
    }
}

/// Field values captured from the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: String,
    pub message: String,
}

/// Acknowledgement body returned by the form relay.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Visible state of the form status message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl FormStatus {
    /// Class attribute for the status element.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Idle => "form-message",
            Self::Success(_) => "form-message success",
            Self::Error(_) => "form-message error",
        }
    }

    /// Message text, if any is shown.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Success(text) | Self::Error(text) => Some(text),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
