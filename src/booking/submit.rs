//! Outbound wire contract: one JSON POST per booking to the Make.com
//! webhook, no retries.

use std::fmt;

use chrono::{SecondsFormat, Utc};
use gloo_net::http::Request;
use serde::Serialize;

use crate::booking::validation::BookingFields;
use crate::config;

/// Exactly the body the webhook scenario expects. Every key is present
/// on every submission; untouched inputs contribute "" / false.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub website: String,
    pub preferred_date: String,
    pub time_preference: String,
    pub message: String,
    pub lead_source: String,
    pub privacy: bool,
    pub submitted_at: String,
    pub source: String,
}

impl BookingPayload {
    pub fn from_fields(fields: &BookingFields) -> Self {
        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            company: fields.company.clone(),
            website: fields.website.clone(),
            preferred_date: fields.preferred_date.clone(),
            time_preference: fields.time_preference.clone(),
            message: fields.message.clone(),
            lead_source: fields.lead_source.clone(),
            privacy: fields.privacy,
            submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: config::SOURCE_TAG.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum SubmitError {
    /// The request never produced a response.
    Request(gloo_net::Error),
    /// The webhook answered with a non-2xx status.
    Status(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Request(err) => write!(f, "request failed: {}", err),
            SubmitError::Status(status) => write!(f, "webhook answered with status {}", status),
        }
    }
}

impl From<gloo_net::Error> for SubmitError {
    fn from(err: gloo_net::Error) -> Self {
        SubmitError::Request(err)
    }
}

/// Send one booking to the webhook. The caller decides what the user
/// sees; this reports any non-2xx status as an error.
pub async fn send_booking(payload: &BookingPayload) -> Result<(), SubmitError> {
    let response = Request::post(config::webhook_url())
        .json(payload)?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn sample_fields() -> BookingFields {
        BookingFields {
            first_name: "Max".to_string(),
            last_name: "Mustermann".to_string(),
            email: "max@example.com".to_string(),
            phone: "+49 170 1234567".to_string(),
            company: "Musterfirma GmbH".to_string(),
            website: "https://musterfirma.de".to_string(),
            preferred_date: "2025-06-01T10:00".to_string(),
            time_preference: "vormittag".to_string(),
            message: "Bitte um Rückruf.".to_string(),
            lead_source: "empfehlung".to_string(),
            privacy: true,
        }
    }

    #[test]
    fn payload_carries_exactly_the_webhook_keys() {
        let payload = BookingPayload::from_fields(&sample_fields());
        let value = serde_json::to_value(&payload).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "company",
                "email",
                "firstName",
                "lastName",
                "leadSource",
                "message",
                "phone",
                "preferredDate",
                "privacy",
                "source",
                "submittedAt",
                "timePreference",
                "website",
            ]
        );
    }

    #[test]
    fn untouched_inputs_default_to_empty_or_false() {
        let payload = BookingPayload::from_fields(&BookingFields::default());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["website"], "");
        assert_eq!(value["message"], "");
        assert_eq!(value["privacy"], false);
    }

    #[test]
    fn source_is_the_fixed_site_tag() {
        let payload = BookingPayload::from_fields(&sample_fields());
        assert_eq!(payload.source, "subsisdium-website");
    }

    #[test]
    fn submitted_at_parses_back_within_the_test_window() {
        let before = Utc::now();
        let payload = BookingPayload::from_fields(&sample_fields());
        let after = Utc::now();

        let stamp = DateTime::parse_from_rfc3339(&payload.submitted_at)
            .unwrap()
            .with_timezone(&Utc);
        // millisecond precision truncates, allow for it on the lower bound
        assert!(stamp + chrono::Duration::milliseconds(1) >= before);
        assert!(stamp <= after);
        assert!(payload.submitted_at.ends_with('Z'));
    }

    #[test]
    fn status_errors_name_the_status() {
        let rendered = SubmitError::Status(500).to_string();
        assert!(rendered.contains("500"), "{}", rendered);
    }
}
