use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Value recorded in `source` for every form accepted by this service.
pub const WEBSITE_FORM_SOURCE: &str = "website-form";

/// A contact form after validation and normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub property_type: String,
    pub attic_type: String,
    pub privacy_accepted: bool,
}

/// Lifecycle state written on new records. Later states are set by staff
/// editing the store directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
}

/// A record as appended to the store. Existing entries are never decoded
/// into this type, so records from older writers keep their own shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub property_type: String,
    pub attic_type: String,
    pub privacy_accepted: bool,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub source: String,
}

impl Submission {
    pub fn new(form: ContactForm, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            full_name: form.full_name,
            phone: form.phone,
            email: form.email,
            address: form.address,
            city: form.city,
            postal_code: form.postal_code,
            property_type: form.property_type,
            attic_type: form.attic_type,
            privacy_accepted: form.privacy_accepted,
            submitted_at,
            status: SubmissionStatus::New,
            source: WEBSITE_FORM_SOURCE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let form = ContactForm {
            full_name: "Jane Doe".into(),
            phone: "612345678".into(),
            postal_code: "28001".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(Submission::new(form, Utc::now())).unwrap();

        assert_eq!(value["fullName"], "Jane Doe");
        assert_eq!(value["postalCode"], "28001");
        assert_eq!(value["status"], "new");
        assert_eq!(value["source"], "website-form");
        assert_eq!(value["privacyAccepted"], false);
        assert!(value["submittedAt"].is_string());
    }
}
