//! Student application form model.
//!
//! Field names mirror the payload the future submission backend will
//! receive; until that endpoint exists the serialized form is only logged
//! (see [`crate::core::submit`]).

use std::fmt;

use serde::Serialize;

/// All fields of the apply-online form.
///
/// Every field except `study_abroad` (the free-text motivation) is
/// required; see [`ApplicationForm::validate`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub current_address: String,
    pub academic_qualification: String,
    pub study_destinations: Vec<String>,
    pub study_level: String,
    pub english_test: String,
    pub has_passport: String,
    pub study_abroad: String,
}

impl ApplicationForm {
    /// Add or remove a destination checkbox value.
    pub fn toggle_destination(&mut self, destination: &str) {
        if let Some(pos) = self.study_destinations.iter().position(|d| d == destination) {
            self.study_destinations.remove(pos);
        } else {
            self.study_destinations.push(destination.to_string());
        }
    }

    /// Check that all required fields are filled in.
    ///
    /// The browser enforces `required` on the inputs as well; this is the
    /// seam where server-side validation errors will surface once a real
    /// backend exists.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();

        let text_fields = [
            (self.full_name.as_str(), "full name"),
            (self.phone_number.as_str(), "phone number"),
            (self.email.as_str(), "email address"),
            (self.current_address.as_str(), "current address"),
            (self.academic_qualification.as_str(), "academic qualification"),
            (self.study_level.as_str(), "study level"),
            (self.english_test.as_str(), "English test status"),
            (self.has_passport.as_str(), "passport status"),
        ];
        for (value, name) in text_fields {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        if self.study_destinations.is_empty() {
            missing.push("study destination");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

/// Submission lifecycle of the apply-online page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Submission in flight; the submit button is disabled.
    Submitting,
    /// Terminal success state; shows the confirmation card.
    Submitted,
}

/// Client-side validation failures for the application form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// Required fields left empty, in form order.
    MissingFields(Vec<&'static str>),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                write!(f, "Please fill in: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for FormError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ApplicationForm {
        ApplicationForm {
            full_name: "Asha Shrestha".to_string(),
            phone_number: "+977 9800000000".to_string(),
            email: "asha@example.com".to_string(),
            current_address: "Lalitpur".to_string(),
            academic_qualification: "+2 Science - GPA 3.4".to_string(),
            study_destinations: vec!["UK".to_string()],
            study_level: "Bachelor's".to_string(),
            english_test: "IELTS".to_string(),
            has_passport: "Yes".to_string(),
            study_abroad: String::new(),
        }
    }

    #[test]
    fn test_complete_form_validates() {
        assert_eq!(complete_form().validate(), Ok(()));
    }

    #[test]
    fn test_motivation_is_optional() {
        let mut form = complete_form();
        form.study_abroad = String::new();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let mut form = complete_form();
        form.full_name = "   ".to_string();
        form.study_destinations.clear();
        match form.validate() {
            Err(FormError::MissingFields(missing)) => {
                assert_eq!(missing, vec!["full name", "study destination"]);
            }
            other => panic!("Expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_toggle_destination() {
        let mut form = ApplicationForm::default();
        form.toggle_destination("UK");
        form.toggle_destination("Canada");
        assert_eq!(form.study_destinations, vec!["UK", "Canada"]);

        // Toggling again removes
        form.toggle_destination("UK");
        assert_eq!(form.study_destinations, vec!["Canada"]);
    }

    #[test]
    fn test_payload_field_names() {
        let json = serde_json::to_value(complete_form()).expect("form serializes");
        assert!(json.get("fullName").is_some());
        assert!(json.get("studyDestinations").is_some());
        assert!(json.get("hasPassport").is_some());
    }
}
