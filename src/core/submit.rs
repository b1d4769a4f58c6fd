//! Application form submission.
//!
//! There is no backend yet: after validation the serialized payload is
//! logged to the console and the call resolves successfully after a fixed
//! delay standing in for the network round-trip. Swapping the delay for a
//! real request is the integration point for the future service, which is
//! why this goes through a `Result` even though it cannot currently fail
//! past validation.

use gloo_timers::future::TimeoutFuture;

use crate::config::SUBMIT_DELAY_MS;
use crate::core::error::SubmitError;
use crate::models::ApplicationForm;

/// Submit a student application.
///
/// Validates the form, then simulates the backend round-trip. The caller
/// is expected to hold `SubmitStatus::Submitting` for the duration and
/// surface the error message on failure.
pub async fn submit_application(form: &ApplicationForm) -> Result<(), SubmitError> {
    form.validate().map_err(SubmitError::Invalid)?;

    log_payload(form);
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;

    Ok(())
}

/// Log the outgoing payload for debugging until a real endpoint exists.
fn log_payload(form: &ApplicationForm) {
    #[cfg(target_arch = "wasm32")]
    if let Ok(payload) = serde_json::to_string(form) {
        web_sys::console::log_1(&format!("application payload: {}", payload).into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = form;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The async path needs a browser event loop for the timer; only the
    // validation gate is testable natively.
    #[test]
    fn test_empty_form_fails_validation() {
        let form = ApplicationForm::default();
        assert!(form.validate().is_err());
        let err = SubmitError::Invalid(form.validate().unwrap_err());
        assert!(err.to_string().contains("full name"));
    }
}
