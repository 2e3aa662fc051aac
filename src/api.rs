//! Submission boundary for the storefront forms.
//!
//! There is no backend yet: each function serializes the snapshot and logs it
//! against the endpoint the future server will expose. Swapping these for
//! real requests is the only change the pages will need.

use crate::types::{ContactMessage, ListingDraft, NewsletterSignup, ProfileUpdate};

/// Base URL the submission endpoints will live under
const API_BASE: &str = "http://localhost:3000";

/// Hand off a contact-form message (future `POST /api/contact`).
pub fn submit_contact(message: &ContactMessage) {
    log_submission("/api/contact", message);
}

/// Hand off a draft listing (future `POST /api/listings`).
pub fn submit_listing(draft: &ListingDraft) {
    log_submission("/api/listings", draft);
}

/// Hand off a profile/payment update (future `PUT /api/profile`).
pub fn submit_profile(update: &ProfileUpdate) {
    log_submission("/api/profile", update);
}

/// Hand off a newsletter signup (future `POST /api/newsletter`).
pub fn subscribe_newsletter(signup: &NewsletterSignup) {
    log_submission("/api/newsletter", signup);
}

fn log_submission<T: serde::Serialize>(endpoint: &str, payload: &T) {
    match serde_json::to_string(payload) {
        Ok(body) => {
            tracing::info!(url = %format!("{API_BASE}{endpoint}"), %body, "form submitted; no backend configured, payload dropped");
        }
        Err(e) => {
            tracing::error!("failed to serialize submission for {endpoint}: {e}");
        }
    }
}
