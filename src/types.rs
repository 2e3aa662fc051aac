//! Form snapshot types handed to the submission boundary.
//!
//! Each form-owning page assembles one of these from its own field signals
//! when the user submits. The JSON field names match what the future backend
//! will expect.

use serde::Serialize;

/// Contact-form snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Draft listing assembled by the sell page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub description: String,
    pub brand: String,
    pub price: String,
    /// Object URL of the uploaded photo, when one was chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Profile and payment-details snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub email: String,
    pub phone: String,
    pub card_number: String,
    pub payment_method: String,
    pub expiry_date: String,
    pub cvc: String,
}

impl ProfileUpdate {
    /// Sample account values shown until a real account API exists.
    pub fn seeded() -> Self {
        Self {
            email: "jessicaking.52@gmail.com".to_string(),
            phone: "020 7946 0958".to_string(),
            card_number: "4024 6000 0000 0000".to_string(),
            payment_method: String::new(),
            expiry_date: "01/25".to_string(),
            cvc: "123".to_string(),
        }
    }
}

/// Newsletter signup from the footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSignup {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_draft_from_brand_and_price_only() {
        let draft = ListingDraft {
            brand: "Apple".to_string(),
            price: "25".to_string(),
            ..Default::default()
        };

        assert_eq!(draft.brand, "Apple");
        assert_eq!(draft.price, "25");
        assert_eq!(draft.description, "");
        assert_eq!(draft.image, None);
    }

    #[test]
    fn test_listing_draft_json_omits_missing_image() {
        let draft = ListingDraft {
            description: "Lightly used".to_string(),
            brand: "Samsung".to_string(),
            price: "120".to_string(),
            image: None,
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["description"], "Lightly used");
        assert_eq!(json["brand"], "Samsung");
        assert_eq!(json["price"], "120");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_profile_update_edit_leaves_other_fields_seeded() {
        let seed = ProfileUpdate::seeded();

        let mut edited = seed.clone();
        edited.email = "a@b.com".to_string();

        assert_eq!(edited.email, "a@b.com");
        assert_eq!(edited.phone, seed.phone);
        assert_eq!(edited.card_number, seed.card_number);
        assert_eq!(edited.expiry_date, seed.expiry_date);
        assert_eq!(edited.cvc, seed.cvc);
        assert_eq!(edited.payment_method, seed.payment_method);
    }

    #[test]
    fn test_profile_update_json_uses_camel_case() {
        let json = serde_json::to_value(ProfileUpdate::seeded()).unwrap();
        assert!(json.get("cardNumber").is_some());
        assert!(json.get("expiryDate").is_some());
        assert!(json.get("card_number").is_none());
    }

    #[test]
    fn test_contact_message_defaults_empty() {
        let message = ContactMessage::default();
        assert_eq!(message.first_name, "");
        assert_eq!(message.last_name, "");
        assert_eq!(message.email, "");
        assert_eq!(message.phone, "");
        assert_eq!(message.message, "");
    }
}
