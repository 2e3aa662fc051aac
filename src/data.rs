//! Fixed sample data backing the storefront grids.
//!
//! Everything here is read-only display data; nothing mutates it at runtime.

/// A product shown in the shop and teaser grids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub name: &'static str,
    pub image: &'static str,
    pub price: &'static str,
}

/// Entry in the selling FAQ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Teaser grid on the home page
pub const TEASER_LISTINGS: &[Listing] = &[
    Listing {
        name: "Smartwatches",
        image: "/assets/watches.png",
        price: "$25",
    },
    Listing {
        name: "Laptops",
        image: "/assets/laptops.jpg",
        price: "$310",
    },
    Listing {
        name: "Phones",
        image: "/assets/phones.jpg",
        price: "$145",
    },
];

/// Featured products on the shop page
pub const SHOP_LISTINGS: &[Listing] = &[
    Listing {
        name: "Smartwatch",
        image: "/assets/watches.png",
        price: "$25",
    },
    Listing {
        name: "Ultrabook",
        image: "/assets/laptops.jpg",
        price: "$310",
    },
    Listing {
        name: "Smartphone",
        image: "/assets/phones.jpg",
        price: "$145",
    },
    Listing {
        name: "Headphones",
        image: "/assets/headphones.jpg",
        price: "$40",
    },
    Listing {
        name: "Sneakers",
        image: "/assets/sneakers.jpg",
        price: "$55",
    },
    Listing {
        name: "Camera",
        image: "/assets/camera.jpg",
        price: "$210",
    },
];

/// Questions shown by the sell page FAQ accordion
pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I list an item for sale?",
        answer: "Click the Sell button, fill in the item details, add a photo and a price, then submit the listing.",
    },
    FaqEntry {
        question: "Are there any fees for listing items?",
        answer: "Listing is free. A small commission is taken only when your item sells.",
    },
    FaqEntry {
        question: "How can I edit or delete my listing?",
        answer: "Open the listing from your profile page and use the edit or remove actions.",
    },
    FaqEntry {
        question: "What type of items are prohibited?",
        answer: "Anything illegal, counterfeit, or hazardous. Listings that break the rules are taken down.",
    },
    FaqEntry {
        question: "How do I ensure my listing gets more views?",
        answer: "Use clear photos, a descriptive title, and a fair price. Complete listings rank higher.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_order_is_stable() {
        assert_eq!(SHOP_LISTINGS[0].name, "Smartwatch");
        assert_eq!(SHOP_LISTINGS[0].price, "$25");
        assert_eq!(TEASER_LISTINGS[0].image, "/assets/watches.png");
    }

    #[test]
    fn test_grids_are_populated() {
        assert_eq!(TEASER_LISTINGS.len(), 3);
        assert_eq!(SHOP_LISTINGS.len(), 6);
        assert!(SHOP_LISTINGS.iter().all(|l| !l.name.is_empty()));
        assert!(SHOP_LISTINGS.iter().all(|l| l.price.starts_with('$')));
    }

    #[test]
    fn test_faq_entries_are_complete() {
        assert_eq!(FAQ_ENTRIES.len(), 5);
        assert!(FAQ_ENTRIES.iter().all(|e| !e.question.is_empty()));
        assert!(FAQ_ENTRIES.iter().all(|e| !e.answer.is_empty()));
    }
}
