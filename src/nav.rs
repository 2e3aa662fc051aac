//! Route-driven navbar selection.
//!
//! Each path gets exactly one of four navbar variants. Selection is an
//! ordered exclusive chain so the variants can never render together.

/// The navbar variant shown for the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVariant {
    /// Storefront navbar with the Sell/Buy call-to-action buttons.
    Main,
    /// Shop navbar with the embedded search bar and catalog links.
    Shop,
    /// About navbar with the embedded search bar and company links.
    About,
    /// Sell navbar with the profile-image shortcut.
    Sell,
}

impl NavbarVariant {
    /// Selects the variant for `path`. First match wins; `Main` otherwise.
    pub fn for_path(path: &str) -> Self {
        if path == "/shop" {
            Self::Shop
        } else if path == "/about" {
            Self::About
        } else if path == "/sell" {
            Self::Sell
        } else {
            Self::Main
        }
    }
}

/// Class for a navbar link, highlighting it when its route is active.
pub fn active_class(current_path: &str, href: &str) -> &'static str {
    if current_path == href {
        "active"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_for_defined_paths() {
        assert_eq!(NavbarVariant::for_path("/"), NavbarVariant::Main);
        assert_eq!(NavbarVariant::for_path("/shop"), NavbarVariant::Shop);
        assert_eq!(NavbarVariant::for_path("/about"), NavbarVariant::About);
        assert_eq!(NavbarVariant::for_path("/sell"), NavbarVariant::Sell);
        assert_eq!(NavbarVariant::for_path("/contact"), NavbarVariant::Main);
        assert_eq!(NavbarVariant::for_path("/profile"), NavbarVariant::Main);
    }

    #[test]
    fn test_variant_falls_back_to_main() {
        assert_eq!(NavbarVariant::for_path("/xyz"), NavbarVariant::Main);
        assert_eq!(NavbarVariant::for_path(""), NavbarVariant::Main);
        assert_eq!(NavbarVariant::for_path("/shop/"), NavbarVariant::Main);
        assert_eq!(NavbarVariant::for_path("/SHOP"), NavbarVariant::Main);
    }

    #[test]
    fn test_selection_is_exclusive() {
        // Every path maps to exactly one variant, so the count of matching
        // variants is always one.
        for path in ["/", "/shop", "/about", "/sell", "/contact", "/profile", "/xyz"] {
            let selected = NavbarVariant::for_path(path);
            let matches = [
                NavbarVariant::Main,
                NavbarVariant::Shop,
                NavbarVariant::About,
                NavbarVariant::Sell,
            ]
            .iter()
            .filter(|v| **v == selected)
            .count();
            assert_eq!(matches, 1, "path {path} selected more than one variant");
        }
    }

    #[test]
    fn test_active_class_matches_exact_path() {
        assert_eq!(active_class("/shop", "/shop"), "active");
        assert_eq!(active_class("/", "/shop"), "");
        assert_eq!(active_class("/shop", "/"), "");
        assert_eq!(active_class("/contact", "/contact"), "active");
    }
}
