//! Utility-class strings.
//!
//! Only [`button_classes`] varies with its input; everything else is fixed layout.

use showcase_domain::ColorToken;

/// Classes of a [`crate::components::Button`]; default and hover shades derive from `color` only.
#[must_use]
pub fn button_classes(color: &ColorToken) -> String {
    format!("bg-{color}-500 text-white px-4 py-2 rounded hover:bg-{color}-600")
}

pub const PAGE: &str = "min-h-screen bg-gray-100 flex flex-col";
pub const CONTAINER: &str = "container mx-auto p-4";
pub const GRID: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6";
pub const BUTTON_ROW: &str = "mt-8 space-x-4";

pub const NAVBAR: &str = "bg-white shadow";
pub const NAVBAR_INNER: &str = "container mx-auto px-4 py-3 flex items-center justify-between";
pub const BRAND: &str = "text-xl font-bold text-gray-800";
pub const NAV_ACTIONS: &str = "space-x-2";

pub const HERO: &str = "bg-gradient-to-r from-blue-600 to-indigo-700 text-white py-20";
pub const HERO_INNER: &str = "container mx-auto px-4 text-center";
pub const HERO_TITLE: &str = "text-4xl md:text-5xl font-bold mb-4";
pub const HERO_SUBTITLE: &str = "text-lg md:text-xl mb-8 text-blue-100";

pub const CARD: &str = "bg-white rounded-lg shadow-md p-4 md:p-6 lg:p-8";
pub const CARD_IMAGE: &str = "w-full h-32 md:h-48 object-cover rounded-t-lg";
pub const CARD_BODY: &str = "mt-4";
pub const CARD_TITLE: &str = "text-lg md:text-xl font-semibold";
pub const CARD_DESCRIPTION: &str = "text-gray-600 mt-2";

pub const FEATURE_CARD: &str = "bg-white rounded-xl shadow-lg p-6 text-center";
pub const FEATURE_ICON: &str = "text-4xl mb-4";
pub const FEATURE_TITLE: &str = "text-xl font-semibold text-gray-900 mb-2";
pub const FEATURE_DESCRIPTION: &str = "text-gray-600";

pub const FOOTER: &str = "mt-auto bg-gray-800 text-gray-300 py-6 text-center text-sm";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_classes_follow_the_color() {
        assert_eq!(
            button_classes(&ColorToken::GREEN),
            "bg-green-500 text-white px-4 py-2 rounded hover:bg-green-600"
        );
    }

    #[test]
    fn default_color_is_blue() {
        assert!(button_classes(&ColorToken::default()).starts_with("bg-blue-500 "));
    }
}
