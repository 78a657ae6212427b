//! Fixed page content.
//!
//! Every list here is built once at compile time and never mutated; pages
//! iterate them in order and key each child by its position.

use crate::color::ColorToken;
use serde::Serialize;

/// An icon-led highlight shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// An image card shown on the gallery and catalog pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const BRAND: &str = "Showcase";

pub const HERO_TITLE: &str = "Build beautiful pages with reusable components";
pub const HERO_SUBTITLE: &str =
    "Compose buttons, cards and layouts from small pieces styled with utility classes.";
pub const HERO_CTA: &str = "Get Started";
pub const HERO_ALERT: &str = "Welcome! Thanks for checking out the showcase.";

pub const READ_MORE: &str = "Read More";

pub const FOOTER_NOTE: &str = "© 2026 Showcase. All rights reserved.";

pub const FEATURES: &[FeatureRecord] = &[
    FeatureRecord {
        icon: "⚡",
        title: "Fast",
        description: "Pages render from plain data in a single pass.",
    },
    FeatureRecord {
        icon: "🎨",
        title: "Styled",
        description: "Utility classes keep every component consistent.",
    },
    FeatureRecord {
        icon: "🧩",
        title: "Composable",
        description: "Small components snap together into complete layouts.",
    },
];

pub const CARDS: &[CardRecord] = &[
    CardRecord {
        title: "First Card",
        description: "This is a responsive card that looks good on all devices.",
        image_url: "https://i.pinimg.com/736x/c2/b8/4c/c2b84c5efcd83e5f72ff92f6a6c626eb.jpg",
    },
    CardRecord {
        title: "Second Card",
        description: "Another example of a responsive card component.",
        image_url: "https://i.pinimg.com/474x/e5/7e/3d/e57e3d7474ad492cae94484acd4ab150.jpg",
    },
    CardRecord {
        title: "Third Card",
        description: "Yet another beautiful card in our grid layout.",
        image_url: "https://i.pinimg.com/474x/e9/ff/73/e9ff7301d3409a0cac7952b159e4f08f.jpg",
    },
];

/// Label and color pairs of the sample button row.
pub const SAMPLE_BUTTONS: &[(&str, ColorToken)] = &[
    ("Primary Button", ColorToken::BLUE),
    ("Success Button", ColorToken::GREEN),
    ("Danger Button", ColorToken::RED),
];
