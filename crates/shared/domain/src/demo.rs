use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// One of the root page compositions.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Demo {
    /// Navbar, hero, icon feature grid and footer.
    #[default]
    Landing,
    /// Image card grid and the sample button row.
    Gallery,
    /// Navbar, hero, image card grid and footer.
    Catalog,
}

impl Demo {
    /// Human readable page title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => "Showcase · Landing",
            Self::Gallery => "Showcase · Gallery",
            Self::Catalog => "Showcase · Catalog",
        }
    }

    /// File name used when the page is exported.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{self}.html")
    }
}
