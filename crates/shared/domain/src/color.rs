use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A utility-class palette name (`blue`, `green`, `red`, ...).
///
/// The token is carried verbatim into class names such as `bg-{token}-500`,
/// so any palette known to the stylesheet works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(Cow<'static, str>);

impl ColorToken {
    pub const BLUE: Self = Self::from_static("blue");
    pub const GREEN: Self = Self::from_static("green");
    pub const RED: Self = Self::from_static("red");
    pub const GRAY: Self = Self::from_static("gray");

    #[must_use]
    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColorToken {
    fn default() -> Self {
        Self::BLUE
    }
}

impl From<&'static str> for ColorToken {
    fn from(token: &'static str) -> Self {
        Self::from_static(token)
    }
}

impl From<String> for ColorToken {
    fn from(token: String) -> Self {
        Self(Cow::Owned(token))
    }
}

impl AsRef<str> for ColorToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
